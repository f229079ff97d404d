//! HTTP handler functions for the outbreak risk API.

use actix_web::{HttpRequest, HttpResponse, error, web};
use chrono::Utc;
use outbreak_risk_models::PredictionInput;
use outbreak_risk_server_models::{ApiHealth, MODEL_VERSION};

use crate::AppState;

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type("text/plain; charset=utf-8")
        .body(message.into())
}

/// Turns JSON extraction failures into plain-text `400` responses.
#[allow(clippy::needless_pass_by_value)]
pub fn json_error(err: error::JsonPayloadError, req: &HttpRequest) -> error::Error {
    let message = format!("Invalid prediction request: {err}");
    log::warn!("Rejected {} {}: {message}", req.method(), req.path());
    error::InternalError::from_response(err, bad_request(message)).into()
}

/// `POST /api/predict`
///
/// Scores the posted conditions and records the result in the alert
/// history.
pub async fn predict(
    state: web::Data<AppState>,
    body: web::Json<PredictionInput>,
) -> HttpResponse {
    let input = body.into_inner();

    if let Err(e) = input.validate() {
        log::warn!("Rejected prediction for '{}': {e}", input.district);
        return bad_request(e.to_string());
    }

    if state.config.strict_districts
        && let Err(e) = outbreak_risk::require_known_district(&input.district)
    {
        log::warn!("Rejected prediction: {e}");
        return bad_request(e.to_string());
    }

    let result = outbreak_risk::predict_outbreak(&input);
    let alert = state.alerts.record(&result);

    log::info!(
        "Prediction #{} for {}: {} ({})",
        alert.id,
        result.district,
        result.calibrated_score,
        result.category
    );

    HttpResponse::Ok().json(result)
}

/// `GET /api/alerts`
///
/// Returns recorded predictions, newest first.
pub async fn alerts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.alerts.recent())
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        status: "operational".to_string(),
        active_districts: outbreak_risk_district::count(),
        model_version: MODEL_VERSION.to_string(),
        last_sync: Utc::now(),
    })
}

/// `GET /api/districts`
///
/// Lists known district names in display order.
pub async fn districts() -> HttpResponse {
    HttpResponse::Ok().json(outbreak_risk_district::names())
}
