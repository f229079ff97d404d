#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the outbreak risk engine.
//!
//! Exposes the engine under `/api`:
//!
//! * `POST /api/predict` scores a [`PredictionInput`] and records it
//! * `GET /api/alerts` lists recorded predictions, newest first
//! * `GET /api/health` reports service status
//! * `GET /api/districts` lists known districts
//!
//! The alert history is the only mutable state. It lives in memory and is
//! also written to `ALERT_LOG_PATH` when that is set.
//!
//! [`PredictionInput`]: outbreak_risk_models::PredictionInput

pub mod alerts;
pub mod config;
mod handlers;
pub mod interactive;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

pub use alerts::AlertLog;
pub use config::ServerConfig;

/// Shared application state.
pub struct AppState {
    /// Settings the server was started with.
    pub config: ServerConfig,
    /// Served predictions.
    pub alerts: AlertLog,
}

impl AppState {
    /// Creates state with an alert history sized by `config`, loaded from
    /// its alert log file when one is configured.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let alerts = match &config.alert_log_path {
            Some(path) => AlertLog::with_file(config.alert_history_limit, path),
            None => AlertLog::new(config.alert_history_limit),
        };
        Self { config, alerts }
    }
}

/// Registers the `/api` routes.
///
/// The caller provides [`AppState`] as `web::Data` app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(handlers::json_error))
            .route("/predict", web::post().to(handlers::predict))
            .route("/alerts", web::get().to(handlers::alerts))
            .route("/health", web::get().to(handlers::health))
            .route("/districts", web::get().to(handlers::districts)),
    );
}

/// Starts the outbreak risk API server.
///
/// This is a regular async function. The caller provides the async runtime
/// (e.g. via `#[actix_web::main]`) and initializes logging.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let bind_addr = config.bind_addr.clone();
    let port = config.port;

    log::info!(
        "Loaded {} district profiles, keeping up to {} alerts{}{}",
        outbreak_risk_district::count(),
        config.alert_history_limit,
        config
            .alert_log_path
            .as_ref()
            .map_or_else(String::new, |p| format!(" in {}", p.display())),
        if config.strict_districts {
            ", rejecting unknown districts"
        } else {
            ""
        }
    );

    let state = web::Data::new(AppState::new(config));

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
