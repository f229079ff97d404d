#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Deterministic district outbreak risk engine.
//!
//! Turns a district name and four environmental and epidemiological inputs
//! into a [`PredictionResult`]: a 0-100 score, its category, confidence and
//! uncertainty estimates, drift warnings, per-feature attributions, a
//! response plan, a nine-week forecast and explanatory text.
//!
//! The engine is total. Unknown districts are scored against the default
//! profile and out-of-range inputs are annotated as drift rather than
//! rejected, so [`predict_outbreak`] never fails. Use
//! [`PredictionInput::validate`] and [`require_known_district`] at API
//! boundaries that want to reject bad input instead.

pub mod confidence;
pub mod drift;
pub mod explain;
pub mod forecast;
pub mod insights;
pub mod reasoning;
pub mod response;
pub mod scoring;

use chrono::{DateTime, Utc};
use outbreak_risk_models::{InvalidInputError, PredictionInput, PredictionResult};

/// Runs a prediction stamped with the current time.
#[must_use]
pub fn predict_outbreak(input: &PredictionInput) -> PredictionResult {
    predict_outbreak_at(input, Utc::now())
}

/// Runs a prediction stamped with `timestamp`.
///
/// Identical inputs and timestamps always produce identical results.
#[must_use]
pub fn predict_outbreak_at(input: &PredictionInput, timestamp: DateTime<Utc>) -> PredictionResult {
    let profile = outbreak_risk_district::resolve(&input.district);

    let score = scoring::score(input, profile);
    let category = scoring::classify(score);
    let drift = drift::check_drift(input);

    log::debug!(
        "predict_outbreak: district={} score={score} category={category} drift={}",
        input.district,
        drift.status
    );

    PredictionResult {
        district: input.district.clone(),
        raw_score: score,
        calibrated_score: score,
        category,
        confidence: confidence::confidence(input),
        uncertainty: confidence::uncertainty(input, score),
        drift_status: drift.status,
        drift_warnings: drift.warnings,
        top_contributors: explain::explain(input),
        recommended_resources: response::resource_plan(category, profile),
        response: response::response_protocol(category),
        insights: insights::insights(&input.district, category, profile),
        forecast: forecast::forecast(category, input.baseline),
        reasoning: reasoning::reasoning(input, score, profile),
        timestamp,
    }
}

/// Rejects district names that are not in the reference table.
///
/// # Errors
///
/// Returns [`InvalidInputError::UnknownDistrict`] listing the known
/// districts when `district` is not one of them.
pub fn require_known_district(district: &str) -> Result<(), InvalidInputError> {
    if outbreak_risk_district::is_known(district) {
        return Ok(());
    }

    Err(InvalidInputError::UnknownDistrict {
        district: district.to_string(),
        valid: outbreak_risk_district::names()
            .into_iter()
            .map(ToString::to_string)
            .collect(),
    })
}
