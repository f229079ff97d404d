//! Out-of-distribution input detection.
//!
//! Drift never rejects input; it only annotates the result so callers know
//! the heuristics are being applied outside the conditions they were tuned
//! for.

use outbreak_risk_models::{DriftStatus, PredictionInput};

use crate::confidence::{
    baseline_atypical, case_growth_atypical, rainfall_atypical, temperature_atypical,
};

/// Outcome of a drift check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftReport {
    /// `Warning` if any check failed.
    pub status: DriftStatus,
    /// One message per failed check, in check order.
    pub warnings: Vec<String>,
}

/// Checks rainfall, temperature, case growth and baseline, in that order.
#[must_use]
pub fn check_drift(input: &PredictionInput) -> DriftReport {
    let checks = [
        (
            rainfall_atypical(input.rainfall_dev),
            "Rainfall deviation outside typical range",
        ),
        (
            temperature_atypical(input.temperature),
            "Temperature outside typical range",
        ),
        (
            case_growth_atypical(input.case_growth),
            "Case growth rate unusually high",
        ),
        (
            baseline_atypical(input.baseline),
            "Baseline cases unusually high",
        ),
    ];

    let warnings: Vec<String> = checks
        .into_iter()
        .filter(|(failed, _)| *failed)
        .map(|(_, message)| message.to_string())
        .collect();

    let status = if warnings.is_empty() {
        DriftStatus::Stable
    } else {
        DriftStatus::Warning
    };

    DriftReport { status, warnings }
}
