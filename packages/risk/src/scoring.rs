//! Additive risk score.
//!
//! The score is a point budget split across six independently bounded
//! terms. The four input-driven terms are public so the attribution in
//! [`crate::explain`] uses exactly the same arithmetic.
//!
//! | Term          | Points |
//! |---------------|--------|
//! | district base | 0-40   |
//! | rainfall      | 0-25   |
//! | temperature   | 0-20   |
//! | case growth   | 0-30   |
//! | baseline      | 0-15   |
//! | density       | 0-10   |
//!
//! Threshold comparisons (`>` vs `>=`) are part of the contract: they
//! create deliberate discontinuities in the score.

#![allow(clippy::suboptimal_flops)]

use outbreak_risk_district_models::DistrictProfile;
use outbreak_risk_models::{PredictionInput, RiskCategory};

/// District prior: `baseline_risk × 40`.
#[must_use]
pub fn district_term(profile: &DistrictProfile) -> f64 {
    profile.baseline_risk * 40.0
}

/// Rainfall deviation term (mm from normal).
///
/// Heavy rainfall creates breeding sites; severe drought adds a small
/// stress component.
#[must_use]
pub fn rainfall_term(rainfall_dev: f64) -> f64 {
    if rainfall_dev > 40.0 {
        25.0
    } else if rainfall_dev > 20.0 {
        15.0 + (rainfall_dev - 20.0) * 0.5
    } else if rainfall_dev > 0.0 {
        rainfall_dev * 0.75
    } else if rainfall_dev < -30.0 {
        5.0
    } else {
        0.0
    }
}

/// Temperature term (°C). Vector breeding peaks between 28 and 35 °C.
#[must_use]
pub fn temperature_term(temperature: f64) -> f64 {
    if (28.0..=35.0).contains(&temperature) {
        20.0
    } else if (25.0..28.0).contains(&temperature) {
        10.0 + (temperature - 25.0) * 3.0
    } else if temperature > 35.0 && temperature <= 40.0 {
        15.0 - (temperature - 35.0)
    } else if temperature > 40.0 {
        5.0
    } else {
        (temperature - 18.0).max(0.0) * 0.5
    }
}

/// Week-over-week case growth term (%).
#[must_use]
pub fn case_growth_term(case_growth: f64) -> f64 {
    if case_growth > 50.0 {
        30.0
    } else if case_growth > 30.0 {
        20.0 + (case_growth - 30.0) * 0.5
    } else if case_growth > 10.0 {
        10.0 + (case_growth - 10.0) * 0.5
    } else if case_growth > 0.0 {
        case_growth
    } else {
        // Declining cases still carry some residual risk.
        (5.0 + case_growth * 0.2).max(0.0)
    }
}

/// Baseline case count term.
#[must_use]
pub fn baseline_term(baseline: f64) -> f64 {
    if baseline > 80.0 {
        15.0
    } else if baseline > 60.0 {
        10.0 + (baseline - 60.0) * 0.25
    } else if baseline > 40.0 {
        5.0 + (baseline - 40.0) * 0.25
    } else {
        baseline * 0.125
    }
}

/// Population density term: `min(10, population / 10)`.
#[must_use]
pub fn density_term(profile: &DistrictProfile) -> f64 {
    (profile.population / 10.0).min(10.0)
}

/// Unrounded, unclamped sum of all six terms.
#[must_use]
pub fn raw_points(input: &PredictionInput, profile: &DistrictProfile) -> f64 {
    district_term(profile)
        + rainfall_term(input.rainfall_dev)
        + temperature_term(input.temperature)
        + case_growth_term(input.case_growth)
        + baseline_term(input.baseline)
        + density_term(profile)
}

/// Scores `input` against `profile`, returning an integer in `[0, 100]`.
///
/// Non-finite inputs score 0 rather than panicking.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score(input: &PredictionInput, profile: &DistrictProfile) -> u8 {
    let points = raw_points(input, profile);
    if points.is_nan() {
        return 0;
    }
    points.clamp(0.0, 100.0).round() as u8
}

/// Maps a score to its [`RiskCategory`].
#[must_use]
pub const fn classify(score: u8) -> RiskCategory {
    RiskCategory::from_score(score)
}
