//! Confidence and uncertainty estimates.
//!
//! Both estimates reward inputs that look like typical conditions and
//! penalize extremes. Every condition is checked independently, so a single
//! input can earn a penalty and a bonus on the same call.

// `NaN` must fail every check, which `!range.contains()` would not.
#![allow(clippy::manual_range_contains)]

use outbreak_risk_models::PredictionInput;

const BASE_CONFIDENCE: i32 = 85;
const MIN_CONFIDENCE: i32 = 60;
const MAX_CONFIDENCE: i32 = 95;

const BASE_VARIANCE: f64 = 3.5;
const MIN_VARIANCE: f64 = 2.0;
const MAX_VARIANCE: f64 = 8.0;

/// Whether the rainfall deviation is outside `[-50, 60]`.
#[must_use]
pub fn rainfall_atypical(rainfall_dev: f64) -> bool {
    rainfall_dev < -50.0 || rainfall_dev > 60.0
}

/// Whether the temperature is outside `[20, 40]`.
#[must_use]
pub fn temperature_atypical(temperature: f64) -> bool {
    temperature < 20.0 || temperature > 40.0
}

/// Whether case growth is above 60%.
#[must_use]
pub fn case_growth_atypical(case_growth: f64) -> bool {
    case_growth > 60.0
}

/// Whether the baseline is above 100 cases.
#[must_use]
pub fn baseline_atypical(baseline: f64) -> bool {
    baseline > 100.0
}

/// Confidence percentage in `[60, 95]`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn confidence(input: &PredictionInput) -> u8 {
    let mut confidence = BASE_CONFIDENCE;

    if rainfall_atypical(input.rainfall_dev) {
        confidence -= 10;
    }
    if temperature_atypical(input.temperature) {
        confidence -= 8;
    }
    if case_growth_atypical(input.case_growth) {
        confidence -= 5;
    }
    if baseline_atypical(input.baseline) {
        confidence -= 5;
    }

    if (-20.0..=40.0).contains(&input.rainfall_dev) {
        confidence += 5;
    }
    if (24.0..=36.0).contains(&input.temperature) {
        confidence += 5;
    }
    if (0.0..=40.0).contains(&input.case_growth) {
        confidence += 3;
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}

/// Variance band in `[2.0, 8.0]`, rounded to one decimal.
///
/// Extreme conditions and high scores widen the band; calm conditions and
/// low scores narrow it.
#[must_use]
pub fn uncertainty(input: &PredictionInput, score: u8) -> f64 {
    let mut variance = BASE_VARIANCE;

    if input.rainfall_dev.abs() > 40.0 {
        variance += 2.0;
    }
    if input.temperature < 22.0 || input.temperature > 38.0 {
        variance += 1.5;
    }
    if input.case_growth > 50.0 {
        variance += 2.0;
    }

    if input.case_growth < 15.0 && input.rainfall_dev.abs() < 20.0 {
        variance -= 1.0;
    }

    if score > 70 {
        variance += 1.5;
    } else if score < 30 {
        variance -= 0.5;
    }

    ((variance * 10.0).round() / 10.0).clamp(MIN_VARIANCE, MAX_VARIANCE)
}
