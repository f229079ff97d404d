#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Prediction input, result and risk category types.
//!
//! These types form the JSON contract between the outbreak dashboard and
//! the risk engine. Field names are `snake_case` on the wire because the
//! dashboard reads them that way (`calibrated_score`, `drift_status`, ...);
//! the forecast points are the one camelCase exception.

pub mod result;
pub mod wire;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

pub use result::{
    Direction, DistrictSummary, DriftStatus, Feature, FeatureContribution, ForecastPoint,
    ForecastRiskLevel, Impact, Insights, PredictionResult, PublicMessaging, ReasoningEntry,
    ResourcePlan, ResponseLevel, ResponseProtocol, SurveillanceLevel, VectorControl,
};

/// Lowest score classified as [`RiskCategory::Medium`].
pub const MEDIUM_RISK_THRESHOLD: u8 = 36;

/// Lowest score classified as [`RiskCategory::High`].
pub const HIGH_RISK_THRESHOLD: u8 = 66;

/// Discrete outbreak risk category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    /// Score below 36: routine surveillance.
    Low,
    /// Score 36-65: enhanced monitoring.
    Medium,
    /// Score 66 and above: emergency response.
    High,
}

impl RiskCategory {
    /// Classifies a 0-100 risk score.
    ///
    /// Memoryless: the same score always maps to the same category.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Returns all variants in ascending order of severity.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }
}

/// Caller-supplied conditions for a single district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// District name. Unknown names are scored with the default profile.
    pub district: String,
    /// Rainfall deviation from normal, in millimeters.
    pub rainfall_dev: f64,
    /// Mean temperature in degrees Celsius.
    pub temperature: f64,
    /// Week-over-week case growth, in percent.
    pub case_growth: f64,
    /// Current baseline case count.
    pub baseline: f64,
}

impl PredictionInput {
    /// Checks that every numeric field is usable by the engine.
    ///
    /// The engine itself accepts anything; this is the boundary check that
    /// keeps `NaN` and infinities from flowing silently through the
    /// arithmetic. The district is not checked here: any name, including an
    /// empty one, is scored with the default profile unless the caller also
    /// requires a known district.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if a field is not finite or the
    /// baseline is negative.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        for (field, value) in [
            ("rainfall_dev", self.rainfall_dev),
            ("temperature", self.temperature),
            ("case_growth", self.case_growth),
            ("baseline", self.baseline),
        ] {
            if !value.is_finite() {
                return Err(InvalidInputError::NonFinite { field });
            }
        }

        if self.baseline < 0.0 {
            return Err(InvalidInputError::NegativeBaseline {
                value: self.baseline,
            });
        }

        Ok(())
    }
}

/// Reasons a [`PredictionInput`] is rejected at the API boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// A numeric field is `NaN` or infinite.
    #[error("Field '{field}' must be a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The baseline case count is below zero.
    #[error("Baseline cases must be non-negative, got {value}")]
    NegativeBaseline {
        /// The rejected value.
        value: f64,
    },

    /// The district is not in the reference table and strict validation
    /// is enabled.
    #[error("Unknown district '{district}'. Valid: {}", valid.join(", "))]
    UnknownDistrict {
        /// The rejected district name.
        district: String,
        /// Known district names.
        valid: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> PredictionInput {
        PredictionInput {
            district: "Pune".to_string(),
            rainfall_dev: 5.0,
            temperature: 26.0,
            case_growth: 3.0,
            baseline: 25.0,
        }
    }

    #[test]
    fn category_boundaries() {
        assert_eq!(RiskCategory::from_score(0), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(35), RiskCategory::Low);
        assert_eq!(RiskCategory::from_score(36), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(65), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_score(66), RiskCategory::High);
        assert_eq!(RiskCategory::from_score(100), RiskCategory::High);
    }

    #[test]
    fn category_bands_do_not_overlap() {
        let mut previous = RiskCategory::Low;
        for score in 0..=100u8 {
            let category = RiskCategory::from_score(score);
            assert!(
                category >= previous,
                "score {score} classified {category} after {previous}"
            );
            previous = category;
        }
    }

    #[test]
    fn category_wire_format() {
        assert_eq!(RiskCategory::Medium.to_string(), "MEDIUM");
        assert_eq!("HIGH".parse::<RiskCategory>().unwrap(), RiskCategory::High);
        assert_eq!(
            serde_json::to_string(&RiskCategory::Low).unwrap(),
            "\"LOW\""
        );
    }

    #[test]
    fn validate_accepts_out_of_range_but_finite_values() {
        let extreme = PredictionInput {
            rainfall_dev: -400.0,
            temperature: 60.0,
            case_growth: 900.0,
            baseline: 10_000.0,
            ..input()
        };
        assert!(extreme.validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_finite_fields() {
        let bad = PredictionInput {
            temperature: f64::NAN,
            ..input()
        };
        assert_eq!(
            bad.validate(),
            Err(InvalidInputError::NonFinite {
                field: "temperature"
            })
        );

        let bad = PredictionInput {
            case_growth: f64::INFINITY,
            ..input()
        };
        assert!(matches!(
            bad.validate(),
            Err(InvalidInputError::NonFinite {
                field: "case_growth"
            })
        ));
    }

    #[test]
    fn validate_rejects_negative_baseline() {
        let bad = PredictionInput {
            baseline: -1.0,
            ..input()
        };
        assert!(matches!(
            bad.validate(),
            Err(InvalidInputError::NegativeBaseline { .. })
        ));

    }

    #[test]
    fn validate_accepts_blank_district_names() {
        for district in ["", "  "] {
            let blank = PredictionInput {
                district: district.to_string(),
                ..input()
            };
            assert_eq!(blank.validate(), Ok(()), "district {district:?}");
        }
    }

    #[test]
    fn unknown_district_message_lists_valid_names() {
        let err = InvalidInputError::UnknownDistrict {
            district: "Atlantis".to_string(),
            valid: vec!["Pune".to_string(), "Thane".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown district 'Atlantis'. Valid: Pune, Thane"
        );
    }
}
