#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API response types for the outbreak risk server.
//!
//! Prediction requests and results use the engine's own types from
//! `outbreak_risk_models`; the types here cover the endpoints that only
//! exist at the HTTP boundary.

use chrono::{DateTime, Utc};
use outbreak_risk_models::{PredictionResult, RiskCategory};
use serde::{Deserialize, Serialize};

/// Model version reported by the health endpoint.
pub const MODEL_VERSION: &str = "v2.1.4";

/// Service health as returned by `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHealth {
    /// Always `"operational"` while the server is answering.
    pub status: String,
    /// Number of districts with a reference profile.
    pub active_districts: usize,
    /// Version of the scoring heuristics.
    pub model_version: String,
    /// When this health report was generated.
    #[serde(with = "outbreak_risk_models::wire::millis_timestamp")]
    pub last_sync: DateTime<Utc>,
}

/// A served prediction as recorded in the alert history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiAlert {
    /// Sequential alert ID, starting at 1.
    pub id: u64,
    /// District name as requested.
    pub district: String,
    /// Calibrated risk score.
    pub score: u8,
    /// Risk category.
    pub category: RiskCategory,
    /// Confidence percentage.
    pub confidence: u8,
    /// When the prediction was made.
    #[serde(with = "outbreak_risk_models::wire::millis_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl ApiAlert {
    /// Builds the alert record for a served prediction.
    #[must_use]
    pub fn from_result(id: u64, result: &PredictionResult) -> Self {
        Self {
            id,
            district: result.district.clone(),
            score: result.calibrated_score,
            category: result.category,
            confidence: result.confidence,
            timestamp: result.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    #[test]
    fn alert_serializes_with_snake_case_keys() {
        let alert = ApiAlert {
            id: 7,
            district: "Nashik".to_string(),
            score: 58,
            category: RiskCategory::Medium,
            confidence: 88,
            timestamp: Utc.with_ymd_and_hms(2024, 8, 1, 6, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["category"], "MEDIUM");
        assert_eq!(json["timestamp"], "2024-08-01T06:00:00.000Z");
    }

    #[test]
    fn health_serializes_with_snake_case_keys() {
        let health = ApiHealth {
            status: "operational".to_string(),
            active_districts: 8,
            model_version: MODEL_VERSION.to_string(),
            last_sync: Utc.with_ymd_and_hms(2024, 8, 1, 6, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["active_districts"], 8);
        assert_eq!(json["model_version"], "v2.1.4");
        assert_eq!(json["last_sync"], "2024-08-01T06:00:00.000Z");
    }
}
