//! Types making up a [`PredictionResult`].

use chrono::{DateTime, Utc};
use outbreak_risk_district_models::PopulationDensity;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::RiskCategory;

/// Whether inputs look like the conditions the heuristics were tuned on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DriftStatus {
    /// Every input is inside its typical range.
    Stable,
    /// At least one input is outside its typical range.
    Warning,
}

/// Input features that receive an attribution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum Feature {
    /// Week-over-week case growth.
    #[serde(rename = "Case Growth Rate")]
    #[strum(serialize = "Case Growth Rate")]
    CaseGrowth,
    /// Rainfall deviation from normal.
    #[serde(rename = "Rainfall Deviation")]
    #[strum(serialize = "Rainfall Deviation")]
    RainfallDeviation,
    /// Mean temperature.
    #[serde(rename = "Temperature")]
    #[strum(serialize = "Temperature")]
    Temperature,
    /// Current baseline case count.
    #[serde(rename = "Baseline Cases")]
    #[strum(serialize = "Baseline Cases")]
    BaselineCases,
}

/// Direction a feature pushes the score. Attributions are never negative,
/// so there is no `decreases`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// The input sits in the elevated region of its scoring term.
    Increases,
    /// The input sits in a normal region.
    Neutral,
}

/// Attribution of part of the score to one input feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    /// Which input this is.
    pub feature: Feature,
    /// The raw input value.
    #[serde(with = "crate::wire::js_number")]
    pub value: f64,
    /// Points contributed, rounded and floored at zero.
    pub contribution: u32,
    /// Whether the input is elevated.
    pub direction: Direction,
}

/// Surveillance intensity recommended for a category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SurveillanceLevel {
    /// Weekly routine reporting.
    Routine,
    /// Daily reporting with extra field teams.
    Enhanced,
    /// Continuous, all-hands surveillance.
    Intensive,
}

/// Vector control posture recommended for a category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VectorControl {
    /// Scheduled maintenance.
    Standard,
    /// Targeted fogging and source reduction.
    Active,
    /// Emergency district-wide operations.
    Emergency,
}

/// Public messaging tone recommended for a category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PublicMessaging {
    /// General awareness campaigns.
    Awareness,
    /// Health advisories.
    Advisory,
    /// Urgent public warnings.
    Urgent,
}

/// Resources to commit for a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePlan {
    /// Field teams to deploy.
    pub field_teams: u8,
    /// Surveillance intensity.
    pub surveillance_level: SurveillanceLevel,
    /// Vector control posture.
    pub vector_control: VectorControl,
    /// Public messaging tone.
    pub public_messaging: PublicMessaging,
    /// Hospital beds available in the district.
    pub hospital_beds: u32,
    /// Hospitals in the district.
    pub hospitals: u32,
}

/// Urgency of a response protocol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum ResponseLevel {
    /// Business as usual.
    Routine,
    /// Heightened readiness.
    Enhanced,
    /// Emergency operations.
    Emergency,
}

/// Canned response protocol for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseProtocol {
    /// Urgency level.
    pub level: ResponseLevel,
    /// Ordered actions to take.
    pub actions: Vec<String>,
    /// Activation timeline.
    pub timeline: String,
    /// Authority to escalate to.
    pub escalation: String,
}

/// Projected risk level of a single forecast week.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ForecastRiskLevel {
    /// At most 1.3x baseline.
    Low,
    /// Above 1.3x baseline.
    Medium,
    /// Above 2x baseline.
    High,
}

/// One week of the case-count projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Weeks from now (0 is the current week).
    pub week: u8,
    /// Projected cases, rounded.
    pub cases: i64,
    /// Projected risk relative to the baseline.
    pub risk_level: ForecastRiskLevel,
    /// Whether projected cases exceed 1.5x baseline.
    pub intervention_recommended: bool,
}

/// Severity of a reasoning entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum Impact {
    /// Active transmission.
    Critical,
    /// Strong driver.
    High,
    /// Moderate driver.
    Medium,
}

/// Human-readable explanation of one driver of the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningEntry {
    /// Short factor label (e.g. "Heavy Rainfall").
    pub factor: String,
    /// How strongly the factor drives risk.
    pub impact: Impact,
    /// Sentence describing the factor.
    pub description: String,
}

/// Display summary of the district profile used for a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictSummary {
    /// District name as requested by the caller.
    pub name: String,
    /// Population label, e.g. `"9.4M"`.
    pub population: String,
    /// Density tag.
    pub density: PopulationDensity,
    /// Climate descriptor.
    pub climate: String,
    /// Infrastructure descriptor.
    pub infrastructure: String,
    /// Recently reported cases.
    pub recent_cases: u32,
    /// Trend label.
    pub trend: String,
}

/// District context and category-level outlook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    /// Profile summary.
    pub district_profile: DistrictSummary,
    /// Transmission hotspots.
    pub hotspots: Vec<String>,
    /// Local risk factors.
    pub risk_factors: Vec<String>,
    /// Expected case change over the next 7 days.
    pub prediction_7day: String,
    /// Expected case change over the next 14 days.
    pub prediction_14day: String,
    /// When the peak is expected.
    pub peak_expected: String,
    /// How urgently intervention matters.
    pub intervention_impact: String,
}

/// Complete output of one prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// District name as requested by the caller.
    pub district: String,
    /// Score before calibration.
    pub raw_score: u8,
    /// Final 0-100 score.
    pub calibrated_score: u8,
    /// Category of the calibrated score.
    pub category: RiskCategory,
    /// Confidence percentage (60-95).
    pub confidence: u8,
    /// Variance band (2.0-8.0).
    pub uncertainty: f64,
    /// Drift status of the inputs.
    pub drift_status: DriftStatus,
    /// Drift warnings in check order.
    pub drift_warnings: Vec<String>,
    /// Feature attributions, largest first.
    pub top_contributors: Vec<FeatureContribution>,
    /// Resources to commit.
    pub recommended_resources: ResourcePlan,
    /// Response protocol.
    pub response: ResponseProtocol,
    /// District context and outlook.
    pub insights: Insights,
    /// Nine-week case projection.
    pub forecast: Vec<ForecastPoint>,
    /// Ordered explanations.
    pub reasoning: Vec<ReasoningEntry>,
    /// When the prediction was made.
    #[serde(with = "crate::wire::millis_timestamp")]
    pub timestamp: DateTime<Utc>,
}
