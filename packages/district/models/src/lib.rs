#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District reference profile types.
//!
//! A [`DistrictProfile`] is the static, read-only record the risk engine
//! uses to weight a score (baseline risk, population) and to enrich the
//! result (hospitals, hotspots, local risk factors). Profiles are defined
//! in TOML and deserialized into these types.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Qualitative population density tag for a district.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PopulationDensity {
    /// Sparse, largely rural settlement.
    Low,
    /// Mixed urban and peri-urban settlement.
    Medium,
    /// Dense urban settlement.
    High,
    /// Metropolitan density with large informal settlements.
    VeryHigh,
}

/// Static reference record for a single district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictProfile {
    /// District name as callers spell it (e.g. `"Pune"`).
    pub name: String,
    /// Prior risk weight in `[0, 1]`.
    pub baseline_risk: f64,
    /// Population in millions.
    pub population: f64,
    /// Number of hospitals.
    pub hospitals: u32,
    /// Number of hospital beds.
    pub beds: u32,
    /// Population density tag.
    pub density: PopulationDensity,
    /// Climate descriptor (e.g. `"humid_coastal"`).
    pub climate: String,
    /// Health infrastructure descriptor (e.g. `"good"`).
    pub infrastructure: String,
    /// Cases reported in the most recent reporting window.
    pub recent_cases: u32,
    /// Display-only trend label (e.g. `"+12%"`).
    pub trend: String,
    /// Transmission hotspots, most significant first.
    pub hotspots: Vec<String>,
    /// Local causal explanations, most significant first.
    pub risk_factors: Vec<String>,
}

impl DistrictProfile {
    /// Population formatted for display, e.g. `"9.4M"`.
    #[must_use]
    pub fn population_label(&self) -> String {
        format!("{}M", self.population)
    }
}
