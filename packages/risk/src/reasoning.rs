//! Human-readable explanations of what drives a prediction.

use outbreak_risk_district_models::{DistrictProfile, PopulationDensity};
use outbreak_risk_models::{HIGH_RISK_THRESHOLD, Impact, PredictionInput, ReasoningEntry};

fn entry(factor: &str, impact: Impact, description: String) -> ReasoningEntry {
    ReasoningEntry {
        factor: factor.to_string(),
        impact,
        description,
    }
}

/// Builds the ordered explanation list for a prediction.
///
/// Entries cover, in order: rainfall, temperature, case growth, up to two
/// local risk factors from the profile and population density. Inputs in
/// unremarkable ranges produce no entry.
#[must_use]
pub fn reasoning(
    input: &PredictionInput,
    score: u8,
    profile: &DistrictProfile,
) -> Vec<ReasoningEntry> {
    let mut entries = vec![];

    if input.rainfall_dev > 30.0 {
        let hotspot = profile
            .hotspots
            .first()
            .map_or(input.district.as_str(), String::as_str);
        entries.push(entry(
            "Heavy Rainfall",
            Impact::High,
            format!(
                "Rainfall {}mm above normal creating extensive breeding sites in {hotspot} and surrounding areas",
                input.rainfall_dev
            ),
        ));
    } else if input.rainfall_dev > 10.0 {
        entries.push(entry(
            "Moderate Rainfall",
            Impact::Medium,
            format!(
                "Rainfall {}mm above normal increasing vector breeding potential",
                input.rainfall_dev
            ),
        ));
    }

    if (28.0..=35.0).contains(&input.temperature) {
        entries.push(entry(
            "Optimal Temperature",
            Impact::High,
            format!(
                "Temperature {}°C is optimal for mosquito breeding and disease transmission",
                input.temperature
            ),
        ));
    } else if input.temperature > 35.0 {
        entries.push(entry(
            "High Temperature",
            Impact::Medium,
            format!(
                "Temperature {}°C may reduce vector activity but increases human vulnerability",
                input.temperature
            ),
        ));
    }

    if input.case_growth > 20.0 {
        let hotspots = profile
            .hotspots
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        entries.push(entry(
            "Rapid Case Growth",
            Impact::Critical,
            format!(
                "{}% growth rate indicates active community transmission in {hotspots}",
                input.case_growth
            ),
        ));
    } else if input.case_growth > 10.0 {
        entries.push(entry(
            "Moderate Case Growth",
            Impact::Medium,
            format!(
                "{}% growth rate suggests sustained transmission requiring monitoring",
                input.case_growth
            ),
        ));
    }

    let local_impact = if score >= HIGH_RISK_THRESHOLD {
        Impact::High
    } else {
        Impact::Medium
    };
    for factor in profile.risk_factors.iter().take(2) {
        entries.push(entry("Local Risk Factor", local_impact, factor.clone()));
    }

    match profile.density {
        PopulationDensity::VeryHigh => entries.push(entry(
            "Population Density",
            Impact::High,
            format!(
                "Very high population density ({}) enabling rapid person-to-person transmission",
                profile.population_label()
            ),
        )),
        PopulationDensity::High => entries.push(entry(
            "Population Density",
            Impact::Medium,
            format!(
                "High population density facilitating disease spread across {}",
                input.district
            ),
        )),
        PopulationDensity::Medium | PopulationDensity::Low => {}
    }

    entries
}
