#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal formatting and interactive mode for the `outbreak_risk` CLI.

pub mod interactive;

use std::fmt::Write as _;

use outbreak_risk_district_models::DistrictProfile;
use outbreak_risk_models::PredictionResult;

/// Formats a prediction as a human-readable report.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn format_report(result: &PredictionResult) -> String {
    let mut output = String::new();

    writeln!(output, "District:   {}", result.district).unwrap();
    writeln!(
        output,
        "Risk score: {}/100 ({})",
        result.calibrated_score, result.category
    )
    .unwrap();
    writeln!(
        output,
        "Confidence: {}% (uncertainty ±{:.1})",
        result.confidence, result.uncertainty
    )
    .unwrap();
    writeln!(output, "Drift:      {}", result.drift_status).unwrap();
    for warning in &result.drift_warnings {
        writeln!(output, "  ! {warning}").unwrap();
    }
    writeln!(output).unwrap();

    writeln!(output, "Top contributors:").unwrap();
    for c in &result.top_contributors {
        writeln!(
            output,
            "  {:<20} {:>8} {:>4} pts  {}",
            c.feature.to_string(),
            c.value,
            c.contribution,
            c.direction
        )
        .unwrap();
    }
    writeln!(output).unwrap();

    let response = &result.response;
    writeln!(
        output,
        "Response:   {} ({}, escalate to {})",
        response.level, response.timeline, response.escalation
    )
    .unwrap();
    for action in &response.actions {
        writeln!(output, "  - {action}").unwrap();
    }

    let resources = &result.recommended_resources;
    writeln!(
        output,
        "Resources:  {} field teams, {} surveillance, {} vector control, {} messaging",
        resources.field_teams,
        resources.surveillance_level,
        resources.vector_control,
        resources.public_messaging
    )
    .unwrap();
    writeln!(
        output,
        "            {} hospitals, {} beds",
        resources.hospitals, resources.hospital_beds
    )
    .unwrap();
    writeln!(output).unwrap();

    let insights = &result.insights;
    writeln!(
        output,
        "Outlook:    7 days {}, 14 days {}, peak {}",
        insights.prediction_7day, insights.prediction_14day, insights.peak_expected
    )
    .unwrap();
    writeln!(output, "            {}", insights.intervention_impact).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "{:<6} {:>7}  {:<8} INTERVENE", "WEEK", "CASES", "RISK").unwrap();
    for point in &result.forecast {
        writeln!(
            output,
            "{:<6} {:>7}  {:<8} {}",
            point.week,
            point.cases,
            point.risk_level.to_string(),
            if point.intervention_recommended {
                "yes"
            } else {
                ""
            }
        )
        .unwrap();
    }

    if !result.reasoning.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "Reasoning:").unwrap();
        for entry in &result.reasoning {
            writeln!(
                output,
                "  [{}] {}: {}",
                entry.impact, entry.factor, entry.description
            )
            .unwrap();
        }
    }

    output
}

/// Formats the district table printed by `outbreak_risk districts`.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn format_districts(profiles: &[DistrictProfile]) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "{:<12} {:>13} {:>10}  DENSITY",
        "DISTRICT", "BASELINE RISK", "POPULATION"
    )
    .unwrap();
    writeln!(output, "{}", "-".repeat(48)).unwrap();

    for profile in profiles {
        writeln!(
            output,
            "{:<12} {:>13.2} {:>10}  {}",
            profile.name,
            profile.baseline_risk,
            profile.population_label(),
            profile.density
        )
        .unwrap();
    }

    writeln!(output, "\n{} district(s)", profiles.len()).unwrap();

    output
}
