//! District context and category-level outlook.

use outbreak_risk_district_models::DistrictProfile;
use outbreak_risk_models::{DistrictSummary, Insights, RiskCategory};

struct Outlook {
    prediction_7day: &'static str,
    prediction_14day: &'static str,
    peak_expected: &'static str,
    intervention_impact: &'static str,
}

const fn outlook(category: RiskCategory) -> Outlook {
    match category {
        RiskCategory::Low => Outlook {
            prediction_7day: "+2-5%",
            prediction_14day: "+5-10%",
            peak_expected: "Week 8-10",
            intervention_impact: "Low - Routine surveillance sufficient",
        },
        RiskCategory::Medium => Outlook {
            prediction_7day: "+8-15%",
            prediction_14day: "+15-25%",
            peak_expected: "Week 5-7",
            intervention_impact: "Moderate - Enhanced monitoring needed",
        },
        RiskCategory::High => Outlook {
            prediction_7day: "+18-25%",
            prediction_14day: "+35-45%",
            peak_expected: "Week 3-4",
            intervention_impact: "Critical - Immediate action required",
        },
    }
}

/// Builds the insights block for a prediction.
///
/// `district` is the name the caller asked for, which differs from
/// `profile.name` when an unknown district fell back to the default.
#[must_use]
pub fn insights(district: &str, category: RiskCategory, profile: &DistrictProfile) -> Insights {
    let outlook = outlook(category);

    Insights {
        district_profile: DistrictSummary {
            name: district.to_string(),
            population: profile.population_label(),
            density: profile.density,
            climate: profile.climate.clone(),
            infrastructure: profile.infrastructure.clone(),
            recent_cases: profile.recent_cases,
            trend: profile.trend.clone(),
        },
        hotspots: profile.hotspots.clone(),
        risk_factors: profile.risk_factors.clone(),
        prediction_7day: outlook.prediction_7day.to_string(),
        prediction_14day: outlook.prediction_14day.to_string(),
        peak_expected: outlook.peak_expected.to_string(),
        intervention_impact: outlook.intervention_impact.to_string(),
    }
}
