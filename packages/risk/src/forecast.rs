//! Nine-week case projection.

use outbreak_risk_models::{ForecastPoint, ForecastRiskLevel, RiskCategory};

/// Number of projected weeks, including the current one.
pub const FORECAST_WEEKS: u8 = 9;

/// Week-over-week case multiplier for a category.
#[must_use]
pub const fn weekly_multiplier(category: RiskCategory) -> f64 {
    match category {
        RiskCategory::High => 1.18,
        RiskCategory::Medium => 1.08,
        RiskCategory::Low => 1.03,
    }
}

/// Projects `baseline` cases forward by compounding the category's
/// weekly multiplier.
///
/// Each week's risk level and intervention flag compare the rounded case
/// count against multiples of the starting baseline.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn forecast(category: RiskCategory, baseline: f64) -> Vec<ForecastPoint> {
    let multiplier = weekly_multiplier(category);
    let mut current = baseline;

    (0..FORECAST_WEEKS)
        .map(|week| {
            let cases = current.round() as i64;
            let projected = cases as f64;

            let risk_level = if projected > baseline * 2.0 {
                ForecastRiskLevel::High
            } else if projected > baseline * 1.3 {
                ForecastRiskLevel::Medium
            } else {
                ForecastRiskLevel::Low
            };

            current *= multiplier;

            ForecastPoint {
                week,
                cases,
                risk_level,
                intervention_recommended: projected > baseline * 1.5,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_risk_projection_from_fifty_cases() {
        let points = forecast(RiskCategory::High, 50.0);

        assert_eq!(points.len(), 9);
        assert_eq!(
            points.iter().map(|p| p.cases).collect::<Vec<_>>(),
            vec![50, 59, 70, 82, 97, 114, 135, 159, 188]
        );
        assert_eq!(
            points.iter().map(|p| p.risk_level).collect::<Vec<_>>(),
            vec![
                ForecastRiskLevel::Low,
                ForecastRiskLevel::Low,
                ForecastRiskLevel::Medium,
                ForecastRiskLevel::Medium,
                ForecastRiskLevel::Medium,
                ForecastRiskLevel::High,
                ForecastRiskLevel::High,
                ForecastRiskLevel::High,
                ForecastRiskLevel::High,
            ]
        );

        let first_intervention = points
            .iter()
            .position(|p| p.intervention_recommended)
            .unwrap();
        assert_eq!(first_intervention, 3, "82 is the first week above 75");
        assert!(points[first_intervention..].iter().all(|p| p.intervention_recommended));
    }

    #[test]
    fn weeks_are_numbered_from_zero() {
        let points = forecast(RiskCategory::Low, 10.0);
        assert_eq!(
            points.iter().map(|p| p.week).collect::<Vec<_>>(),
            (0..9).collect::<Vec<u8>>()
        );
        assert_eq!(points[0].cases, 10);
    }

    #[test]
    fn low_risk_stays_low() {
        // 100 * 1.03^8 = 126.7, below the 1.3x threshold
        let points = forecast(RiskCategory::Low, 100.0);
        assert!(points.iter().all(|p| p.risk_level == ForecastRiskLevel::Low));
        assert!(points.iter().all(|p| !p.intervention_recommended));
        assert_eq!(points[8].cases, 127);
    }

    #[test]
    fn zero_baseline_never_escalates() {
        let points = forecast(RiskCategory::High, 0.0);
        assert!(points.iter().all(|p| p.cases == 0));
        assert!(points.iter().all(|p| p.risk_level == ForecastRiskLevel::Low));
    }
}
