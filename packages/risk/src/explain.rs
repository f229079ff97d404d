//! Per-feature attribution of the risk score.
//!
//! Attributions reuse the scorer's term functions, so the points reported
//! for a feature are exactly the points it added to the score. The district
//! base and density terms describe the location rather than the inputs and
//! are not attributed.

use outbreak_risk_models::{Direction, Feature, FeatureContribution, PredictionInput};

use crate::scoring::{baseline_term, case_growth_term, rainfall_term, temperature_term};

/// Rainfall deviation above which rainfall is considered elevated.
pub const ELEVATED_RAINFALL: f64 = 20.0;
/// Case growth above which growth is considered elevated.
pub const ELEVATED_CASE_GROWTH: f64 = 15.0;
/// Baseline above which the case load is considered elevated.
pub const ELEVATED_BASELINE: f64 = 60.0;

fn direction(elevated: bool) -> Direction {
    if elevated {
        Direction::Increases
    } else {
        Direction::Neutral
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn points(term: f64) -> u32 {
    term.max(0.0).round() as u32
}

/// Attributes the score to the four input features, largest first.
///
/// Ties keep the order case growth, rainfall, temperature, baseline.
#[must_use]
pub fn explain(input: &PredictionInput) -> Vec<FeatureContribution> {
    let mut contributions = vec![
        FeatureContribution {
            feature: Feature::CaseGrowth,
            value: input.case_growth,
            contribution: points(case_growth_term(input.case_growth)),
            direction: direction(input.case_growth > ELEVATED_CASE_GROWTH),
        },
        FeatureContribution {
            feature: Feature::RainfallDeviation,
            value: input.rainfall_dev,
            contribution: points(rainfall_term(input.rainfall_dev)),
            direction: direction(input.rainfall_dev > ELEVATED_RAINFALL),
        },
        FeatureContribution {
            feature: Feature::Temperature,
            value: input.temperature,
            contribution: points(temperature_term(input.temperature)),
            direction: direction((28.0..=35.0).contains(&input.temperature)),
        },
        FeatureContribution {
            feature: Feature::BaselineCases,
            value: input.baseline,
            contribution: points(baseline_term(input.baseline)),
            direction: direction(input.baseline > ELEVATED_BASELINE),
        },
    ];

    // `sort_by` is stable, which keeps the tie order above.
    contributions.sort_by(|a, b| b.contribution.cmp(&a.contribution));

    contributions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rainfall_dev: f64, temperature: f64, case_growth: f64, baseline: f64) -> PredictionInput {
        PredictionInput {
            district: "Nagpur".to_string(),
            rainfall_dev,
            temperature,
            case_growth,
            baseline,
        }
    }

    fn features(contributions: &[FeatureContribution]) -> Vec<Feature> {
        contributions.iter().map(|c| c.feature).collect()
    }

    #[test]
    fn severe_inputs_all_increase_risk() {
        let contributions = explain(&input(55.0, 35.0, 50.0, 95.0));

        assert_eq!(
            features(&contributions),
            vec![
                Feature::CaseGrowth,
                Feature::RainfallDeviation,
                Feature::Temperature,
                Feature::BaselineCases,
            ]
        );
        assert_eq!(
            contributions.iter().map(|c| c.contribution).collect::<Vec<_>>(),
            vec![30, 25, 20, 15]
        );
        assert!(
            contributions
                .iter()
                .all(|c| c.direction == Direction::Increases)
        );
    }

    #[test]
    fn mild_inputs_are_neutral_and_ties_keep_order() {
        let contributions = explain(&input(5.0, 26.0, 3.0, 25.0));

        // Temperature 13, rainfall 3.75 -> 4, growth 3, baseline 3.125 -> 3
        assert_eq!(
            features(&contributions),
            vec![
                Feature::Temperature,
                Feature::RainfallDeviation,
                Feature::CaseGrowth,
                Feature::BaselineCases,
            ]
        );
        assert_eq!(
            contributions.iter().map(|c| c.contribution).collect::<Vec<_>>(),
            vec![13, 4, 3, 3]
        );
        assert!(
            contributions
                .iter()
                .all(|c| c.direction == Direction::Neutral)
        );
    }

    #[test]
    fn contributions_are_sorted_descending() {
        for (r, t, g, b) in [
            (0.0, 0.0, 0.0, 0.0),
            (-45.0, 37.0, 12.0, 70.0),
            (25.0, 29.0, -20.0, 200.0),
        ] {
            let contributions = explain(&input(r, t, g, b));
            assert_eq!(contributions.len(), 4);
            assert!(
                contributions
                    .windows(2)
                    .all(|w| w[0].contribution >= w[1].contribution),
                "not sorted for ({r}, {t}, {g}, {b})"
            );
        }
    }

    #[test]
    fn extreme_inputs_never_attribute_negative_points() {
        // Severe drought still carries the 5-point stress term.
        let contributions = explain(&input(-1e9, -1e9, -1e9, -1e9));
        let total: u32 = contributions.iter().map(|c| c.contribution).sum();
        assert_eq!(total, 5);

        let contributions = explain(&input(f64::NAN, f64::NAN, f64::NAN, f64::NAN));
        assert!(contributions.iter().all(|c| c.contribution == 0));
    }

    #[test]
    fn direction_thresholds_are_strict() {
        let contributions = explain(&input(20.0, 27.9, 15.0, 60.0));
        assert!(
            contributions
                .iter()
                .all(|c| c.direction == Direction::Neutral)
        );

        let contributions = explain(&input(20.1, 28.0, 15.1, 60.1));
        assert!(
            contributions
                .iter()
                .all(|c| c.direction == Direction::Increases)
        );
    }
}
