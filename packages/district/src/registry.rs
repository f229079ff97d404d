//! Compile-time registry of district reference profiles.
//!
//! Each entry is a `(name, toml_content)` pair embedded via `include_str!`.
//! Adding a district requires creating a TOML file in `profiles/` and
//! adding a corresponding entry here. Order is the display order.

use outbreak_risk_district_models::DistrictProfile;

/// Number of registered district profiles. Enforced by a test.
#[cfg(test)]
const EXPECTED_PROFILE_COUNT: usize = 8;

/// Embedded TOML profile definitions.
const PROFILE_TOMLS: &[(&str, &str)] = &[
    ("pune", include_str!("../profiles/pune.toml")),
    ("mumbai", include_str!("../profiles/mumbai.toml")),
    ("nashik", include_str!("../profiles/nashik.toml")),
    ("nagpur", include_str!("../profiles/nagpur.toml")),
    ("aurangabad", include_str!("../profiles/aurangabad.toml")),
    ("thane", include_str!("../profiles/thane.toml")),
    ("solapur", include_str!("../profiles/solapur.toml")),
    ("kolhapur", include_str!("../profiles/kolhapur.toml")),
];

/// Parses every embedded district profile, in registry order.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse. Since these are
/// compile-time constants, parse failures indicate a development error
/// and are caught by the tests below.
#[must_use]
pub fn load_profiles() -> Vec<DistrictProfile> {
    PROFILE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse district profile '{name}': {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn loads_all_profiles() {
        let profiles = load_profiles();
        assert_eq!(
            profiles.len(),
            EXPECTED_PROFILE_COUNT,
            "Expected {EXPECTED_PROFILE_COUNT} district profiles, found {}. \
             Update EXPECTED_PROFILE_COUNT after adding/removing districts.",
            profiles.len()
        );
    }

    #[test]
    fn profile_names_are_unique() {
        let mut seen = BTreeSet::new();
        for profile in &load_profiles() {
            assert!(
                seen.insert(profile.name.clone()),
                "Duplicate district profile: {}",
                profile.name
            );
        }
    }

    #[test]
    fn registry_key_matches_profile_name() {
        for ((key, _), profile) in PROFILE_TOMLS.iter().zip(load_profiles()) {
            assert_eq!(
                *key,
                profile.name.to_lowercase(),
                "Registry key {key} does not match profile name {}",
                profile.name
            );
        }
    }

    #[test]
    fn all_profiles_have_required_fields() {
        for profile in &load_profiles() {
            assert!(
                (0.0..=1.0).contains(&profile.baseline_risk),
                "{} has baseline_risk {} outside [0, 1]",
                profile.name,
                profile.baseline_risk
            );
            assert!(
                profile.population > 0.0,
                "{} has non-positive population",
                profile.name
            );
            assert!(
                !profile.hotspots.is_empty(),
                "{} has no hotspots",
                profile.name
            );
            assert!(
                profile.risk_factors.len() >= 2,
                "{} needs at least two risk factors",
                profile.name
            );
        }
    }
}
