#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District reference data for the outbreak risk engine.
//!
//! Profiles are embedded at compile time (see [`registry`]) and parsed once,
//! on first access, into an immutable table shared by every caller. Lookups
//! never fail: [`resolve`] substitutes the [`DEFAULT_DISTRICT`] profile for
//! any name that is not in the table.

pub mod registry;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use outbreak_risk_district_models::DistrictProfile;

/// District whose profile stands in for unrecognized district names.
pub const DEFAULT_DISTRICT: &str = "Pune";

struct DistrictTable {
    profiles: Vec<DistrictProfile>,
    by_name: BTreeMap<String, usize>,
    default_idx: usize,
}

static TABLE: LazyLock<DistrictTable> = LazyLock::new(|| {
    let profiles = registry::load_profiles();
    let by_name: BTreeMap<String, usize> = profiles
        .iter()
        .enumerate()
        .map(|(idx, profile)| (profile.name.clone(), idx))
        .collect();
    let default_idx = by_name
        .get(DEFAULT_DISTRICT)
        .copied()
        .unwrap_or_else(|| panic!("Default district '{DEFAULT_DISTRICT}' is not registered"));

    log::debug!("Loaded {} district profiles", profiles.len());

    DistrictTable {
        profiles,
        by_name,
        default_idx,
    }
});

/// Returns every known district profile in display order.
#[must_use]
pub fn all() -> &'static [DistrictProfile] {
    &TABLE.profiles
}

/// Returns the names of every known district in display order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    TABLE.profiles.iter().map(|p| p.name.as_str()).collect()
}

/// Number of known districts.
#[must_use]
pub fn count() -> usize {
    TABLE.profiles.len()
}

/// Looks up a district by its exact name.
#[must_use]
pub fn find(name: &str) -> Option<&'static DistrictProfile> {
    TABLE.by_name.get(name).map(|&idx| &TABLE.profiles[idx])
}

/// Whether `name` is a known district.
#[must_use]
pub fn is_known(name: &str) -> bool {
    TABLE.by_name.contains_key(name)
}

/// Returns the fallback profile used for unknown districts.
#[must_use]
pub fn default_profile() -> &'static DistrictProfile {
    &TABLE.profiles[TABLE.default_idx]
}

/// Looks up a district, falling back to [`default_profile`] when the name
/// is not recognized.
#[must_use]
pub fn resolve(name: &str) -> &'static DistrictProfile {
    find(name).unwrap_or_else(|| {
        log::debug!("Unknown district '{name}', using {DEFAULT_DISTRICT} profile");
        default_profile()
    })
}
