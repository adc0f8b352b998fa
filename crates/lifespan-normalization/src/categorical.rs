//! Lenient resolution of categorical keys.
//!
//! Unknown country or gender values are not errors: they resolve to
//! `global` and `unspecified` respectively.

use lifespan_model::{Country, Gender};
use tracing::debug;

/// Resolve a free-text country key. Missing, blank or unknown keys map to
/// [`Country::Global`].
pub fn normalize_country(raw: Option<&str>) -> Country {
    let Some(raw) = raw else {
        return Country::Global;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Country::Global;
    }
    trimmed.parse().unwrap_or_else(|_| {
        debug!(country = %trimmed, "unknown country, using global baseline");
        Country::Global
    })
}

/// Resolve a free-text gender. Missing or unknown values map to
/// [`Gender::Unspecified`].
pub fn normalize_gender(raw: Option<&str>) -> Gender {
    let Some(raw) = raw else {
        return Gender::Unspecified;
    };
    raw.parse().unwrap_or_else(|_| {
        debug!(gender = %raw.trim(), "unknown gender, treating as unspecified");
        Gender::Unspecified
    })
}
