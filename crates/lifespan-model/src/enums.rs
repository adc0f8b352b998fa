//! Type-safe enumerations for categorical request fields.
//!
//! Requests carry gender and country as free text. These enums are the
//! closed set of values the estimator understands; parsing is strict here
//! and the lenient fallback lives in the normalizer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Self-reported gender used to select a baseline column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    /// Missing, declined, or anything not recognised.
    #[default]
    Unspecified,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unspecified];

    /// Returns the canonical lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Case-insensitive match against the canonical keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "unspecified" => Ok(Gender::Unspecified),
            _ => Err(format!("Unknown gender: {s}")),
        }
    }
}

/// Country key of the baseline table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    /// World average, also the fallback for unknown keys.
    #[default]
    Global,
    Usa,
    Uk,
    India,
    Japan,
    Nigeria,
}

impl Country {
    pub const ALL: [Country; 6] = [
        Country::Global,
        Country::Usa,
        Country::Uk,
        Country::India,
        Country::Japan,
        Country::Nigeria,
    ];

    /// Returns the canonical lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Global => "global",
            Country::Usa => "usa",
            Country::Uk => "uk",
            Country::India => "india",
            Country::Japan => "japan",
            Country::Nigeria => "nigeria",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Country {
    type Err = String;

    /// Parse a country key. Input is trimmed and lowercased first; only
    /// exact keys are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Country::ALL
            .into_iter()
            .find(|country| country.as_str() == key)
            .ok_or_else(|| format!("Unknown country: {s}"))
    }
}

/// Name of a lifestyle or demographic adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Smoking,
    NonSmokerBonus,
    Exercise,
    Stress,
    Bmi,
    GenderUnspecified,
}

impl Factor {
    /// Returns the key used in the factor breakdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            Factor::Smoking => "smoking",
            Factor::NonSmokerBonus => "non_smoker_bonus",
            Factor::Exercise => "exercise",
            Factor::Stress => "stress",
            Factor::Bmi => "bmi",
            Factor::GenderUnspecified => "gender_unspecified",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
