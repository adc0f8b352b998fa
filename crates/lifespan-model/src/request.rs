//! Prediction request types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Country, Gender};

/// Raw request as supplied by a caller.
///
/// Everything except `birth_date` may be omitted or `null`. Integer fields
/// are signed so that negative input reaches validation and is reported as
/// out of range instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    /// ISO date string `YYYY-MM-DD`.
    pub birth_date: String,
    /// `male`, `female` or `unspecified`, any case.
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub is_smoker: Option<bool>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub weekly_exercise_mins: Option<i64>,
    /// 1 (calm) to 5 (severe).
    #[serde(default)]
    pub stress_level: Option<i64>,
    #[serde(default)]
    pub country: Option<String>,
}

impl PredictionRequest {
    /// Create a request with only the mandatory birth date set.
    pub fn new(birth_date: impl Into<String>) -> Self {
        Self {
            birth_date: birth_date.into(),
            ..Self::default()
        }
    }
}

/// Stress level in the closed range 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StressLevel(u8);

impl StressLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` if `level` is outside 1..=5.
    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for StressLevel {
    fn default() -> Self {
        Self(3)
    }
}

/// A validated request with every field defaulted and categorical values
/// resolved. The estimation engine is total over this type.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    pub full_name: Option<String>,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub is_smoker: bool,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    /// Body-mass index rounded to one decimal, when computable.
    pub bmi: Option<f64>,
    pub weekly_exercise_mins: u32,
    pub stress_level: StressLevel,
    pub country: Country,
}
