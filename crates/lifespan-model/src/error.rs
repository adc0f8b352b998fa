//! Validation error types.
//!
//! Every rejection names the offending field so callers can point the user
//! at the input that needs fixing.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Request field subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BirthDate,
    HeightCm,
    WeightKg,
    WeeklyExerciseMins,
    StressLevel,
}

impl Field {
    /// Returns the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::BirthDate => "birth_date",
            Field::HeightCm => "height_cm",
            Field::WeightKg => "weight_kg",
            Field::WeeklyExerciseMins => "weekly_exercise_mins",
            Field::StressLevel => "stress_level",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request that cannot be estimated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// `birth_date` is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid birth_date format '{value}'. Use YYYY-MM-DD")]
    InvalidBirthDate { value: String },

    /// `birth_date` lies after the evaluation date.
    #[error("birth_date cannot be in the future ({birth_date} is after {today})")]
    FutureBirthDate {
        birth_date: NaiveDate,
        today: NaiveDate,
    },

    /// A numeric field is outside its declared bounds.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ValidationError {
    /// The field that caused the rejection.
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidBirthDate { .. } | Self::FutureBirthDate { .. } => Field::BirthDate,
            Self::OutOfRange { field, .. } => *field,
        }
    }

    /// Returns true for birth date problems (as opposed to range violations).
    pub fn is_birth_date(&self) -> bool {
        self.field() == Field::BirthDate
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_field() {
        let error = ValidationError::OutOfRange {
            field: Field::StressLevel,
            value: 7.0,
            min: 1.0,
            max: 5.0,
        };
        assert_eq!(error.field(), Field::StressLevel);
        assert_eq!(
            error.to_string(),
            "stress_level must be between 1 and 5, got 7"
        );
        assert!(!error.is_birth_date());
    }

    #[test]
    fn future_birth_date_is_a_birth_date_error() {
        let error = ValidationError::FutureBirthDate {
            birth_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            today: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        assert!(error.is_birth_date());
        assert!(error.to_string().starts_with("birth_date cannot be in the future"));
    }
}
