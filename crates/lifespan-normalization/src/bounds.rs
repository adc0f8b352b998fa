//! Hard range constraints for numeric request fields.
//!
//! Values outside a bound are rejected, never clamped.

use lifespan_model::{Field, ValidationError};

/// Inclusive numeric range for a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub field: Field,
    pub min: f64,
    pub max: f64,
}

pub const HEIGHT_CM: Bound = Bound {
    field: Field::HeightCm,
    min: 100.0,
    max: 250.0,
};

pub const WEIGHT_KG: Bound = Bound {
    field: Field::WeightKg,
    min: 30.0,
    max: 300.0,
};

pub const WEEKLY_EXERCISE_MINS: Bound = Bound {
    field: Field::WeeklyExerciseMins,
    min: 0.0,
    max: 2000.0,
};

pub const STRESS_LEVEL: Bound = Bound {
    field: Field::StressLevel,
    min: 1.0,
    max: 5.0,
};

impl Bound {
    /// Returns true if `value` is finite and inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(&value)
    }

    /// Check a real-valued field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] naming the field.
    pub fn check(&self, value: f64) -> Result<f64, ValidationError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(self.violation(value))
        }
    }

    /// Check an integer field. Values too large to represent exactly as
    /// `f64` are still rejected since they exceed every bound.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] naming the field.
    pub fn check_integer(&self, value: i64) -> Result<i64, ValidationError> {
        let as_float = value as f64;
        if self.contains(as_float) {
            Ok(value)
        } else {
            Err(self.violation(as_float))
        }
    }

    fn violation(&self, value: f64) -> ValidationError {
        ValidationError::OutOfRange {
            field: self.field,
            value,
            min: self.min,
            max: self.max,
        }
    }
}

/// Check an optional real-valued field. Absent values pass through.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] if the value is present and out of
/// bounds.
pub fn check_optional(bound: &Bound, value: Option<f64>) -> Result<Option<f64>, ValidationError> {
    value.map(|v| bound.check(v)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(HEIGHT_CM.check(100.0).is_ok());
        assert!(HEIGHT_CM.check(250.0).is_ok());
        assert!(HEIGHT_CM.check(99.9).is_err());
        assert!(WEIGHT_KG.check(300.1).is_err());
        assert!(STRESS_LEVEL.check_integer(1).is_ok());
        assert!(STRESS_LEVEL.check_integer(0).is_err());
        assert!(WEEKLY_EXERCISE_MINS.check_integer(2000).is_ok());
        assert!(WEEKLY_EXERCISE_MINS.check_integer(-1).is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(WEIGHT_KG.check(f64::NAN).is_err());
        assert!(HEIGHT_CM.check(f64::INFINITY).is_err());
    }

    #[test]
    fn violation_identifies_field() {
        let error = WEEKLY_EXERCISE_MINS.check_integer(5000).unwrap_err();
        assert_eq!(error.field(), Field::WeeklyExerciseMins);
    }

    #[test]
    fn absent_optional_values_pass() {
        assert_eq!(check_optional(&HEIGHT_CM, None), Ok(None));
        assert_eq!(check_optional(&HEIGHT_CM, Some(180.0)), Ok(Some(180.0)));
        assert!(check_optional(&HEIGHT_CM, Some(20.0)).is_err());
    }
}
