//! Estimation engine.
//!
//! `estimate` is a total function over [`NormalizedRequest`]: baseline
//! lookup, rule evaluation, summation, clamping. It has no error cases.

use lifespan_model::{Adjustments, NormalizedRequest};
use tracing::trace;

use crate::baseline::baseline_years;
use crate::rules::RULES;

pub const MIN_LIFESPAN_YEARS: f64 = 40.0;
pub const MAX_LIFESPAN_YEARS: f64 = 100.0;
pub const CONFIDENCE_SEED: i32 = 70;
pub const MIN_CONFIDENCE: i32 = 50;
pub const MAX_CONFIDENCE: i32 = 90;

/// Engine output before presentation rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Baseline for the request's country and gender.
    pub baseline_years: f64,
    /// Clamped to `[MIN_LIFESPAN_YEARS, MAX_LIFESPAN_YEARS]`.
    pub lifespan_years: f64,
    /// Unrounded deltas in rule order.
    pub adjustments: Adjustments,
    /// Clamped to `[MIN_CONFIDENCE, MAX_CONFIDENCE]`.
    pub confidence: u8,
}

/// Estimate lifespan for a normalized request.
pub fn estimate(request: &NormalizedRequest) -> Estimate {
    let base = baseline_years(request.country, request.gender);
    let mut adjustments = Adjustments::new();
    let mut confidence = CONFIDENCE_SEED;

    for rule in &RULES {
        if let Some(outcome) = (rule.apply)(request) {
            trace!(
                rule = rule.name,
                factor = %outcome.factor,
                years = outcome.years,
                confidence_delta = outcome.confidence_delta,
                "adjustment applied"
            );
            adjustments.push(outcome.factor, outcome.years);
            confidence += outcome.confidence_delta;
        }
    }

    let lifespan_years = (base + adjustments.total()).clamp(MIN_LIFESPAN_YEARS, MAX_LIFESPAN_YEARS);
    let confidence = confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    Estimate {
        baseline_years: base,
        lifespan_years,
        adjustments,
        // Clamped into 50..=90 above.
        confidence: u8::try_from(confidence).unwrap_or(u8::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lifespan_model::{Country, Factor, Gender, StressLevel};

    fn request() -> NormalizedRequest {
        NormalizedRequest {
            full_name: None,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            gender: Gender::Male,
            is_smoker: false,
            height_cm: Some(180.0),
            weight_kg: Some(75.0),
            bmi: Some(23.1),
            weekly_exercise_mins: 200,
            stress_level: StressLevel::new(2).unwrap(),
            country: Country::Usa,
        }
    }

    #[test]
    fn reference_scenario() {
        let estimate = estimate(&request());
        assert_eq!(estimate.baseline_years, 73.2);
        assert!((estimate.lifespan_years - 76.2).abs() < 1e-9);
        assert_eq!(estimate.confidence, 75);

        let factors: Vec<_> = estimate.adjustments.iter().map(|a| (a.factor, a.years)).collect();
        assert_eq!(
            factors,
            vec![
                (Factor::NonSmokerBonus, 1.5),
                (Factor::Exercise, 1.5),
                (Factor::Stress, -1.0),
                (Factor::Bmi, 1.0),
            ]
        );
    }

    #[test]
    fn lifespan_is_clamped_low() {
        let worst = NormalizedRequest {
            country: Country::Nigeria,
            is_smoker: true,
            bmi: Some(40.0),
            weekly_exercise_mins: 0,
            stress_level: StressLevel::new(5).unwrap(),
            ..request()
        };
        // 53.5 - 7 - 3 - 6 = 37.5
        let estimate = estimate(&worst);
        assert_eq!(estimate.lifespan_years, MIN_LIFESPAN_YEARS);
        assert_eq!(estimate.confidence, 68);
    }

    #[test]
    fn unspecified_gender_adds_penalty() {
        let unspecified = NormalizedRequest {
            gender: Gender::Unspecified,
            ..request()
        };
        let estimate = estimate(&unspecified);
        assert_eq!(estimate.baseline_years, 76.2);
        assert_eq!(estimate.adjustments.get(Factor::GenderUnspecified), Some(-0.3));
    }

    #[test]
    fn minimal_confidence_profile() {
        let sparse = NormalizedRequest {
            is_smoker: true,
            bmi: None,
            weekly_exercise_mins: 0,
            ..request()
        };
        assert_eq!(estimate(&sparse).confidence, 65);
    }
}
