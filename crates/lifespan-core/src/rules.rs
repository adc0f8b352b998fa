//! Adjustment rules.
//!
//! Each rule is a pure function of the normalized request that either
//! produces one adjustment (with a confidence delta) or nothing. Rules never
//! read each other's output, so the lifespan sum is order-independent; the
//! order of [`RULES`] only fixes the presentation order of the breakdown.

use lifespan_model::{Factor, Gender, NormalizedRequest, StressLevel};

/// Result of a rule that fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleOutcome {
    pub factor: Factor,
    pub years: f64,
    pub confidence_delta: i32,
}

impl RuleOutcome {
    fn new(factor: Factor, years: f64) -> Self {
        Self {
            factor,
            years,
            confidence_delta: 0,
        }
    }

    fn with_confidence(mut self, delta: i32) -> Self {
        self.confidence_delta = delta;
        self
    }
}

/// A named adjustment rule.
#[derive(Clone, Copy)]
pub struct AdjustmentRule {
    pub name: &'static str,
    pub apply: fn(&NormalizedRequest) -> Option<RuleOutcome>,
}

impl std::fmt::Debug for AdjustmentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjustmentRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// All rules in presentation order.
pub static RULES: [AdjustmentRule; 5] = [
    AdjustmentRule {
        name: "smoking",
        apply: smoking,
    },
    AdjustmentRule {
        name: "exercise",
        apply: exercise,
    },
    AdjustmentRule {
        name: "stress",
        apply: stress,
    },
    AdjustmentRule {
        name: "bmi",
        apply: bmi,
    },
    AdjustmentRule {
        name: "gender_unspecified",
        apply: gender_unspecified,
    },
];

pub const SMOKING_YEARS: f64 = -7.0;
pub const NON_SMOKER_BONUS_YEARS: f64 = 1.5;
pub const GENDER_UNSPECIFIED_YEARS: f64 = -0.3;

/// Penalty by stress level 1..=5.
pub const STRESS_PENALTIES: [f64; 5] = [-0.5, -1.0, -1.5, -2.2, -3.0];

/// Smokers lose seven years; everyone else gets a small bonus. Always fires.
pub fn smoking(request: &NormalizedRequest) -> Option<RuleOutcome> {
    let outcome = if request.is_smoker {
        RuleOutcome::new(Factor::Smoking, SMOKING_YEARS).with_confidence(-5)
    } else {
        RuleOutcome::new(Factor::NonSmokerBonus, NON_SMOKER_BONUS_YEARS).with_confidence(2)
    };
    Some(outcome)
}

/// Weekly exercise minutes. No entry for zero minutes.
pub fn exercise(request: &NormalizedRequest) -> Option<RuleOutcome> {
    match request.weekly_exercise_mins {
        0 => None,
        1..150 => Some(RuleOutcome::new(Factor::Exercise, 0.5)),
        150..300 => Some(RuleOutcome::new(Factor::Exercise, 1.5)),
        _ => Some(RuleOutcome::new(Factor::Exercise, 2.5).with_confidence(2)),
    }
}

/// Stress penalty. Always fires.
pub fn stress(request: &NormalizedRequest) -> Option<RuleOutcome> {
    Some(RuleOutcome::new(
        Factor::Stress,
        stress_penalty(request.stress_level),
    ))
}

pub fn stress_penalty(level: StressLevel) -> f64 {
    STRESS_PENALTIES[usize::from(level.get() - StressLevel::MIN)]
}

/// BMI category adjustment; only when BMI is known.
pub fn bmi(request: &NormalizedRequest) -> Option<RuleOutcome> {
    request
        .bmi
        .map(|value| RuleOutcome::new(Factor::Bmi, bmi_years(value)).with_confidence(3))
}

/// Year delta for a BMI value.
pub fn bmi_years(bmi: f64) -> f64 {
    if bmi < 18.5 {
        -1.5
    } else if bmi < 25.0 {
        1.0
    } else if bmi < 30.0 {
        -1.0
    } else if bmi < 35.0 {
        -3.0
    } else {
        -6.0
    }
}

pub fn gender_unspecified(request: &NormalizedRequest) -> Option<RuleOutcome> {
    (request.gender == Gender::Unspecified)
        .then(|| RuleOutcome::new(Factor::GenderUnspecified, GENDER_UNSPECIFIED_YEARS))
}
