//! Tests for lifespan-model types.

use chrono::NaiveDate;
use lifespan_model::{Adjustments, Factor, PredictionRequest, PredictionResult};

#[test]
fn request_accepts_nulls_for_optional_fields() {
    let request: PredictionRequest = serde_json::from_str(
        r#"{
            "full_name": null,
            "birth_date": "1985-07-20",
            "gender": null,
            "is_smoker": null,
            "height_cm": null,
            "weight_kg": null,
            "weekly_exercise_mins": null,
            "stress_level": null,
            "country": null
        }"#,
    )
    .expect("deserialize request");
    assert_eq!(request.birth_date, "1985-07-20");
    assert!(request.is_smoker.is_none());
    assert!(request.stress_level.is_none());
}

#[test]
fn request_requires_birth_date() {
    let result: Result<PredictionRequest, _> = serde_json::from_str(r#"{"gender": "male"}"#);
    assert!(result.is_err());
}

#[test]
fn result_serializes_with_iso_dates_and_factor_object() {
    let mut factors = Adjustments::new();
    factors.push(Factor::NonSmokerBonus, 1.5);
    factors.push(Factor::Stress, -1.5);

    let result = PredictionResult {
        name: Some("Ada".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        current_age_years: 35.0,
        predicted_lifespan_years: 73.3,
        predicted_death_date: NaiveDate::from_ymd_opt(2063, 4, 19).unwrap(),
        remaining_years: 38.3,
        confidence: 72,
        factors,
    };

    let value = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(value["birth_date"], "1990-01-01");
    assert_eq!(value["predicted_death_date"], "2063-04-19");
    assert_eq!(value["confidence"], 72);
    assert_eq!(value["factors"]["non_smoker_bonus"], 1.5);
    assert_eq!(value["factors"]["stress"], -1.5);
}
