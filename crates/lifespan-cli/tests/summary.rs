use chrono::NaiveDate;
use lifespan_cli::summary::{countries_table, render_factors, summary_table};
use lifespan_core::{BASELINE_TABLE, predict};
use lifespan_model::{Adjustments, Factor, PredictionRequest};

fn reference_result() -> lifespan_model::PredictionResult {
    let request = PredictionRequest {
        full_name: Some("Reference".to_string()),
        gender: Some("male".to_string()),
        country: Some("usa".to_string()),
        is_smoker: Some(false),
        height_cm: Some(180.0),
        weight_kg: Some(75.0),
        weekly_exercise_mins: Some(200),
        stress_level: Some(2),
        ..PredictionRequest::new("1990-01-01")
    };
    let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    predict(&request, today).unwrap()
}

#[test]
fn factor_breakdown_is_aligned() {
    let mut factors = Adjustments::new();
    factors.push(Factor::NonSmokerBonus, 1.5);
    factors.push(Factor::Exercise, 1.5);
    factors.push(Factor::Stress, -1.0);
    factors.push(Factor::Bmi, 1.0);

    insta::assert_snapshot!(render_factors(&factors), @r"
    non_smoker_bonus  +1.50
    exercise          +1.50
    stress            -1.00
    bmi               +1.00
    ");
}

#[test]
fn empty_breakdown_renders_nothing() {
    assert_eq!(render_factors(&Adjustments::new()), "");
}

#[test]
fn summary_table_shows_headline_numbers() {
    let rendered = summary_table(&reference_result()).to_string();
    assert!(rendered.contains("Reference"));
    assert!(rendered.contains("76.20 years"));
    assert!(rendered.contains("2066-03-15"));
    assert!(rendered.contains("75%"));
    assert!(rendered.contains("non_smoker_bonus"));
}

#[test]
fn countries_table_lists_every_baseline() {
    let rendered = countries_table(&BASELINE_TABLE).to_string();
    for baseline in &BASELINE_TABLE {
        assert!(rendered.contains(baseline.country.as_str()));
    }
    assert!(rendered.contains("87.6"));
}
