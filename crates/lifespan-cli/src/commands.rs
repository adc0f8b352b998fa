use anyhow::{Context, Result};
use lifespan_core::{BASELINE_TABLE, predict};
use lifespan_model::{PredictionRequest, PredictionResult};
use lifespan_server::{AppState, Clock, ServerConfig, SystemClock};
use tracing::{debug, info};

use lifespan_cli::logging::redact_value;
use lifespan_cli::summary::print_countries;

use crate::cli::{PredictArgs, ServeArgs};

pub fn run_serve(args: &ServeArgs) -> Result<()> {
    let config = ServerConfig::new(args.host.clone(), args.port);
    let state = AppState::from_env();
    let runtime = tokio::runtime::Runtime::new().context("start async runtime")?;
    runtime
        .block_on(lifespan_server::serve(&config, state))
        .with_context(|| format!("serve on {}", config.address()))
}

pub fn run_predict(args: &PredictArgs) -> Result<PredictionResult> {
    let today = args.as_of.unwrap_or_else(|| SystemClock.today());
    let request = request_from_args(args);
    debug!(
        name = redact_value(request.full_name.as_deref().unwrap_or("")),
        birth_date = redact_value(&request.birth_date),
        today = %today,
        "running prediction"
    );
    let result = predict(&request, today)?;
    info!(
        lifespan_years = result.predicted_lifespan_years,
        confidence = result.confidence,
        "prediction complete"
    );
    Ok(result)
}

pub fn run_countries() -> Result<()> {
    print_countries(&BASELINE_TABLE);
    Ok(())
}

pub fn print_json(result: &PredictionResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).context("serialize result")?;
    println!("{json}");
    Ok(())
}

fn request_from_args(args: &PredictArgs) -> PredictionRequest {
    PredictionRequest {
        full_name: args.name.clone(),
        birth_date: args.birth_date.clone(),
        gender: args.gender.clone(),
        is_smoker: Some(args.smoker),
        height_cm: args.height_cm,
        weight_kg: args.weight_kg,
        weekly_exercise_mins: args.exercise_mins,
        stress_level: args.stress,
        country: args.country.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clap::Parser;
    use lifespan_model::ValidationError;

    use crate::cli::{Cli, Command};

    fn predict_args(args: &[&str]) -> PredictArgs {
        let argv = ["lifespan", "predict"].into_iter().chain(args.iter().copied());
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Predict(args) => args,
            _ => panic!("expected predict subcommand"),
        }
    }

    #[test]
    fn request_carries_every_flag() {
        let args = predict_args(&[
            "--birth-date",
            "1990-01-01",
            "--name",
            "Reference",
            "--gender",
            "male",
            "--smoker",
            "--height-cm",
            "180",
            "--weight-kg",
            "75",
            "--exercise-mins",
            "200",
            "--stress",
            "2",
            "--country",
            "usa",
        ]);
        let request = request_from_args(&args);
        assert_eq!(request.full_name.as_deref(), Some("Reference"));
        assert_eq!(request.birth_date, "1990-01-01");
        assert_eq!(request.gender.as_deref(), Some("male"));
        assert_eq!(request.is_smoker, Some(true));
        assert_eq!(request.height_cm, Some(180.0));
        assert_eq!(request.weight_kg, Some(75.0));
        assert_eq!(request.weekly_exercise_mins, Some(200));
        assert_eq!(request.stress_level, Some(2));
        assert_eq!(request.country.as_deref(), Some("usa"));
    }

    #[test]
    fn omitted_flags_stay_unset() {
        let request = request_from_args(&predict_args(&["--birth-date", "1990-01-01"]));
        assert_eq!(request.is_smoker, Some(false));
        assert_eq!(request.gender, None);
        assert_eq!(request.stress_level, None);
        assert_eq!(request.country, None);
    }

    #[test]
    fn predict_uses_as_of_date() {
        let args = predict_args(&[
            "--birth-date",
            "1990-01-01",
            "--gender",
            "male",
            "--country",
            "usa",
            "--height-cm",
            "180",
            "--weight-kg",
            "75",
            "--exercise-mins",
            "200",
            "--stress",
            "2",
            "--as-of",
            "2025-06-15",
        ]);
        let result = run_predict(&args).unwrap();
        assert_eq!(result.current_age_years, 35.45);
        assert_eq!(result.predicted_lifespan_years, 76.2);
        assert_eq!(
            result.predicted_death_date,
            NaiveDate::from_ymd_opt(2066, 3, 15).unwrap()
        );
    }

    #[test]
    fn negative_stress_reaches_validation() {
        let args = predict_args(&["--birth-date", "1990-01-01", "--stress", "-1"]);
        let error = run_predict(&args).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ValidationError>(),
            Some(ValidationError::OutOfRange { .. })
        ));
    }
}
