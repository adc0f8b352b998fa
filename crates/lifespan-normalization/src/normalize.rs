use chrono::NaiveDate;
use lifespan_model::{NormalizedRequest, PredictionRequest, StressLevel, ValidationError};

use crate::bmi::bmi_from;
use crate::bounds::{HEIGHT_CM, STRESS_LEVEL, WEEKLY_EXERCISE_MINS, WEIGHT_KG, check_optional};
use crate::categorical::{normalize_country, normalize_gender};
use crate::date::{parse_birth_date, validate_birth_date};

const DEFAULT_STRESS_LEVEL: i64 = 3;

/// Validate and default a raw request against the evaluation date `today`.
///
/// Checks run in this order and the first failure is returned:
///
/// 1. `birth_date` parses as `YYYY-MM-DD`
/// 2. numeric fields are inside their bounds
/// 3. `birth_date` is not after `today`
///
/// # Errors
///
/// Returns a [`ValidationError`] identifying the offending field.
pub fn normalize_request(
    request: &PredictionRequest,
    today: NaiveDate,
) -> Result<NormalizedRequest, ValidationError> {
    let birth_date = parse_birth_date(&request.birth_date)?;

    let height_cm = check_optional(&HEIGHT_CM, request.height_cm)?;
    let weight_kg = check_optional(&WEIGHT_KG, request.weight_kg)?;
    let weekly_exercise_mins =
        WEEKLY_EXERCISE_MINS.check_integer(request.weekly_exercise_mins.unwrap_or(0))?;
    let stress_level =
        STRESS_LEVEL.check_integer(request.stress_level.unwrap_or(DEFAULT_STRESS_LEVEL))?;

    validate_birth_date(birth_date, today)?;

    Ok(NormalizedRequest {
        full_name: request.full_name.clone(),
        birth_date,
        gender: normalize_gender(request.gender.as_deref()),
        is_smoker: request.is_smoker.unwrap_or(false),
        height_cm,
        weight_kg,
        bmi: bmi_from(height_cm, weight_kg),
        // Both conversions are infallible after the bound checks above.
        weekly_exercise_mins: u32::try_from(weekly_exercise_mins).unwrap_or_default(),
        stress_level: u8::try_from(stress_level)
            .ok()
            .and_then(StressLevel::new)
            .unwrap_or_default(),
        country: normalize_country(request.country.as_deref()),
    })
}
