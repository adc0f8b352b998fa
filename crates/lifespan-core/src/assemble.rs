//! Response assembly: age, remaining years, death date, rounding.

use chrono::{Days, NaiveDate};
use lifespan_model::{NormalizedRequest, PredictionResult, round_to};

use crate::engine::Estimate;

/// Mean Gregorian year length in days.
pub const DAYS_PER_YEAR: f64 = 365.2425;

const PRESENTATION_PLACES: i32 = 2;

/// Age in years on `today`, rounded to two decimals.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> f64 {
    let days = (today - birth_date).num_days();
    round_to(days as f64 / DAYS_PER_YEAR, PRESENTATION_PLACES)
}

/// Project the death date `remaining_years` after `today`, truncating to
/// whole days.
pub fn project_death_date(today: NaiveDate, remaining_years: f64) -> NaiveDate {
    let days = (remaining_years.max(0.0) * DAYS_PER_YEAR).floor() as u64;
    today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// Build the caller-facing result.
///
/// The rounded age is used when computing remaining years so the reported
/// figures add up.
pub fn assemble(request: &NormalizedRequest, estimate: &Estimate, today: NaiveDate) -> PredictionResult {
    let age_years = age_in_years(request.birth_date, today);
    let remaining_years = (estimate.lifespan_years - age_years).max(0.0);

    PredictionResult {
        name: request.full_name.clone(),
        birth_date: request.birth_date,
        current_age_years: age_years,
        predicted_lifespan_years: round_to(estimate.lifespan_years, PRESENTATION_PLACES),
        predicted_death_date: project_death_date(today, remaining_years),
        remaining_years: round_to(remaining_years, PRESENTATION_PLACES),
        confidence: estimate.confidence,
        factors: estimate
            .adjustments
            .map_years(|years| round_to(years, PRESENTATION_PLACES)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_on_birth_day_is_zero() {
        assert_eq!(age_in_years(date(2024, 2, 29), date(2024, 2, 29)), 0.0);
    }

    #[test]
    fn age_uses_mean_year_length() {
        // 12784 days
        assert_eq!(age_in_years(date(1990, 1, 1), date(2025, 1, 1)), 35.0);
        assert_eq!(age_in_years(date(2000, 1, 1), date(2000, 7, 2)), 0.5);
    }

    #[test]
    fn death_date_truncates_fractional_days() {
        let today = date(2025, 1, 1);
        assert_eq!(project_death_date(today, 0.0), today);
        // 1 year = 365.2425 days, floor to 365
        assert_eq!(project_death_date(today, 1.0), date(2026, 1, 1));
        assert_eq!(project_death_date(today, -3.0), today);
    }
}
