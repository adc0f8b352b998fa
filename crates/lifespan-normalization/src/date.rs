//! Birth date parsing.
//!
//! Dates use the dash-separated calendar form `YYYY-MM-DD`. Month and day
//! may omit their leading zero (`1990-1-1`), as with a `strptime` parse.
//! Partial dates, times, other separators and the basic format
//! (`YYYYMMDD`) are rejected.

use chrono::NaiveDate;
use lifespan_model::ValidationError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a birth date string.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidBirthDate`] if `value` is not a valid
/// dash-separated calendar date.
pub fn parse_birth_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidBirthDate {
            value: value.to_string(),
        }
    })
}

/// Reject birth dates after `today`. A birth date equal to `today` is valid.
///
/// # Errors
///
/// Returns [`ValidationError::FutureBirthDate`] when `birth_date > today`.
pub fn validate_birth_date(birth_date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if birth_date > today {
        return Err(ValidationError::FutureBirthDate { birth_date, today });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_extended_iso_date() {
        assert_eq!(parse_birth_date("1990-01-01"), Ok(date(1990, 1, 1)));
        assert_eq!(parse_birth_date("2000-02-29"), Ok(date(2000, 2, 29)));
    }

    #[test]
    fn accepts_unpadded_month_and_day() {
        assert_eq!(parse_birth_date("1990-1-1"), Ok(date(1990, 1, 1)));
        assert_eq!(parse_birth_date("1985-7-04"), Ok(date(1985, 7, 4)));
    }

    #[test]
    fn rejects_malformed_dates() {
        for value in ["", "1990", "1990-13-01", "1990-02-30", "01/02/1990", "19900101", "1990-01-01T00:00"] {
            let error = parse_birth_date(value).unwrap_err();
            assert_eq!(
                error,
                ValidationError::InvalidBirthDate {
                    value: value.to_string()
                },
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn today_is_allowed_tomorrow_is_not() {
        let today = date(2025, 3, 14);
        assert!(validate_birth_date(today, today).is_ok());
        assert!(validate_birth_date(date(2025, 3, 15), today).is_err());
        assert!(validate_birth_date(date(1950, 3, 15), today).is_ok());
    }
}
