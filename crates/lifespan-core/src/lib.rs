//! Life expectancy estimation core.
//!
//! The flow for one request is:
//!
//! 1. normalize the raw request (`lifespan-normalization`)
//! 2. [`engine::estimate`]: baseline plus [`rules::RULES`], clamped
//! 3. [`assemble::assemble`]: age, remaining years, death date, rounding
//!
//! Nothing here holds state between calls and the only shared data is the
//! immutable [`baseline::BASELINE_TABLE`].
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use lifespan_core::predict;
//! use lifespan_model::PredictionRequest;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let result = predict(&PredictionRequest::new("1990-01-01"), today).unwrap();
//! assert!((40.0..=100.0).contains(&result.predicted_lifespan_years));
//! ```

pub mod assemble;
pub mod baseline;
pub mod engine;
pub mod rules;

use chrono::NaiveDate;
use lifespan_model::{PredictionRequest, PredictionResult, ValidationError};
use lifespan_normalization::normalize_request;
use tracing::{debug, info_span};

pub use assemble::assemble;
pub use baseline::{BASELINE_TABLE, CountryBaseline, baseline_years};
pub use engine::{Estimate, estimate};

/// Validate `request` and estimate lifespan as of `today`.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the request is malformed or out of range.
pub fn predict(
    request: &PredictionRequest,
    today: NaiveDate,
) -> Result<PredictionResult, ValidationError> {
    let span = info_span!("predict", today = %today);
    let _guard = span.enter();

    let normalized = normalize_request(request, today)?;
    let estimate = estimate(&normalized);
    debug!(
        country = %normalized.country,
        gender = %normalized.gender,
        baseline_years = estimate.baseline_years,
        lifespan_years = estimate.lifespan_years,
        confidence = estimate.confidence,
        factor_count = estimate.adjustments.len(),
        "estimate computed"
    );
    Ok(assemble(&normalized, &estimate, today))
}
