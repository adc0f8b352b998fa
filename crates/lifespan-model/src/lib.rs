//! Data model for the life expectancy estimator.
//!
//! - [`PredictionRequest`]: raw caller input
//! - [`NormalizedRequest`]: validated input the engine consumes
//! - [`PredictionResult`]: estimate with factor breakdown
//! - [`ValidationError`]: why a request was rejected

pub mod enums;
pub mod error;
pub mod numeric;
pub mod request;
pub mod result;

pub use enums::{Country, Factor, Gender};
pub use error::{Field, Result, ValidationError};
pub use numeric::round_to;
pub use request::{NormalizedRequest, PredictionRequest, StressLevel};
pub use result::{Adjustment, Adjustments, PredictionResult};
