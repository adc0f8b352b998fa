//! Request normalization for the life expectancy estimator.
//!
//! Turns a raw [`PredictionRequest`](lifespan_model::PredictionRequest) into a
//! [`NormalizedRequest`](lifespan_model::NormalizedRequest):
//!
//! - `date`: ISO birth date parsing and the not-in-the-future guard
//! - `bounds`: hard range checks for numeric fields
//! - `categorical`: lenient country and gender resolution
//! - `bmi`: body-mass index derivation
//!
//! Numeric fields are strict (out of range is an error), categorical fields
//! are lenient (unknown values fall back to a default).

pub mod bmi;
pub mod bounds;
pub mod categorical;
pub mod date;
mod normalize;

pub use bmi::bmi_from;
pub use categorical::{normalize_country, normalize_gender};
pub use date::{parse_birth_date, validate_birth_date};
pub use normalize::normalize_request;
