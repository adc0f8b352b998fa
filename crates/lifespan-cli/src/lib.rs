//! CLI library components for the life expectancy estimator.

pub mod logging;
pub mod summary;
