//! Numeric helpers for display-ready series values.
//!
//! - [`rounding`]: Two-decimal rounding applied to every stored value
//! - [`statistics`]: Max, min, mean and population standard deviation

pub mod rounding;
pub mod statistics;

pub use rounding::round_to_cents;
pub use statistics::SummaryStatistics;
