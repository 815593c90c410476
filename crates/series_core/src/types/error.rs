//! Error types for structured error handling.
//!
//! Errors arise when building periods from untrusted components or labels,
//! when a month window runs past the supported calendar, or when
//! summarising an empty slice.

use thiserror::Error;

/// Errors raised at the edges of the series API.
///
/// # Examples
/// ```
/// use series_core::types::SeriesError;
///
/// let err = SeriesError::InvalidMonth { year: 2024, month: 13 };
/// assert_eq!(format!("{}", err), "Invalid month: 2024-13");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// Month component outside 1-12.
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth {
        /// Year component
        year: i32,
        /// Month component
        month: u32,
    },

    /// Failed to parse a `YYYY-MM` label.
    #[error("Period parse error: {0}")]
    PeriodParse(String),

    /// Year outside the calendar `chrono` supports.
    #[error("Period out of range: {0}")]
    PeriodOutOfRange(String),

    /// An operation that needs at least one value received none.
    #[error("Series is empty")]
    EmptySeries,
}
