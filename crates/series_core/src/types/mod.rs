//! Core value types for synthetic history.
//!
//! This module provides:
//! - `category`: The closed set of formula tags, with a fallback arm
//! - `period`: Calendar month arithmetic and `YYYY-MM` labels
//! - `error`: Structured error types for period parsing and aggregation
//!
//! # Re-exports
//!
//! - [`Category`] from `category`
//! - [`YearMonth`] from `period`
//! - [`SeriesError`] from `error`

pub mod category;
pub mod error;
pub mod period;

pub use category::Category;
pub use error::SeriesError;
pub use period::YearMonth;
