//! Summary statistics over a series of values.
//!
//! Values are summarised at full precision and each statistic is rounded to
//! two decimals afterwards, so the rounded mean is not re-used when
//! computing the deviation.

use super::rounding::round_to_cents;
use crate::types::SeriesError;

/// Max, min, mean and population standard deviation, rounded for display.
///
/// # Examples
///
/// ```
/// use series_core::math::SummaryStatistics;
///
/// let stats = SummaryStatistics::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(stats.max, 9.0);
/// assert_eq!(stats.min, 2.0);
/// assert_eq!(stats.mean, 5.0);
/// assert_eq!(stats.std_dev, 2.0);
///
/// assert!(SummaryStatistics::from_values(&[]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStatistics {
    /// Largest value
    pub max: f64,
    /// Smallest value
    pub min: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation: sqrt(mean of squared deviations)
    pub std_dev: f64,
}

impl SummaryStatistics {
    /// Summarises a slice of values.
    ///
    /// # Returns
    /// `Err(SeriesError::EmptySeries)` for an empty slice.
    pub fn from_values(values: &[f64]) -> Result<Self, SeriesError> {
        if values.is_empty() {
            Err(SeriesError::EmptySeries)
        } else {
            Ok(summarise(values))
        }
    }

    /// Spread between the largest and smallest value.
    pub fn range(&self) -> f64 {
        round_to_cents(self.max - self.min)
    }
}

/// Summarises a non-empty slice.
///
/// Callers guarantee `values` is non-empty; an empty slice would yield
/// infinities and NaN.
pub(crate) fn summarise(values: &[f64]) -> SummaryStatistics {
    let n = values.len() as f64;

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    SummaryStatistics {
        max: round_to_cents(max),
        min: round_to_cents(min),
        mean: round_to_cents(mean),
        std_dev: round_to_cents(variance.sqrt()),
    }
}
