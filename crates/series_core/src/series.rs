//! Generated monthly series and their derived views.

use std::collections::BTreeMap;

use crate::math::rounding::round_to_cents;
use crate::math::statistics::{summarise, SummaryStatistics};
use crate::types::{Category, SeriesError, YearMonth};

/// One month of synthetic history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesPoint {
    /// `YYYY-MM` label
    pub period: String,
    /// Value rounded to 2 decimals
    pub value: f64,
    /// Calendar year
    pub year: i32,
    /// Calendar month (1-12)
    pub month: u32,
}

impl SeriesPoint {
    /// Builds a point for `period`, rounding `value` to 2 decimals.
    pub fn new(period: YearMonth, value: f64) -> Self {
        Self {
            period: period.label(),
            value: round_to_cents(value),
            year: period.year(),
            month: period.month(),
        }
    }
}

/// Mean of all monthly values that fall in one calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearlyAggregate {
    /// Calendar year
    pub year: i32,
    /// Average value, rounded to 2 decimals
    pub average: f64,
}

/// Groups points by year and averages each group, in ascending year order.
///
/// # Examples
///
/// ```
/// use series_core::series::{yearly_averages, SeriesPoint};
/// use series_core::types::YearMonth;
///
/// let points = vec![
///     SeriesPoint::new(YearMonth::new(2024, 11).unwrap(), 10.0),
///     SeriesPoint::new(YearMonth::new(2024, 12).unwrap(), 20.0),
///     SeriesPoint::new(YearMonth::new(2025, 1).unwrap(), 5.0),
/// ];
/// let yearly = yearly_averages(&points);
/// assert_eq!(yearly.len(), 2);
/// assert_eq!(yearly[0].average, 15.0);
/// assert_eq!(yearly[1].year, 2025);
/// ```
pub fn yearly_averages(points: &[SeriesPoint]) -> Vec<YearlyAggregate> {
    let mut groups: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for point in points {
        let entry = groups.entry(point.year).or_insert((0.0, 0));
        entry.0 += point.value;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(year, (sum, count))| YearlyAggregate {
            year,
            average: round_to_cents(sum / count as f64),
        })
        .collect()
}

/// A complete synthetic history for one category and baseline.
///
/// Holds exactly [`HISTORY_MONTHS`](crate::generator::HISTORY_MONTHS)
/// points in chronological order. Only the generator builds one, and
/// construction rejects an empty point list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HistoricalSeries {
    category: Category,
    baseline: f64,
    points: Vec<SeriesPoint>,
}

impl HistoricalSeries {
    pub(crate) fn new(
        category: Category,
        baseline: f64,
        points: Vec<SeriesPoint>,
    ) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        Ok(Self {
            category,
            baseline,
            points,
        })
    }

    /// Category whose formula produced the values.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Baseline the values were scaled from.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// Points in chronological order.
    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: construction rejects empty series.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point values in chronological order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// First month of the window.
    pub fn first_period(&self) -> Option<&str> {
        self.points.first().map(|p| p.period.as_str())
    }

    /// Last month of the window.
    pub fn last_period(&self) -> Option<&str> {
        self.points.last().map(|p| p.period.as_str())
    }

    /// Yearly averages over the whole window, ascending by year.
    pub fn yearly_averages(&self) -> Vec<YearlyAggregate> {
        yearly_averages(&self.points)
    }

    /// Max, min, mean and standard deviation over the whole window.
    pub fn summary(&self) -> SummaryStatistics {
        summarise(&self.values())
    }
}
