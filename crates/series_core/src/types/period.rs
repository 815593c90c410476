//! Calendar month arithmetic.
//!
//! `YearMonth` replaces day-based date stepping: adding one month to
//! 31 January never lands in March, so a monthly window cannot skip or
//! repeat a period.
//!
//! # Examples
//!
//! ```
//! use series_core::types::YearMonth;
//!
//! let dec = YearMonth::new(2024, 12).unwrap();
//! assert_eq!(dec.succ().unwrap(), YearMonth::new(2025, 1).unwrap());
//! assert_eq!(dec.offset(-60).unwrap().label(), "2019-12");
//!
//! let parsed: YearMonth = "2023-07".parse().unwrap();
//! assert_eq!(parsed.month(), 7);
//!
//! // Years are bounded by chrono's calendar
//! assert!("999999-01".parse::<YearMonth>().is_err());
//! ```

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::error::SeriesError;

/// A calendar month (year plus month 1-12).
///
/// Field order gives chronological `Ord`. The year always lies within
/// `NaiveDate`'s range; serialised as its `YYYY-MM` label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month from its components.
    ///
    /// # Returns
    /// - `Err(SeriesError::InvalidMonth)` when `month` is outside 1-12
    /// - `Err(SeriesError::PeriodOutOfRange)` when `year` is outside the
    ///   range `NaiveDate` can represent
    pub fn new(year: i32, month: u32) -> Result<Self, SeriesError> {
        if !(1..=12).contains(&month) {
            return Err(SeriesError::InvalidMonth { year, month });
        }
        if !(NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(&year) {
            return Err(SeriesError::PeriodOutOfRange(format!(
                "year {} outside {}..={}",
                year,
                NaiveDate::MIN.year(),
                NaiveDate::MAX.year()
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// Year component.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month component (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month.
    pub fn succ(&self) -> Result<Self, SeriesError> {
        self.offset(1)
    }

    /// Shifts by a signed number of months.
    ///
    /// # Returns
    /// `Err(SeriesError::PeriodOutOfRange)` when the result leaves the
    /// supported year range.
    pub fn offset(&self, months: i32) -> Result<Self, SeriesError> {
        let total = self.ordinal().checked_add(months).ok_or_else(|| {
            SeriesError::PeriodOutOfRange(format!("{} shifted by {} months", self, months))
        })?;
        Self::new(total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
    }

    /// `YYYY-MM` label.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Months since year 0. Bounded years keep this far from `i32::MAX`.
    fn ordinal(&self) -> i32 {
        self.year * 12 + (self.month as i32 - 1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| SeriesError::PeriodParse(format!("expected YYYY-MM, got '{}'", s)))?;

        let year: i32 = year
            .parse()
            .map_err(|_| SeriesError::PeriodParse(format!("invalid year in '{}'", s)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| SeriesError::PeriodParse(format!("invalid month in '{}'", s)))?;

        YearMonth::new(year, month)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = SeriesError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label.parse()
    }
}

impl From<YearMonth> for String {
    fn from(period: YearMonth) -> Self {
        period.label()
    }
}
