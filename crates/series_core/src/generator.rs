//! Synthetic five-year monthly history.
//!
//! Each category shapes its history differently around the baseline:
//!
//! | Category | Value at month index `i` (b = baseline, U ~ Uniform[0,1)) |
//! |---|---|
//! | commodity | b·(0.7 + 0.6U) + sin(0.2i)·b·0.1 |
//! | shipping | b·(1.5 + 0.8U) for 36 < i < 48, else b·(0.8 + 0.4U) |
//! | exchange | b·(0.85 + 0.3U) + 2i |
//! | interest | 0.1b for i < 24; b·(0.1 + 0.03(i − 24)) for i < 48; else b·(0.9 + 0.2U) |
//! | economy | b·(0.9 + 0.2U) + sin(0.1i)·b·0.05 |
//! | tariff | 25 for i < 48; 25 − (i − 48) for i < 58; else b |
//! | unclassified | b·(0.8 + 0.4U) |
//!
//! Values are rounded to 2 decimals when stored. Deterministic branches
//! consume no randomness, so a seeded source stays aligned with the random
//! branches only.

use rand::Rng;
use tracing::debug;

use crate::rng::SeriesRng;
use crate::series::{HistoricalSeries, SeriesPoint};
use crate::types::{Category, SeriesError, YearMonth};

/// Number of monthly points in every generated series (five years).
pub const HISTORY_MONTHS: usize = 60;

/// Tariff rate held before the stepped cut.
const LEGACY_TARIFF_RATE: f64 = 25.0;

/// Raw (unrounded) synthetic value for month `index`.
///
/// Draws at most one uniform variate from `rng`.
///
/// # Examples
///
/// ```
/// use rand::rngs::mock::StepRng;
/// use series_core::generator::monthly_value;
/// use series_core::types::Category;
///
/// let mut rng = StepRng::new(0, 0);
/// assert_eq!(monthly_value(Category::Tariff, 50, 15.0, &mut rng), 23.0);
/// assert_eq!(monthly_value(Category::Tariff, 59, 15.0, &mut rng), 15.0);
/// ```
pub fn monthly_value<R: Rng + ?Sized>(
    category: Category,
    index: usize,
    baseline: f64,
    rng: &mut R,
) -> f64 {
    let i = index as f64;
    match category {
        Category::Commodity => {
            let u: f64 = rng.gen();
            baseline * (0.7 + u * 0.6) + (i * 0.2).sin() * baseline * 0.1
        }
        Category::Shipping => {
            let u: f64 = rng.gen();
            if index > 36 && index < 48 {
                baseline * (1.5 + u * 0.8)
            } else {
                baseline * (0.8 + u * 0.4)
            }
        }
        Category::Exchange => {
            let u: f64 = rng.gen();
            baseline * (0.85 + u * 0.3) + i * 2.0
        }
        Category::Interest => {
            if index < 24 {
                baseline * 0.1
            } else if index < 48 {
                baseline * (0.1 + (i - 24.0) * 0.03)
            } else {
                let u: f64 = rng.gen();
                baseline * (0.9 + u * 0.2)
            }
        }
        Category::Economy => {
            let u: f64 = rng.gen();
            baseline * (0.9 + u * 0.2) + (i * 0.1).sin() * baseline * 0.05
        }
        Category::Tariff => {
            if index < 48 {
                LEGACY_TARIFF_RATE
            } else if index < 58 {
                LEGACY_TARIFF_RATE - (i - 48.0)
            } else {
                baseline
            }
        }
        Category::Unclassified => {
            let u: f64 = rng.gen();
            baseline * (0.8 + u * 0.4)
        }
    }
}

/// Builder for a five-year synthetic history.
///
/// # Examples
///
/// ```
/// use series_core::generator::SeriesGenerator;
/// use series_core::rng::SeriesRng;
/// use series_core::types::{Category, YearMonth};
///
/// let series = SeriesGenerator::new(Category::Interest, 4.5)
///     .with_as_of(YearMonth::new(2025, 1).unwrap())
///     .generate_with(&mut SeriesRng::from_seed(1))
///     .unwrap();
///
/// assert_eq!(series.first_period(), Some("2020-01"));
/// assert_eq!(series.last_period(), Some("2024-12"));
/// assert_eq!(series.points()[10].value, 0.45);
/// ```
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    category: Category,
    baseline: f64,
    as_of: Option<YearMonth>,
}

impl SeriesGenerator {
    /// Creates a generator for `category` scaled around `baseline`.
    pub fn new(category: Category, baseline: f64) -> Self {
        Self {
            category,
            baseline,
            as_of: None,
        }
    }

    /// Fixes the month the window ends before (defaults to the current month).
    pub fn with_as_of(mut self, as_of: YearMonth) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Category in use.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Baseline in use.
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    /// First month of the window: five years before the as-of month.
    ///
    /// # Returns
    /// `Err(SeriesError::PeriodOutOfRange)` when the window would start
    /// before the supported calendar.
    pub fn start_period(&self) -> Result<YearMonth, SeriesError> {
        self.as_of
            .unwrap_or_else(YearMonth::current)
            .offset(-(HISTORY_MONTHS as i32))
    }

    /// Generates with a freshly seeded source.
    ///
    /// Every call yields a different series for the same inputs.
    pub fn generate(&self) -> Result<HistoricalSeries, SeriesError> {
        let mut rng = SeriesRng::from_entropy();
        debug!(seed = rng.seed(), "Seeded synthetic history from entropy");
        self.generate_with(&mut rng)
    }

    /// Generates with the supplied random source.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<HistoricalSeries, SeriesError> {
        let start = self.start_period()?;
        debug!(
            category = %self.category,
            baseline = self.baseline,
            start = %start,
            "Generating synthetic history"
        );

        let mut points = Vec::with_capacity(HISTORY_MONTHS);
        for index in 0..HISTORY_MONTHS {
            let period = start.offset(index as i32)?;
            let value = monthly_value(self.category, index, self.baseline, rng);
            points.push(SeriesPoint::new(period, value));
        }

        HistoricalSeries::new(self.category, self.baseline, points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Datelike;
    use rand::rngs::mock::StepRng;

    /// Always yields U = 0.
    fn low_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Always yields U just below 1.
    fn high_rng() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn as_of() -> YearMonth {
        YearMonth::new(2025, 6).unwrap()
    }

    #[test]
    fn test_sixty_points_for_every_category() {
        let mut rng = SeriesRng::from_seed(11);
        for category in Category::KNOWN.into_iter().chain([Category::Unclassified]) {
            let series = SeriesGenerator::new(category, 100.0)
                .with_as_of(as_of())
                .generate_with(&mut rng)
                .unwrap();
            assert_eq!(series.len(), HISTORY_MONTHS, "{}", category);
        }
    }

    #[test]
    fn test_window_ends_month_before_as_of() {
        let series = SeriesGenerator::new(Category::Economy, 50.0)
            .with_as_of(as_of())
            .generate_with(&mut low_rng())
            .unwrap();
        assert_eq!(series.first_period(), Some("2020-06"));
        assert_eq!(series.last_period(), Some("2025-05"));
    }

    #[test]
    fn test_tariff_schedule() {
        let series = SeriesGenerator::new(Category::Tariff, 15.0)
            .with_as_of(as_of())
            .generate_with(&mut low_rng())
            .unwrap();
        let values = series.values();

        assert!(values[..48].iter().all(|&v| v == 25.0));
        for i in 48..58 {
            assert_eq!(values[i], 25.0 - (i as f64 - 48.0));
        }
        assert_eq!(values[50], 23.0);
        assert_eq!(values[58], 15.0);
        assert_eq!(values[59], 15.0);
    }

    #[test]
    fn test_tariff_consumes_no_randomness() {
        let mut rng = SeriesRng::from_seed(5);
        let mut untouched = SeriesRng::from_seed(5);
        SeriesGenerator::new(Category::Tariff, 15.0)
            .with_as_of(as_of())
            .generate_with(&mut rng)
            .unwrap();
        assert_eq!(rng.gen_uniform(), untouched.gen_uniform());
    }

    #[test]
    fn test_interest_steps() {
        let series = SeriesGenerator::new(Category::Interest, 4.5)
            .with_as_of(as_of())
            .generate_with(&mut low_rng())
            .unwrap();
        let values = series.values();

        assert_eq!(values[0], 0.45);
        assert_eq!(values[10], 0.45);
        assert_eq!(values[23], 0.45);
        assert_eq!(values[24], 0.45);
        // 4.5 * (0.1 + 10 * 0.03) = 1.8
        assert_eq!(values[34], 1.8);
        // 4.5 * (0.1 + 23 * 0.03) = 3.555, a rounding half
        assert_relative_eq!(values[47], 3.56, epsilon = 0.011);
        // U = 0 -> 0.9 * b
        assert_eq!(values[48], 4.05);
    }

    #[test]
    fn test_commodity_bounds() {
        let b = 80.0;
        for index in 0..HISTORY_MONTHS {
            let swing = (index as f64 * 0.2).sin() * b * 0.1;
            let lo = monthly_value(Category::Commodity, index, b, &mut low_rng());
            let hi = monthly_value(Category::Commodity, index, b, &mut high_rng());
            assert_relative_eq!(lo, b * 0.7 + swing, epsilon = 1e-9);
            assert!(hi <= b * 1.3 + swing + 1e-9 && hi > b * 1.29 + swing);
        }
    }

    #[test]
    fn test_shipping_surge_window() {
        let b = 1000.0;
        for index in 0..HISTORY_MONTHS {
            let lo = monthly_value(Category::Shipping, index, b, &mut low_rng());
            if index > 36 && index < 48 {
                assert_eq!(lo, 1500.0, "index {}", index);
            } else {
                assert_eq!(lo, 800.0, "index {}", index);
            }
        }
        // Boundaries are exclusive on both ends
        assert_eq!(monthly_value(Category::Shipping, 36, b, &mut low_rng()), 800.0);
        assert_eq!(monthly_value(Category::Shipping, 48, b, &mut low_rng()), 800.0);
    }

    #[test]
    fn test_exchange_drift() {
        let b = 1390.7;
        let first = monthly_value(Category::Exchange, 0, b, &mut low_rng());
        let last = monthly_value(Category::Exchange, 59, b, &mut low_rng());
        assert_relative_eq!(last - first, 118.0, epsilon = 1e-9);
    }

    #[test]
    fn test_economy_bounds() {
        let b = 102.8;
        for index in 0..HISTORY_MONTHS {
            let swing = (index as f64 * 0.1).sin() * b * 0.05;
            let lo = monthly_value(Category::Economy, index, b, &mut low_rng());
            let hi = monthly_value(Category::Economy, index, b, &mut high_rng());
            assert_relative_eq!(lo, b * 0.9 + swing, epsilon = 1e-9);
            assert!(hi <= b * 1.1 + swing + 1e-9 && hi > b * 1.09 + swing);
        }
    }

    #[test]
    fn test_unclassified_band() {
        let lo = monthly_value(Category::Unclassified, 7, 50.0, &mut low_rng());
        let hi = monthly_value(Category::Unclassified, 7, 50.0, &mut high_rng());
        assert_eq!(lo, 40.0);
        assert!(hi <= 60.0 && hi > 59.9);
    }

    #[test]
    fn test_same_seed_same_series() {
        let gen = SeriesGenerator::new(Category::Commodity, 78.45).with_as_of(as_of());
        let a = gen.generate_with(&mut SeriesRng::from_seed(99)).unwrap();
        let b = gen.generate_with(&mut SeriesRng::from_seed(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_from_entropy() {
        let series = SeriesGenerator::new(Category::Shipping, 1398.0)
            .with_as_of(as_of())
            .generate()
            .unwrap();
        assert_eq!(series.len(), HISTORY_MONTHS);
        assert_eq!(series.category(), Category::Shipping);
        assert_eq!(series.baseline(), 1398.0);
    }

    #[test]
    fn test_start_period_defaults_to_current_month() {
        let gen = SeriesGenerator::new(Category::Economy, 1.0);
        assert_eq!(
            gen.start_period().unwrap(),
            YearMonth::current().offset(-60).unwrap()
        );
    }

    #[test]
    fn test_window_before_calendar_start_fails() {
        let earliest = YearMonth::new(chrono::NaiveDate::MIN.year(), 3).unwrap();
        let result = SeriesGenerator::new(Category::Tariff, 15.0)
            .with_as_of(earliest)
            .generate_with(&mut low_rng());
        assert!(matches!(result, Err(SeriesError::PeriodOutOfRange(_))));
    }
}
