//! Property tests for generated histories.
//!
//! Covers the invariants every chart relies on: fixed length, strictly
//! monthly ordering, year grouping, non-negative deviation, and the
//! deterministic tariff and interest schedules.

use chrono::Datelike;
use proptest::prelude::*;
use series_core::generator::{SeriesGenerator, HISTORY_MONTHS};
use series_core::rng::SeriesRng;
use series_core::types::{Category, YearMonth};
use std::collections::BTreeSet;

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Commodity),
        Just(Category::Shipping),
        Just(Category::Exchange),
        Just(Category::Interest),
        Just(Category::Economy),
        Just(Category::Tariff),
        Just(Category::Unclassified),
    ]
}

fn as_of_strategy() -> impl Strategy<Value = YearMonth> {
    (1990i32..2100, 1u32..=12).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_length_and_monthly_order(
        category in category_strategy(),
        baseline in 0.01f64..100_000.0,
        as_of in as_of_strategy(),
        seed in any::<u64>(),
    ) {
        let series = SeriesGenerator::new(category, baseline)
            .with_as_of(as_of)
            .generate_with(&mut SeriesRng::from_seed(seed))
            .unwrap();

        prop_assert_eq!(series.len(), HISTORY_MONTHS);

        let periods: Vec<YearMonth> = series
            .points()
            .iter()
            .map(|p| p.period.parse().unwrap())
            .collect();
        for pair in periods.windows(2) {
            prop_assert_eq!(pair[0].succ().unwrap(), pair[1]);
        }
        prop_assert_eq!(periods[0], as_of.offset(-60).unwrap());
        prop_assert_eq!(periods[HISTORY_MONTHS - 1].succ().unwrap(), as_of);

        let unique: BTreeSet<_> = periods.iter().collect();
        prop_assert_eq!(unique.len(), HISTORY_MONTHS);
    }

    #[test]
    fn test_yearly_groups_match_distinct_years(
        category in category_strategy(),
        as_of in as_of_strategy(),
        seed in any::<u64>(),
    ) {
        let series = SeriesGenerator::new(category, 50.0)
            .with_as_of(as_of)
            .generate_with(&mut SeriesRng::from_seed(seed))
            .unwrap();

        let distinct: BTreeSet<i32> = series.points().iter().map(|p| p.year).collect();
        let yearly = series.yearly_averages();

        prop_assert_eq!(yearly.len(), distinct.len());
        prop_assert!(yearly.len() == 5 || yearly.len() == 6);
        prop_assert_eq!(yearly.len() == 5, as_of.month() == 1);
        for pair in yearly.windows(2) {
            prop_assert!(pair[0].year < pair[1].year);
        }
    }

    #[test]
    fn test_summary_is_consistent(
        category in category_strategy(),
        baseline in 0.01f64..10_000.0,
        seed in any::<u64>(),
    ) {
        let series = SeriesGenerator::new(category, baseline)
            .with_as_of(YearMonth::new(2025, 3).unwrap())
            .generate_with(&mut SeriesRng::from_seed(seed))
            .unwrap();
        let stats = series.summary();

        prop_assert!(stats.std_dev >= 0.0);
        prop_assert!(stats.min <= stats.mean + 0.005);
        prop_assert!(stats.mean <= stats.max + 0.005);
        prop_assert!(series.values().iter().all(|&v| v >= stats.min && v <= stats.max));
    }

    #[test]
    fn test_random_branches_never_flat(
        baseline in 1.0f64..10_000.0,
        seed in any::<u64>(),
    ) {
        let random = [
            Category::Commodity,
            Category::Shipping,
            Category::Exchange,
            Category::Economy,
        ];
        for category in random {
            let series = SeriesGenerator::new(category, baseline)
                .with_as_of(YearMonth::new(2024, 8).unwrap())
                .generate_with(&mut SeriesRng::from_seed(seed))
                .unwrap();
            prop_assert!(series.summary().std_dev > 0.0, "{} produced a flat series", category);
        }
    }

    #[test]
    fn test_tariff_deterministic_prefix(
        baseline in 0.0f64..100.0,
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
    ) {
        let gen = SeriesGenerator::new(Category::Tariff, baseline)
            .with_as_of(YearMonth::new(2025, 2).unwrap());
        let a = gen.generate_with(&mut SeriesRng::from_seed(seed_a)).unwrap();
        let b = gen.generate_with(&mut SeriesRng::from_seed(seed_b)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn test_interest_deterministic_before_month_48(
        baseline in 0.01f64..20.0,
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
    ) {
        let gen = SeriesGenerator::new(Category::Interest, baseline)
            .with_as_of(YearMonth::new(2025, 2).unwrap());
        let a = gen.generate_with(&mut SeriesRng::from_seed(seed_a)).unwrap().values();
        let b = gen.generate_with(&mut SeriesRng::from_seed(seed_b)).unwrap().values();
        prop_assert_eq!(&a[..48], &b[..48]);
    }
}

#[test]
fn test_tariff_example_baseline_15() {
    let series = SeriesGenerator::new(Category::Tariff, 15.0)
        .with_as_of(YearMonth::new(2025, 10).unwrap())
        .generate()
        .unwrap();
    assert_eq!(series.points()[0].value, 25.0);
    assert_eq!(series.points()[50].value, 23.0);
    assert_eq!(series.points()[59].value, 15.0);
}

#[test]
fn test_interest_example_baseline_4_5() {
    let series = SeriesGenerator::new(Category::Interest, 4.5)
        .generate()
        .unwrap();
    assert_eq!(series.points()[10].value, 0.45);
}

#[test]
fn test_tariff_cut_shows_in_summary() {
    // Baseline 25 only leaves the stepped cut as variation
    let series = SeriesGenerator::new(Category::Tariff, 25.0)
        .with_as_of(YearMonth::new(2025, 1).unwrap())
        .generate()
        .unwrap();
    let stats = series.summary();
    assert!(stats.std_dev > 0.0);
    assert_eq!(stats.max, 25.0);
    assert_eq!(stats.min, 16.0);
}

#[test]
fn test_yearly_alignment_examples() {
    let january = SeriesGenerator::new(Category::Economy, 10.0)
        .with_as_of(YearMonth::new(2025, 1).unwrap())
        .generate()
        .unwrap();
    assert_eq!(
        january.yearly_averages().iter().map(|y| y.year).collect::<Vec<_>>(),
        vec![2020, 2021, 2022, 2023, 2024]
    );

    let july = SeriesGenerator::new(Category::Economy, 10.0)
        .with_as_of(YearMonth::new(2025, 7).unwrap())
        .generate()
        .unwrap();
    assert_eq!(july.yearly_averages().len(), 6);
}

#[cfg(feature = "serde")]
#[test]
fn test_series_serialises_for_charting() {
    let series = SeriesGenerator::new(Category::Tariff, 15.0)
        .with_as_of(YearMonth::new(2025, 1).unwrap())
        .generate()
        .unwrap();
    let json = serde_json::to_value(&series).unwrap();
    assert_eq!(json["category"], "tariff");
    assert_eq!(json["points"].as_array().unwrap().len(), 60);
    assert_eq!(json["points"][0]["period"], "2020-01");
    assert_eq!(json["points"][0]["value"], 25.0);
}

#[test]
fn test_as_of_beyond_calendar_never_reaches_generation() {
    assert!("178956971-01".parse::<YearMonth>().is_err());
    assert!("2147483647-12".parse::<YearMonth>().is_err());

    let last = YearMonth::new(chrono::NaiveDate::MAX.year(), 12).unwrap();
    let series = SeriesGenerator::new(Category::Tariff, 15.0)
        .with_as_of(last)
        .generate()
        .unwrap();
    assert_eq!(series.len(), HISTORY_MONTHS);
}
