//! # series_core: Synthetic History for Risk Dashboards
//!
//! ## Foundation Role
//!
//! series_core is the bottom layer of the riskboard workspace, providing:
//! - Calendar month arithmetic: `YearMonth` (`types::period`)
//! - Formula selection: `Category` (`types::category`)
//! - Error types: `SeriesError` (`types::error`)
//! - Seeded random source: `SeriesRng` (`rng`)
//! - Five-year monthly history generation: `SeriesGenerator` (`generator`)
//! - Yearly aggregation and summary statistics (`series`, `math`)
//!
//! Nothing here depends on other workspace crates. Generation is synchronous
//! and allocation-light: one `Vec` of 60 points per call.
//!
//! ## Usage Examples
//!
//! ```rust
//! use series_core::generator::SeriesGenerator;
//! use series_core::rng::SeriesRng;
//! use series_core::types::{Category, YearMonth};
//!
//! let as_of = YearMonth::new(2025, 3).unwrap();
//! let mut rng = SeriesRng::from_seed(7);
//!
//! let series = SeriesGenerator::new(Category::Tariff, 15.0)
//!     .with_as_of(as_of)
//!     .generate_with(&mut rng)
//!     .unwrap();
//!
//! assert_eq!(series.len(), 60);
//! assert_eq!(series.points()[50].value, 23.0);
//! assert_eq!(series.points()[59].value, 15.0);
//!
//! let stats = series.summary();
//! assert!(stats.std_dev >= 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for points, aggregates and statistics

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod generator;
pub mod math;
pub mod rng;
pub mod series;
pub mod types;

pub use generator::{SeriesGenerator, HISTORY_MONTHS};
pub use math::statistics::SummaryStatistics;
pub use rng::SeriesRng;
pub use series::{HistoricalSeries, SeriesPoint, YearlyAggregate};
pub use types::{Category, SeriesError, YearMonth};
