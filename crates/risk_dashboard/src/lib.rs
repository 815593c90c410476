//! # Risk Dashboard Model
//!
//! Data model behind the export-risk monitoring dashboard: the sample
//! metric cards, how risk and change are presented, the detail chart
//! behind each card, alert rules and preset scenarios.
//!
//! ## Modules
//!
//! - [`risk`]: Risk levels, badges, accent colours and change direction
//! - [`metric`]: Metric cards and dashboard blocks
//! - [`catalogue`]: The sample catalogue of blocks shown on the dashboard
//! - [`chart`]: Detail chart composition on top of `series_core`
//! - [`alerts`]: Alert rules evaluated against metric cards
//! - [`scenario`]: Preset stress scenario results
//! - [`error`]: Error types

pub mod alerts;
pub mod catalogue;
pub mod chart;
pub mod error;
pub mod metric;
pub mod risk;
pub mod scenario;

pub use error::{DashboardError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::alerts::{
        evaluate_all, AlertChannel, AlertCondition, AlertRule, AlertStatistics, TriggeredAlert,
    };
    pub use crate::catalogue::Catalogue;
    pub use crate::chart::{ChartDetail, ChartRequest};
    pub use crate::error::{DashboardError, Result};
    pub use crate::metric::{BlockIndicator, DashboardBlock, MetricCard, RiskCounts};
    pub use crate::risk::{BadgeVariant, ChangeDirection, RiskLevel};
    pub use crate::scenario::{ScenarioResult, ScenarioSet};
    pub use series_core::{
        Category, HistoricalSeries, SummaryStatistics, YearMonth, YearlyAggregate,
    };
}
