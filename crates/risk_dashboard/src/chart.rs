//! Detail chart behind a metric card.
//!
//! A [`ChartRequest`] carries the card context; [`ChartDetail::build`]
//! generates five years of synthetic history around the card's current
//! value and bundles it with the yearly view and summary statistics.

use rand::Rng;
use serde::Serialize;
use series_core::{
    Category, SeriesGenerator, SeriesPoint, SummaryStatistics, YearMonth, YearlyAggregate,
};
use tracing::debug;

use crate::error::Result;
use crate::metric::MetricCard;
use crate::risk::{format_change, ChangeDirection, RiskLevel};

/// Context needed to draw a detail chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRequest {
    /// Chart title
    pub title: String,
    /// Formula family
    pub category: Category,
    /// Baseline for the synthetic history
    pub current_value: f64,
    /// Unit suffix
    pub unit: String,
    /// Risk level, drives the accent colour
    pub risk_level: RiskLevel,
    /// Latest change amount
    pub change: f64,
    /// Latest change direction
    pub direction: ChangeDirection,
}

impl ChartRequest {
    /// Request for a card's detail chart.
    pub fn from_card(card: &MetricCard) -> Self {
        Self {
            title: card.title.clone(),
            category: card.category,
            current_value: card.value,
            unit: card.unit.clone(),
            risk_level: card.risk_level,
            change: card.change,
            direction: card.direction,
        }
    }
}

/// Generated chart with its derived views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDetail {
    /// Chart title
    pub title: String,
    /// Formula family
    pub category: Category,
    /// Value the history is centred on
    pub current_value: f64,
    /// Unit suffix
    pub unit: String,
    /// Signed change with unit
    pub change_label: String,
    /// Latest change direction
    pub direction: ChangeDirection,
    /// Risk level
    pub risk_level: RiskLevel,
    /// Stroke colour for the risk level
    pub accent_colour: &'static str,
    /// Sixty monthly points, oldest first
    pub monthly: Vec<SeriesPoint>,
    /// Yearly averages, oldest first
    pub yearly: Vec<YearlyAggregate>,
    /// Statistics over the monthly values
    pub summary: SummaryStatistics,
}

impl ChartDetail {
    /// Generate the chart for `request`.
    ///
    /// `as_of` fixes the month the window ends before; `None` uses the
    /// current month. Fails with [`DashboardError::Series`] when the
    /// window runs past the supported calendar.
    ///
    /// [`DashboardError::Series`]: crate::error::DashboardError::Series
    pub fn build<R: Rng + ?Sized>(
        request: &ChartRequest,
        as_of: Option<YearMonth>,
        rng: &mut R,
    ) -> Result<Self> {
        let mut generator = SeriesGenerator::new(request.category, request.current_value);
        if let Some(as_of) = as_of {
            generator = generator.with_as_of(as_of);
        }
        let series = generator.generate_with(rng)?;
        debug!(title = %request.title, points = series.len(), "Built chart detail");

        Ok(Self {
            title: request.title.clone(),
            category: request.category,
            current_value: request.current_value,
            unit: request.unit.clone(),
            change_label: format_change(request.change, &request.unit),
            direction: request.direction,
            risk_level: request.risk_level,
            accent_colour: request.risk_level.accent_colour(),
            yearly: series.yearly_averages(),
            summary: series.summary(),
            monthly: series.points().to_vec(),
        })
    }

    /// First and last period labels.
    pub fn window(&self) -> Option<(&str, &str)> {
        let first = self.monthly.first()?;
        let last = self.monthly.last()?;
        Some((first.period.as_str(), last.period.as_str()))
    }
}
