//! Metric cards and the blocks that group them.

use serde::{Deserialize, Serialize};
use series_core::Category;
use std::collections::BTreeMap;

use crate::risk::{format_change, ChangeDirection, RiskLevel};

/// Progress of a metric towards a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Current level
    pub current: f64,
    /// Target level
    pub target: f64,
}

/// One metric shown on the dashboard.
///
/// # Examples
///
/// ```
/// use risk_dashboard::metric::MetricCard;
/// use risk_dashboard::risk::{ChangeDirection, RiskLevel};
/// use series_core::Category;
///
/// let copper = MetricCard::new("copper", "Copper", 4.23, Category::Commodity, RiskLevel::High)
///     .with_unit("$/lb")
///     .with_change(0.15)
///     .with_change_percent(3.68);
///
/// assert_eq!(copper.direction, ChangeDirection::Increase);
/// assert_eq!(copper.display_value(), "4.23 $/lb");
/// assert_eq!(copper.change_label(), "+0.15 (+3.68%)");
/// assert!(copper.requires_attention());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    /// Stable lookup key
    pub id: String,
    /// Display title
    pub title: String,
    /// Current value
    pub value: f64,
    /// Unit suffix, possibly empty
    pub unit: String,
    /// Absolute change since the previous period
    pub change: f64,
    /// Relative change in percent, when the source quotes one
    pub change_percent: Option<f64>,
    /// Direction shown next to the change
    pub direction: ChangeDirection,
    /// Risk classification
    pub risk_level: RiskLevel,
    /// Short explanatory note
    pub description: Option<String>,
    /// Formula family for the detail chart
    pub category: Category,
    /// Optional progress bar
    pub progress: Option<Progress>,
    /// Source-specific details such as transit time or market cap
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl MetricCard {
    /// Create a card with no change and no unit.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        value: f64,
        category: Category,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            value,
            unit: String::new(),
            change: 0.0,
            change_percent: None,
            direction: ChangeDirection::Neutral,
            risk_level,
            description: None,
            category,
            progress: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Set the unit suffix.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the absolute change; the direction follows its sign.
    pub fn with_change(mut self, change: f64) -> Self {
        self.change = change;
        self.direction = ChangeDirection::from_change(change);
        self
    }

    /// Set the relative change in percent.
    pub fn with_change_percent(mut self, percent: f64) -> Self {
        self.change_percent = Some(percent);
        self
    }

    /// Override the direction, for changes too small to call.
    pub fn with_direction(mut self, direction: ChangeDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a progress bar.
    pub fn with_progress(mut self, current: f64, target: f64) -> Self {
        self.progress = Some(Progress { current, target });
        self
    }

    /// Attach a labelled detail; a repeated key replaces the earlier value.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Detail by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Details as `key: value` pairs joined by `sep`, in key order.
    pub fn attributes_label(&self, sep: &str) -> String {
        self.attributes
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join(sep)
    }

    /// Value with its unit.
    pub fn display_value(&self) -> String {
        if self.unit.is_empty() {
            format!("{}", self.value)
        } else if self.unit.starts_with('%') {
            format!("{}{}", self.value, self.unit)
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }

    /// Signed change, followed by the signed percentage when known.
    pub fn change_label(&self) -> String {
        match self.change_percent {
            Some(percent) => format!(
                "{} ({}{:.2}%)",
                format_change(self.change, ""),
                if percent > 0.0 { "+" } else { "" },
                percent
            ),
            None => format_change(self.change, ""),
        }
    }

    /// Progress as a percentage of target.
    ///
    /// `None` without a progress bar or with a zero target.
    pub fn progress_percent(&self) -> Option<f64> {
        self.progress
            .filter(|p| p.target != 0.0)
            .map(|p| p.current / p.target * 100.0)
    }

    /// Whether the card shows an attention marker.
    pub fn requires_attention(&self) -> bool {
        self.risk_level.requires_attention()
    }
}

/// Tally of cards per risk level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCounts {
    /// High-risk cards
    pub high: usize,
    /// Medium-risk cards
    pub medium: usize,
    /// Low-risk cards
    pub low: usize,
}

impl RiskCounts {
    /// Tally the given cards.
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a MetricCard>) -> Self {
        let mut counts = Self::default();
        for card in cards {
            counts.record(card.risk_level);
        }
        counts
    }

    /// Count one more item at `level`.
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    /// Count at `level`.
    pub fn at(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    /// Total items counted.
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// Secondary figure shown beneath a block's cards.
///
/// Values are preformatted text; some are qualitative ("Moderate").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockIndicator {
    /// Indicator name
    pub title: String,
    /// Display value
    pub value: String,
    /// Basis or comparison period
    pub description: String,
    /// Recent trend
    pub trend: ChangeDirection,
}

impl BlockIndicator {
    /// Create an indicator with no trend.
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            description: description.into(),
            trend: ChangeDirection::Neutral,
        }
    }

    /// Set the trend.
    pub fn with_trend(mut self, trend: ChangeDirection) -> Self {
        self.trend = trend;
        self
    }
}

/// A titled group of cards from one data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardBlock {
    /// Stable lookup key
    pub id: String,
    /// Display title
    pub title: String,
    /// Subtitle
    pub description: String,
    /// Attribution line
    pub source: String,
    /// Cards in display order
    pub cards: Vec<MetricCard>,
    /// Secondary indicators in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indicators: Vec<BlockIndicator>,
}

impl DashboardBlock {
    /// Create an empty block.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            source: source.into(),
            cards: Vec::new(),
            indicators: Vec::new(),
        }
    }

    /// Append a card.
    pub fn with_card(mut self, card: MetricCard) -> Self {
        self.cards.push(card);
        self
    }

    /// Append a secondary indicator.
    pub fn with_indicator(mut self, indicator: BlockIndicator) -> Self {
        self.indicators.push(indicator);
        self
    }

    /// Per-level tally of this block's cards.
    pub fn risk_counts(&self) -> RiskCounts {
        RiskCounts::from_cards(&self.cards)
    }

    /// Card by id.
    pub fn card(&self, id: &str) -> Option<&MetricCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Cards at one risk level, in display order.
    pub fn cards_at(&self, level: RiskLevel) -> impl Iterator<Item = &MetricCard> {
        self.cards.iter().filter(move |c| c.risk_level == level)
    }
}
