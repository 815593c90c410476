//! Threshold alert rules over catalogue cards.
//!
//! Rules only decide whether they fire; delivery over the listed channels
//! happens elsewhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::metric::{MetricCard, RiskCounts};
use crate::risk::{BadgeVariant, RiskLevel};

/// Delivery channel tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertChannel {
    /// E-mail
    Email,
    /// Text message
    Sms,
    /// Mobile push notification
    Push,
}

impl AlertChannel {
    /// Lowercase tag.
    pub fn tag(&self) -> &'static str {
        match self {
            AlertChannel::Email => "email",
            AlertChannel::Sms => "sms",
            AlertChannel::Push => "push",
        }
    }
}

impl fmt::Display for AlertChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Condition checked against a card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "threshold", rename_all = "snake_case")]
pub enum AlertCondition {
    /// Value strictly above the threshold
    Above(f64),
    /// Value strictly below the threshold
    Below(f64),
    /// Percent change rose strictly above the threshold
    ChangePercentAbove(f64),
    /// Magnitude of the percent change strictly above the threshold, either way
    AbsChangePercentAbove(f64),
    /// Any non-zero change
    AnyChange,
}

impl AlertCondition {
    /// Whether `card` meets the condition.
    ///
    /// A card without a quoted percent change never meets either percent
    /// condition.
    pub fn is_met(&self, card: &MetricCard) -> bool {
        match *self {
            AlertCondition::Above(threshold) => card.value > threshold,
            AlertCondition::Below(threshold) => card.value < threshold,
            AlertCondition::ChangePercentAbove(threshold) => {
                card.change_percent.map_or(false, |percent| percent > threshold)
            }
            AlertCondition::AbsChangePercentAbove(threshold) => card
                .change_percent
                .map_or(false, |percent| percent.abs() > threshold),
            AlertCondition::AnyChange => card.change != 0.0,
        }
    }
}

impl fmt::Display for AlertCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertCondition::Above(t) => write!(f, "value > {}", t),
            AlertCondition::Below(t) => write!(f, "value < {}", t),
            AlertCondition::ChangePercentAbove(t) => write!(f, "change > +{}%", t),
            AlertCondition::AbsChangePercentAbove(t) => write!(f, "|change| > {}%", t),
            AlertCondition::AnyChange => f.write_str("any change"),
        }
    }
}

/// A named alert on one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRule {
    /// Rule id
    pub id: String,
    /// Display name
    pub name: String,
    /// Card the rule watches
    pub metric_id: String,
    /// Firing condition
    pub condition: AlertCondition,
    /// Priority of the resulting alert
    pub priority: RiskLevel,
    /// Where the alert would be sent
    pub channels: Vec<AlertChannel>,
    /// Disabled rules never fire
    pub enabled: bool,
}

impl AlertRule {
    /// Create an enabled rule with no channels.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        metric_id: impl Into<String>,
        condition: AlertCondition,
        priority: RiskLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            metric_id: metric_id.into(),
            condition,
            priority,
            channels: Vec::new(),
            enabled: true,
        }
    }

    /// Set the delivery channels.
    pub fn with_channels(mut self, channels: impl IntoIterator<Item = AlertChannel>) -> Self {
        self.channels = channels.into_iter().collect();
        self
    }

    /// Enable or disable the rule.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Priority badge; low priority uses the outlined style.
    pub fn priority_badge(&self) -> BadgeVariant {
        match self.priority {
            RiskLevel::High => BadgeVariant::Destructive,
            RiskLevel::Medium => BadgeVariant::Secondary,
            RiskLevel::Low => BadgeVariant::Outline,
        }
    }

    /// Check the rule against `card`.
    pub fn evaluate(&self, card: &MetricCard) -> Option<TriggeredAlert> {
        if !self.enabled || !self.condition.is_met(card) {
            return None;
        }
        Some(TriggeredAlert {
            rule_id: self.id.clone(),
            rule_name: self.name.clone(),
            metric_id: card.id.clone(),
            value: card.value,
            change: card.change,
            priority: self.priority,
            channels: self.channels.clone(),
        })
    }

    /// The four sample rules shown on the dashboard.
    pub fn sample_rules() -> Vec<AlertRule> {
        vec![
            AlertRule::new(
                "1",
                "Raw material price surge",
                "copper",
                AlertCondition::ChangePercentAbove(15.0),
                RiskLevel::High,
            )
            .with_channels([AlertChannel::Email, AlertChannel::Sms]),
            AlertRule::new(
                "2",
                "FX volatility rising",
                "usd_krw",
                AlertCondition::AbsChangePercentAbove(2.0),
                RiskLevel::Medium,
            )
            .with_channels([AlertChannel::Email]),
            AlertRule::new(
                "3",
                "Freight rate increase",
                "shanghai_la",
                AlertCondition::ChangePercentAbove(10.0),
                RiskLevel::Medium,
            )
            .with_channels([AlertChannel::Email])
            .with_enabled(false),
            AlertRule::new(
                "4",
                "Korea tariff change",
                "tariff_korea",
                AlertCondition::AnyChange,
                RiskLevel::High,
            )
            .with_channels([AlertChannel::Email, AlertChannel::Sms, AlertChannel::Push]),
        ]
    }
}

/// A rule that fired, with the card values it fired on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggeredAlert {
    /// Rule id
    pub rule_id: String,
    /// Rule name
    pub rule_name: String,
    /// Card id
    pub metric_id: String,
    /// Card value at evaluation
    pub value: f64,
    /// Card change at evaluation
    pub change: f64,
    /// Alert priority
    pub priority: RiskLevel,
    /// Delivery channels
    pub channels: Vec<AlertChannel>,
}

/// Evaluate every rule against the catalogue.
///
/// Fails on the first rule whose metric id is not in the catalogue, even
/// when that rule is disabled.
pub fn evaluate_all(rules: &[AlertRule], catalogue: &Catalogue) -> Result<Vec<TriggeredAlert>> {
    let mut triggered = Vec::new();
    for rule in rules {
        let card = catalogue.card(&rule.metric_id)?;
        match rule.evaluate(card) {
            Some(alert) => {
                info!(
                    rule = %rule.id,
                    metric = %card.id,
                    priority = %rule.priority,
                    "Alert triggered"
                );
                triggered.push(alert);
            }
            None => debug!(rule = %rule.id, enabled = rule.enabled, "Alert not triggered"),
        }
    }
    Ok(triggered)
}

/// Rule and alert tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStatistics {
    /// Rules configured
    pub total_rules: usize,
    /// Rules enabled
    pub enabled_rules: usize,
    /// Triggered alerts per priority
    pub triggered: RiskCounts,
}

impl AlertStatistics {
    /// Tally `rules` and the alerts they produced.
    pub fn collect(rules: &[AlertRule], alerts: &[TriggeredAlert]) -> Self {
        let mut triggered = RiskCounts::default();
        for alert in alerts {
            triggered.record(alert.priority);
        }
        Self {
            total_rules: rules.len(),
            enabled_rules: rules.iter().filter(|r| r.enabled).count(),
            triggered,
        }
    }

    /// Total alerts triggered.
    pub fn triggered_total(&self) -> usize {
        self.triggered.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use series_core::Category;

    fn card(value: f64, change: f64) -> MetricCard {
        MetricCard::new("x", "X", value, Category::Commodity, RiskLevel::Low).with_change(change)
    }

    #[test]
    fn test_conditions() {
        let c = card(10.0, -0.5).with_change_percent(-4.8);
        assert!(AlertCondition::Above(9.9).is_met(&c));
        assert!(!AlertCondition::Above(10.0).is_met(&c));
        assert!(AlertCondition::Below(10.5).is_met(&c));
        assert!(AlertCondition::AbsChangePercentAbove(4.0).is_met(&c));
        assert!(!AlertCondition::AbsChangePercentAbove(5.0).is_met(&c));
        assert!(!AlertCondition::ChangePercentAbove(4.0).is_met(&c));
        assert!(AlertCondition::AnyChange.is_met(&c));
        assert!(!AlertCondition::AnyChange.is_met(&card(10.0, 0.0)));
    }

    #[test]
    fn test_percent_condition_needs_quote() {
        assert!(!AlertCondition::ChangePercentAbove(0.0).is_met(&card(1.0, 5.0)));
        assert!(!AlertCondition::AbsChangePercentAbove(0.0).is_met(&card(1.0, 5.0)));
    }

    #[test]
    fn test_surge_rule_ignores_falls() {
        let rule = &AlertRule::sample_rules()[0];
        assert_eq!(rule.metric_id, "copper");

        let falling = card(3.6, -0.6).with_change_percent(-16.0);
        assert!(rule.evaluate(&falling).is_none());

        let rising = card(4.9, 0.7).with_change_percent(16.0);
        assert!(rule.evaluate(&rising).is_some());
    }

    #[test]
    fn test_volatility_rule_fires_both_ways() {
        let rule = &AlertRule::sample_rules()[1];
        assert_eq!(rule.metric_id, "usd_krw");
        assert!(rule.evaluate(&card(1350.0, -40.0).with_change_percent(-2.9)).is_some());
        assert!(rule.evaluate(&card(1430.0, 40.0).with_change_percent(2.9)).is_some());
        assert!(rule.evaluate(&card(1391.0, 0.3).with_change_percent(0.02)).is_none());
    }

    #[test]
    fn test_disabled_rule_never_fires() {
        let rule = AlertRule::new("r", "r", "x", AlertCondition::AnyChange, RiskLevel::High)
            .with_enabled(false);
        assert!(rule.evaluate(&card(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_sample_rules_against_catalogue() {
        let rules = AlertRule::sample_rules();
        let alerts = evaluate_all(&rules, &Catalogue::sample()).unwrap();

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].rule_id, "4");
        assert_eq!(alerts[0].metric_id, "tariff_korea");
        assert_eq!(alerts[0].change, -10.0);
        assert_eq!(alerts[0].channels.len(), 3);

        let stats = AlertStatistics::collect(&rules, &alerts);
        assert_eq!(stats.total_rules, 4);
        assert_eq!(stats.enabled_rules, 3);
        assert_eq!(stats.triggered.high, 1);
        assert_eq!(stats.triggered_total(), 1);
    }

    #[test]
    fn test_unknown_metric_is_an_error() {
        let rules = vec![AlertRule::new(
            "z",
            "Zinc",
            "zinc",
            AlertCondition::Above(1.0),
            RiskLevel::Low,
        )];
        assert_eq!(
            evaluate_all(&rules, &Catalogue::sample()),
            Err(DashboardError::UnknownMetric("zinc".to_string()))
        );
    }

    #[test]
    fn test_priority_badge() {
        let rule = AlertRule::new("r", "r", "x", AlertCondition::AnyChange, RiskLevel::Low);
        assert_eq!(rule.priority_badge(), BadgeVariant::Outline);
    }

    #[test]
    fn test_condition_display() {
        assert_eq!(AlertCondition::ChangePercentAbove(15.0).to_string(), "change > +15%");
        assert_eq!(AlertCondition::AbsChangePercentAbove(2.0).to_string(), "|change| > 2%");
        assert_eq!(AlertCondition::AnyChange.to_string(), "any change");
    }
}
