//! Risk level and change direction presentation.
//!
//! Every card, scenario and alert carries a [`RiskLevel`]; the helpers here
//! decide the badge, accent colour and attention marker for each level,
//! and how a signed change amount is shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Accent colour for anything without a risk level.
pub const NEUTRAL_ACCENT: &str = "#6b7280";

/// Three-step risk classification.
///
/// Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl RiskLevel {
    /// All levels, highest first.
    pub const DESCENDING: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    /// Lowercase tag.
    pub fn tag(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Badge style for this level.
    pub fn badge(&self) -> BadgeVariant {
        match self {
            RiskLevel::High => BadgeVariant::Destructive,
            RiskLevel::Medium => BadgeVariant::Secondary,
            RiskLevel::Low => BadgeVariant::Default,
        }
    }

    /// Hex colour used for chart strokes and fills.
    pub fn accent_colour(&self) -> &'static str {
        match self {
            RiskLevel::High => "#ef4444",
            RiskLevel::Medium => "#f59e0b",
            RiskLevel::Low => "#10b981",
        }
    }

    /// Whether the card shows an attention marker.
    pub fn requires_attention(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(DashboardError::InvalidRiskLevel(s.to_string())),
        }
    }
}

/// Badge styles available to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    /// Solid primary badge
    Default,
    /// Muted badge
    Secondary,
    /// Warning-red badge
    Destructive,
    /// Outlined badge
    Outline,
}

/// Direction of the latest change.
///
/// For an exposure dashboard a rise is the adverse move, so increases are
/// drawn red and decreases green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    /// Value went up
    Increase,
    /// Value went down
    Decrease,
    /// No material change
    Neutral,
}

impl ChangeDirection {
    /// Direction from the sign of `change`.
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            ChangeDirection::Increase
        } else if change < 0.0 {
            ChangeDirection::Decrease
        } else {
            ChangeDirection::Neutral
        }
    }

    /// Hex colour for the change indicator.
    pub fn accent_colour(&self) -> &'static str {
        match self {
            ChangeDirection::Increase => "#ef4444",
            ChangeDirection::Decrease => "#22c55e",
            ChangeDirection::Neutral => NEUTRAL_ACCENT,
        }
    }

    /// Arrow glyph for terminal output.
    pub fn arrow(&self) -> &'static str {
        match self {
            ChangeDirection::Increase => "▲",
            ChangeDirection::Decrease => "▼",
            ChangeDirection::Neutral => "–",
        }
    }
}

/// Formats a signed change with its unit, prefixing `+` on rises.
///
/// Percent-style units attach directly; other units follow a space.
///
/// # Examples
///
/// ```
/// use risk_dashboard::risk::format_change;
///
/// assert_eq!(format_change(2.8, "%"), "+2.8%");
/// assert_eq!(format_change(-45.2, ""), "-45.2");
/// assert_eq!(format_change(0.0, "%"), "0%");
/// ```
pub fn format_change(change: f64, unit: &str) -> String {
    let sign = if change > 0.0 { "+" } else { "" };
    if unit.is_empty() || unit.starts_with('%') {
        format!("{}{}{}", sign, change, unit)
    } else {
        format!("{}{} {}", sign, change, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges() {
        assert_eq!(RiskLevel::High.badge(), BadgeVariant::Destructive);
        assert_eq!(RiskLevel::Medium.badge(), BadgeVariant::Secondary);
        assert_eq!(RiskLevel::Low.badge(), BadgeVariant::Default);
    }

    #[test]
    fn test_accent_colours() {
        assert_eq!(RiskLevel::High.accent_colour(), "#ef4444");
        assert_eq!(RiskLevel::Medium.accent_colour(), "#f59e0b");
        assert_eq!(RiskLevel::Low.accent_colour(), "#10b981");
    }

    #[test]
    fn test_only_high_requires_attention() {
        assert!(RiskLevel::High.requires_attention());
        assert!(!RiskLevel::Medium.requires_attention());
        assert!(!RiskLevel::Low.requires_attention());
    }

    #[test]
    fn test_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_parse() {
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert_eq!(" low ".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert!(matches!(
            "severe".parse::<RiskLevel>(),
            Err(DashboardError::InvalidRiskLevel(_))
        ));
    }

    #[test]
    fn test_direction_from_change() {
        assert_eq!(ChangeDirection::from_change(2.34), ChangeDirection::Increase);
        assert_eq!(ChangeDirection::from_change(-45.2), ChangeDirection::Decrease);
        assert_eq!(ChangeDirection::from_change(0.0), ChangeDirection::Neutral);
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(0.15, "$/lb"), "+0.15 $/lb");
        assert_eq!(format_change(-0.25, "%p"), "-0.25%p");
    }

    #[test]
    fn test_serde_tags() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
        assert_eq!(
            serde_json::to_string(&BadgeVariant::Destructive).unwrap(),
            "\"destructive\""
        );
    }
}
