//! Preset stress scenarios.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::risk::{format_change, RiskLevel};

/// Estimated impact of one stress scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Scenario name
    pub scenario: String,
    /// Impact on export margin, in percent
    pub impact: f64,
    /// Risk level
    pub risk_level: RiskLevel,
    /// One-line explanation
    pub description: String,
}

impl ScenarioResult {
    /// Create a scenario result.
    pub fn new(
        scenario: impl Into<String>,
        impact: f64,
        risk_level: RiskLevel,
        description: impl Into<String>,
    ) -> Self {
        Self {
            scenario: scenario.into(),
            impact,
            risk_level,
            description: description.into(),
        }
    }

    /// Signed impact with a percent sign.
    pub fn impact_label(&self) -> String {
        format_change(self.impact, "%")
    }
}

/// Scenario results with an overall reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    /// Results in display order
    pub results: Vec<ScenarioResult>,
    /// Overall reading
    pub summary: String,
}

impl ScenarioSet {
    /// The preset scenarios shown on the dashboard.
    pub fn presets() -> Self {
        Self {
            results: vec![
                ScenarioResult::new(
                    "KRW/USD +5%",
                    -12.5,
                    RiskLevel::High,
                    "Export margin expected to fall 12.5%",
                ),
                ScenarioResult::new(
                    "Freight +30%",
                    -8.2,
                    RiskLevel::Medium,
                    "Total cost up 8.2%",
                ),
                ScenarioResult::new(
                    "US tariff +10pp",
                    -15.8,
                    RiskLevel::High,
                    "Competitiveness down 15.8%",
                ),
                ScenarioResult::new(
                    "Raw materials +20%",
                    -6.7,
                    RiskLevel::Medium,
                    "Unit cost up 6.7%",
                ),
            ],
            summary: "Exchange rate and tariff moves have the largest impact and call for a \
                      hedging strategy; freight and raw material increases remain manageable."
                .to_string(),
        }
    }

    /// Results ordered by absolute impact, largest first.
    pub fn ranked_by_impact(&self) -> Vec<&ScenarioResult> {
        let mut ranked: Vec<_> = self.results.iter().collect();
        ranked.sort_by(|a, b| {
            b.impact
                .abs()
                .partial_cmp(&a.impact.abs())
                .unwrap_or(Ordering::Equal)
        });
        ranked
    }

    /// High-risk scenarios, in display order.
    pub fn dominant_risks(&self) -> Vec<&ScenarioResult> {
        self.results
            .iter()
            .filter(|r| r.risk_level == RiskLevel::High)
            .collect()
    }

    /// Scenario with the largest absolute impact.
    pub fn worst(&self) -> Option<&ScenarioResult> {
        self.ranked_by_impact().into_iter().next()
    }
}
