//! Alerts command implementation
//!
//! Evaluates the sample alert rules against the sample catalogue.

use risk_dashboard::prelude::*;
use serde::Serialize;
use std::fmt::Write;
use tracing::info;

use super::RunContext;
use crate::output::{to_json, OutputFormat, Table};
use crate::Result;

/// JSON shape of the alerts command.
#[derive(Debug, Serialize)]
pub struct AlertReport {
    /// Configured rules
    pub rules: Vec<AlertRule>,
    /// Alerts that fired
    pub triggered: Vec<TriggeredAlert>,
    /// Tallies
    pub statistics: AlertStatistics,
}

/// Evaluate the sample rules.
pub fn build() -> Result<AlertReport> {
    let rules = AlertRule::sample_rules();
    let triggered = evaluate_all(&rules, &Catalogue::sample())?;
    let statistics = AlertStatistics::collect(&rules, &triggered);
    Ok(AlertReport {
        rules,
        triggered,
        statistics,
    })
}

/// Render the alerts command output
pub fn render(ctx: &RunContext) -> Result<String> {
    let report = build()?;

    match ctx.format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Table => {
            let mut out = String::new();

            let mut rules = Table::new([
                "Id",
                "Rule",
                "Metric",
                "Condition",
                "Priority",
                "Channels",
                "On",
            ]);
            for rule in &report.rules {
                let channels: Vec<&str> = rule.channels.iter().map(AlertChannel::tag).collect();
                rules.row([
                    rule.id.clone(),
                    rule.name.clone(),
                    rule.metric_id.clone(),
                    rule.condition.to_string(),
                    rule.priority.to_string(),
                    channels.join(","),
                    if rule.enabled { "yes" } else { "no" }.to_string(),
                ]);
            }
            write!(out, "{}", rules)?;

            let mut fired = Table::new(["Rule", "Metric", "Value", "Change", "Priority"]);
            for alert in &report.triggered {
                fired.row([
                    alert.rule_name.clone(),
                    alert.metric_id.clone(),
                    alert.value.to_string(),
                    alert.change.to_string(),
                    alert.priority.to_string(),
                ]);
            }
            write!(out, "{}", fired)?;

            let stats = &report.statistics;
            writeln!(
                out,
                "{} of {} rules enabled; {} triggered (high {}, medium {}, low {})",
                stats.enabled_rules,
                stats.total_rules,
                stats.triggered_total(),
                stats.triggered.high,
                stats.triggered.medium,
                stats.triggered.low
            )?;
            Ok(out)
        }
    }
}

/// Run the alerts command
pub fn run(ctx: &RunContext) -> Result<()> {
    info!("Evaluating alert rules...");
    print!("{}", render(ctx)?);
    Ok(())
}
