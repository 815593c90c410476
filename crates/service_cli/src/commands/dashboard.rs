//! Dashboard command implementation
//!
//! Prints catalogue blocks, optionally narrowed to one block or one risk level.

use risk_dashboard::prelude::*;
use std::fmt::Write;
use tracing::info;

use super::RunContext;
use crate::output::{to_json, OutputFormat, Table};
use crate::Result;

/// Blocks to show, with cards filtered to `risk` when given.
///
/// Blocks left without cards by the risk filter are dropped.
pub fn select(
    catalogue: &Catalogue,
    block: Option<&str>,
    risk: Option<RiskLevel>,
) -> Result<Vec<DashboardBlock>> {
    let blocks: Vec<DashboardBlock> = match block {
        Some(id) => vec![catalogue.block(id)?.clone()],
        None => catalogue.blocks().to_vec(),
    };

    let Some(level) = risk else {
        return Ok(blocks);
    };

    Ok(blocks
        .into_iter()
        .filter_map(|mut b| {
            b.cards.retain(|c| c.risk_level == level);
            (!b.cards.is_empty()).then_some(b)
        })
        .collect())
}

/// Render the dashboard command output
pub fn render(block: Option<&str>, risk: Option<RiskLevel>, ctx: &RunContext) -> Result<String> {
    let blocks = select(&Catalogue::sample(), block, risk)?;

    match ctx.format {
        OutputFormat::Json => to_json(&blocks),
        OutputFormat::Table => {
            let mut out = String::new();
            for block in &blocks {
                let counts = block.risk_counts();
                writeln!(out, "{} - {}", block.title, block.description)?;
                writeln!(
                    out,
                    "High {}  Medium {}  Low {}  (source: {})",
                    counts.high, counts.medium, counts.low, block.source
                )?;
                write!(out, "{}", cards_table(&block.cards))?;
                if !block.indicators.is_empty() {
                    write!(out, "{}", indicators_table(&block.indicators))?;
                }
            }
            Ok(out)
        }
    }
}

/// Run the dashboard command
pub fn run(block: Option<&str>, risk: Option<RiskLevel>, ctx: &RunContext) -> Result<()> {
    info!("Rendering dashboard...");
    info!("  Block: {}", block.unwrap_or("all"));
    if let Some(level) = risk {
        info!("  Risk: {}", level);
    }

    print!("{}", render(block, risk, ctx)?);
    Ok(())
}

fn cards_table(cards: &[MetricCard]) -> Table {
    let with_details = cards.iter().any(|c| !c.attributes.is_empty());
    let mut headers = vec!["Id", "Metric", "Value", "Change", "Risk"];
    if with_details {
        headers.push("Details");
    }

    let mut table = Table::new(headers);
    for card in cards {
        let risk = if card.requires_attention() {
            format!("{} !", card.risk_level)
        } else {
            card.risk_level.to_string()
        };
        let mut row = vec![
            card.id.clone(),
            card.title.clone(),
            card.display_value(),
            format!("{} {}", card.direction.arrow(), card.change_label()),
            risk,
        ];
        if with_details {
            row.push(card.attributes_label("; "));
        }
        table.row(row);
    }
    table
}

fn indicators_table(indicators: &[BlockIndicator]) -> Table {
    let mut table = Table::new(["Indicator", "Value", "Basis", "Trend"]);
    for indicator in indicators {
        table.row([
            indicator.title.clone(),
            indicator.value.clone(),
            indicator.description.clone(),
            indicator.trend.arrow().to_string(),
        ]);
    }
    table
}
