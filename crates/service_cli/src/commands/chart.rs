//! Chart command implementation
//!
//! Shows the detail chart behind one catalogue card.

use risk_dashboard::prelude::*;
use std::fmt::Write;
use tracing::info;

use super::series::{monthly_table, summary_table, yearly_table};
use super::RunContext;
use crate::output::{to_json, OutputFormat};
use crate::Result;

/// Build the chart for `metric_id` from the sample catalogue.
pub fn build(metric_id: &str, ctx: &RunContext) -> Result<ChartDetail> {
    let catalogue = Catalogue::sample();
    let card = catalogue.card(metric_id)?;
    let request = ChartRequest::from_card(card);
    Ok(ChartDetail::build(&request, ctx.as_of, &mut ctx.rng())?)
}

/// Render the chart command output
pub fn render(metric_id: &str, ctx: &RunContext) -> Result<String> {
    let detail = build(metric_id, ctx)?;

    match ctx.format {
        OutputFormat::Json => to_json(&detail),
        OutputFormat::Table => {
            let mut out = String::new();
            writeln!(
                out,
                "{} [{}]  {} {}  {} {}",
                detail.title,
                detail.risk_level,
                detail.current_value,
                detail.unit,
                detail.direction.arrow(),
                detail.change_label
            )?;
            if let Some((first, last)) = detail.window() {
                writeln!(out, "History {} to {} ({})", first, last, detail.category)?;
            }
            write!(out, "{}", monthly_table(&detail.monthly))?;
            write!(out, "{}", yearly_table(&detail.yearly))?;
            write!(out, "{}", summary_table(&detail.summary))?;
            Ok(out)
        }
    }
}

/// Run the chart command
pub fn run(metric_id: &str, ctx: &RunContext) -> Result<()> {
    info!("Building chart for {}", metric_id);
    print!("{}", render(metric_id, ctx)?);
    Ok(())
}
