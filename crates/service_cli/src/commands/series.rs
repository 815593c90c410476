//! Series command implementation
//!
//! Generates five years of synthetic history for a category and baseline.

use serde::Serialize;
use series_core::{Category, SeriesGenerator, SeriesPoint, SummaryStatistics, YearlyAggregate};
use std::fmt::Write;
use tracing::{info, warn};

use super::RunContext;
use crate::output::{to_json, OutputFormat, Table};
use crate::{CliError, Result};

/// JSON shape of the series command.
#[derive(Debug, Serialize)]
pub struct SeriesReport {
    /// Category used
    pub category: Category,
    /// Baseline used
    pub baseline: f64,
    /// Seed that reproduces this output
    pub seed: u64,
    /// Monthly points
    pub monthly: Vec<SeriesPoint>,
    /// Yearly averages
    pub yearly: Vec<YearlyAggregate>,
    /// Summary statistics
    pub summary: SummaryStatistics,
}

/// Build the report for `category_tag` and `baseline`.
pub fn build(category_tag: &str, baseline: f64, ctx: &RunContext) -> Result<SeriesReport> {
    if !baseline.is_finite() {
        return Err(CliError::invalid_argument(format!(
            "Baseline must be a finite number, got {}",
            baseline
        )));
    }

    let category = Category::from_tag(category_tag);
    if category == Category::Unclassified {
        warn!(tag = %category_tag, "Unknown category, using the unclassified formula");
    }

    let mut generator = SeriesGenerator::new(category, baseline);
    if let Some(as_of) = ctx.as_of {
        generator = generator.with_as_of(as_of);
    }

    let mut rng = ctx.rng();
    let series = generator.generate_with(&mut rng)?;

    Ok(SeriesReport {
        category,
        baseline,
        seed: rng.seed(),
        yearly: series.yearly_averages(),
        summary: series.summary(),
        monthly: series.points().to_vec(),
    })
}

/// Render the series command output
pub fn render(category_tag: &str, baseline: f64, ctx: &RunContext) -> Result<String> {
    let report = build(category_tag, baseline, ctx)?;

    match ctx.format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Table => {
            let mut out = String::new();
            writeln!(
                out,
                "Category: {}  Baseline: {}  Seed: {}",
                report.category, report.baseline, report.seed
            )?;
            write!(out, "{}", monthly_table(&report.monthly))?;
            write!(out, "{}", yearly_table(&report.yearly))?;
            write!(out, "{}", summary_table(&report.summary))?;
            Ok(out)
        }
    }
}

/// Run the series command
pub fn run(category_tag: &str, baseline: f64, ctx: &RunContext) -> Result<()> {
    info!("Generating synthetic series...");
    info!("  Category: {}", category_tag);
    info!("  Baseline: {}", baseline);

    print!("{}", render(category_tag, baseline, ctx)?);
    Ok(())
}

pub(crate) fn monthly_table(points: &[SeriesPoint]) -> Table {
    let mut table = Table::new(["Period", "Value"]);
    for point in points {
        table.row([point.period.clone(), format!("{:.2}", point.value)]);
    }
    table
}

pub(crate) fn yearly_table(yearly: &[YearlyAggregate]) -> Table {
    let mut table = Table::new(["Year", "Average"]);
    for aggregate in yearly {
        table.row([aggregate.year.to_string(), format!("{:.2}", aggregate.average)]);
    }
    table
}

pub(crate) fn summary_table(summary: &SummaryStatistics) -> Table {
    let mut table = Table::new(["Max", "Min", "Range", "Mean", "Std dev"]);
    table.row([
        format!("{:.2}", summary.max),
        format!("{:.2}", summary.min),
        format!("{:.2}", summary.range()),
        format!("{:.2}", summary.mean),
        format!("{:.2}", summary.std_dev),
    ]);
    table
}
