//! Scenarios command implementation

use risk_dashboard::prelude::*;
use std::fmt::Write;
use tracing::info;

use super::RunContext;
use crate::output::{to_json, OutputFormat, Table};
use crate::Result;

/// Render the scenarios command output
pub fn render(ctx: &RunContext) -> Result<String> {
    let set = ScenarioSet::presets();

    match ctx.format {
        OutputFormat::Json => to_json(&set),
        OutputFormat::Table => {
            let mut table = Table::new(["Scenario", "Impact", "Risk", "Effect"]);
            for result in &set.results {
                table.row([
                    result.scenario.clone(),
                    result.impact_label(),
                    result.risk_level.to_string(),
                    result.description.clone(),
                ]);
            }

            let mut out = table.to_string();
            let dominant: Vec<&str> = set
                .dominant_risks()
                .iter()
                .map(|r| r.scenario.as_str())
                .collect();
            writeln!(out, "Dominant risks: {}", dominant.join(", "))?;
            writeln!(out, "{}", set.summary)?;
            Ok(out)
        }
    }
}

/// Run the scenarios command
pub fn run(ctx: &RunContext) -> Result<()> {
    info!("Listing preset scenarios...");
    print!("{}", render(ctx)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_presets() {
        let text = render(&RunContext::default()).unwrap();
        assert!(text.contains("│ US tariff +10pp "));
        assert!(text.contains("-15.8%"));
        assert!(text.contains("Dominant risks: KRW/USD +5%, US tariff +10pp\n"));
    }

    #[test]
    fn test_json_round_trips() {
        let ctx = RunContext {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let set: ScenarioSet = serde_json::from_str(&render(&ctx).unwrap()).unwrap();
        assert_eq!(set, ScenarioSet::presets());
    }
}
