//! Check command implementation
//!
//! Prints the resolved configuration and what the catalogue holds.

use risk_dashboard::prelude::*;
use std::fmt::Write;
use std::path::Path;
use tracing::info;

use super::RunContext;
use crate::config::RiskboardConfig;
use crate::Result;

/// Render the check command output
pub fn render(config_path: &Path, config: &RiskboardConfig, ctx: &RunContext) -> Result<String> {
    let catalogue = Catalogue::sample();
    let counts = catalogue.risk_counts();

    let mut out = String::new();
    writeln!(out, "riskboard {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(
        out,
        "Config file: {} ({})",
        config_path.display(),
        if config_path.exists() { "loaded" } else { "not found, defaults" }
    )?;
    writeln!(out, "  log_level: {}", config.log_level)?;
    writeln!(out, "  format:    {}", ctx.format)?;
    writeln!(
        out,
        "  seed:      {}",
        ctx.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string())
    )?;
    writeln!(
        out,
        "  as_of:     {}",
        ctx.as_of.map_or_else(|| "current month".to_string(), |m| m.to_string())
    )?;
    writeln!(
        out,
        "Catalogue: {} blocks, {} cards (high {}, medium {}, low {})",
        catalogue.blocks().len(),
        counts.total(),
        counts.high,
        counts.medium,
        counts.low
    )?;
    Ok(out)
}

/// Run the check command
pub fn run(config_path: &Path, config: &RiskboardConfig, ctx: &RunContext) -> Result<()> {
    info!("Checking configuration...");
    print!("{}", render(config_path, config, ctx)?);
    info!("Check complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_report() {
        let config = RiskboardConfig::default();
        let ctx = RunContext::from_config(&config).unwrap();
        let text = render(Path::new("/nonexistent/riskboard.toml"), &config, &ctx).unwrap();

        assert!(text.contains("(not found, defaults)"));
        assert!(text.contains("  seed:      entropy\n"));
        assert!(text.contains("  as_of:     current month\n"));
        assert!(text.contains("Catalogue: 9 blocks, 48 cards"));
    }

    #[test]
    fn test_resolved_values_shown() {
        let config = RiskboardConfig {
            seed: Some(3),
            as_of: Some("2025-06".to_string()),
            ..Default::default()
        };
        let ctx = RunContext::from_config(&config).unwrap();
        let text = render(Path::new("riskboard.toml"), &config, &ctx).unwrap();
        assert!(text.contains("  seed:      3\n"));
        assert!(text.contains("  as_of:     2025-06\n"));
    }
}
