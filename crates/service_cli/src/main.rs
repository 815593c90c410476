//! riskboard - export risk dashboard in the terminal
//!
//! # Commands
//!
//! - `riskboard series --category <tag> --baseline <value>` - Synthetic five-year history
//! - `riskboard chart <metric-id>` - Detail chart for a catalogue card
//! - `riskboard dashboard` - Catalogue blocks, filterable by block and risk level
//! - `riskboard alerts` - Alert rules and what they trigger
//! - `riskboard scenarios` - Preset stress scenarios
//! - `riskboard check` - Resolved configuration

use clap::{Parser, Subcommand};
use risk_dashboard::risk::RiskLevel;
use series_core::YearMonth;
use service_cli::commands::{self, RunContext};
use service_cli::config::{RiskboardConfig, DEFAULT_CONFIG_PATH};
use service_cli::output::OutputFormat;
use service_cli::Result;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Export risk dashboard CLI
#[derive(Parser)]
#[command(name = "riskboard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic history for a category
    Series {
        /// Category tag (commodity, shipping, exchange, interest, economy, tariff)
        #[arg(short = 't', long)]
        category: String,

        /// Current value the history is scaled around
        #[arg(short, long, allow_negative_numbers = true)]
        baseline: f64,

        #[command(flatten)]
        history: HistoryArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show the detail chart for a catalogue card
    Chart {
        /// Card id (e.g. copper, usd_krw, tariff_korea)
        metric_id: String,

        #[command(flatten)]
        history: HistoryArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Show dashboard blocks
    Dashboard {
        /// Only this block (e.g. raw_materials, exchange)
        #[arg(short, long)]
        block: Option<String>,

        /// Only cards at this risk level (low, medium, high)
        #[arg(short, long)]
        risk: Option<RiskLevel>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Evaluate alert rules
    Alerts {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List preset stress scenarios
    Scenarios {
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check configuration
    Check,
}

/// Flags shared by commands that generate history.
#[derive(clap::Args)]
struct HistoryArgs {
    /// Month the window ends before (YYYY-MM); defaults to the current month
    #[arg(short, long)]
    as_of: Option<YearMonth>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

fn init_tracing(config: &RiskboardConfig, verbose: bool) {
    let directive = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = RiskboardConfig::resolve(&cli.config)?;
    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let ctx = RunContext::from_config(&config)?;

    match cli.command {
        Commands::Series {
            category,
            baseline,
            history,
            format,
        } => {
            let ctx = ctx
                .with_format(format)
                .with_seed(history.seed)
                .with_as_of(history.as_of);
            commands::series::run(&category, baseline, &ctx)
        }
        Commands::Chart {
            metric_id,
            history,
            format,
        } => {
            let ctx = ctx
                .with_format(format)
                .with_seed(history.seed)
                .with_as_of(history.as_of);
            commands::chart::run(&metric_id, &ctx)
        }
        Commands::Dashboard {
            block,
            risk,
            format,
        } => commands::dashboard::run(block.as_deref(), risk, &ctx.with_format(format)),
        Commands::Alerts { format } => commands::alerts::run(&ctx.with_format(format)),
        Commands::Scenarios { format } => commands::scenarios::run(&ctx.with_format(format)),
        Commands::Check => commands::check::run(&cli.config, &config, &ctx),
    }
}
