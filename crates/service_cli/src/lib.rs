//! # riskboard CLI
//!
//! Command-line front end for the risk dashboard model. The binary in
//! `main.rs` parses arguments and installs logging; everything it runs
//! lives here so it can be tested.
//!
//! - [`config`]: `riskboard.toml` loading, environment overrides, validation
//! - [`commands`]: One module per subcommand
//! - [`output`]: Table and JSON output
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::commands::RunContext;
    pub use crate::config::{RiskboardConfig, DEFAULT_CONFIG_PATH};
    pub use crate::error::{CliError, Result};
    pub use crate::output::{OutputFormat, Table};
}
