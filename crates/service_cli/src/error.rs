//! Error types for the riskboard CLI.

use risk_dashboard::DashboardError;
use series_core::SeriesError;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file could not be read
    #[error("Config IO error: {0}")]
    ConfigIo(String),

    /// Config file is not valid TOML for the expected shape
    #[error("Config parse error: {0}")]
    ConfigParse(String),

    /// Config values failed validation
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Command-line argument rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Dashboard lookup failed
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// Period parsing failed
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// JSON serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Formatting output failed
    #[error("Output error: {0}")]
    Output(#[from] std::fmt::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
