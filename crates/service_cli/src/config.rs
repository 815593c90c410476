//! riskboard configuration.
//!
//! Loaded from a TOML file (a missing file means defaults), then
//! overridden from `RISKBOARD_*` environment variables, then validated.
//!
//! ```toml
//! log_level = "info"
//! format = "table"
//! seed = 42
//! as_of = "2025-06"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{CliError, Result};
use crate::output::OutputFormat;
use series_core::YearMonth;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "riskboard.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// riskboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskboardConfig {
    /// Default tracing directive
    pub log_level: String,

    /// Default output format (`table` or `json`)
    pub format: String,

    /// Seed for reproducible synthetic history
    pub seed: Option<u64>,

    /// Month the history window ends before, `YYYY-MM`
    pub as_of: Option<String>,

    /// `RISKBOARD_SEED` value that is not an unsigned integer
    #[serde(skip)]
    pub(crate) invalid_seed: Option<String>,
}

impl Default for RiskboardConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: OutputFormat::Table.as_str().to_string(),
            seed: None,
            as_of: None,
            invalid_seed: None,
        }
    }
}

impl RiskboardConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::ConfigIo(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| CliError::ConfigParse(e.to_string()))
    }

    /// Load from `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply `RISKBOARD_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by environment variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("RISKBOARD_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("RISKBOARD_FORMAT") {
            self.format = format;
        }

        if let Some(seed) = lookup("RISKBOARD_SEED") {
            match seed.trim().parse() {
                Ok(parsed) => {
                    self.seed = Some(parsed);
                    self.invalid_seed = None;
                }
                Err(_) => self.invalid_seed = Some(seed),
            }
        }

        if let Some(as_of) = lookup("RISKBOARD_AS_OF") {
            self.as_of = Some(as_of);
        }

        self
    }

    /// Validate the configuration, reporting every problem at once
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, LOG_LEVELS
            ));
        }

        if let Err(e) = self.format.parse::<OutputFormat>() {
            errors.push(format!("Invalid format '{}': {}", self.format, e));
        }

        if let Some(seed) = &self.invalid_seed {
            errors.push(format!(
                "Invalid RISKBOARD_SEED '{}': expected an unsigned integer",
                seed
            ));
        }

        if let Some(as_of) = &self.as_of {
            if let Err(e) = as_of.parse::<YearMonth>() {
                errors.push(format!("Invalid as_of '{}': {}", as_of, e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn resolve(path: &Path) -> Result<Self> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Parsed output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }

    /// Parsed as-of month, if configured
    pub fn as_of_month(&self) -> Result<Option<YearMonth>> {
        self.as_of
            .as_deref()
            .map(str::parse::<YearMonth>)
            .transpose()
            .map_err(CliError::from)
    }
}
