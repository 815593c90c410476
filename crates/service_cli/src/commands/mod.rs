//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands render to a
//! `String` so they can be tested without capturing stdout; `run` prints.

pub mod alerts;
pub mod chart;
pub mod check;
pub mod dashboard;
pub mod scenarios;
pub mod series;

use series_core::{SeriesRng, YearMonth};
use tracing::info;

use crate::config::RiskboardConfig;
use crate::output::OutputFormat;
use crate::Result;

/// Settings shared by every command: config values with flags applied on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunContext {
    /// Output format
    pub format: OutputFormat,
    /// Seed for synthetic history; entropy when `None`
    pub seed: Option<u64>,
    /// Month the history window ends before; current month when `None`
    pub as_of: Option<YearMonth>,
}

impl RunContext {
    /// Context from a validated config.
    pub fn from_config(config: &RiskboardConfig) -> Result<Self> {
        Ok(Self {
            format: config.output_format()?,
            seed: config.seed,
            as_of: config.as_of_month()?,
        })
    }

    /// Override the format when the flag was given.
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    /// Override the seed when the flag was given.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Override the as-of month when the flag was given.
    pub fn with_as_of(mut self, as_of: Option<YearMonth>) -> Self {
        if as_of.is_some() {
            self.as_of = as_of;
        }
        self
    }

    /// Random source for synthetic history.
    ///
    /// The seed is logged so an entropy-seeded run can be replayed.
    pub fn rng(&self) -> SeriesRng {
        let rng = match self.seed {
            Some(seed) => SeriesRng::from_seed(seed),
            None => SeriesRng::from_entropy(),
        };
        info!(seed = rng.seed(), "Synthetic history seed");
        rng
    }
}
