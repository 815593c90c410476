//! Error types for the dashboard model.

use series_core::SeriesError;
use thiserror::Error;

/// Dashboard error type
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    /// No card with this id in the catalogue
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// No block with this id in the catalogue
    #[error("Unknown block: {0}")]
    UnknownBlock(String),

    /// Risk level tag outside low/medium/high
    #[error("Invalid risk level '{0}'. Valid values: low, medium, high")]
    InvalidRiskLevel(String),

    /// Series-level error
    #[error("Series error: {0}")]
    Series(#[from] SeriesError),
}

impl DashboardError {
    /// Create an unknown metric error
    pub fn unknown_metric(id: impl Into<String>) -> Self {
        Self::UnknownMetric(id.into())
    }

    /// Create an unknown block error
    pub fn unknown_block(id: impl Into<String>) -> Self {
        Self::UnknownBlock(id.into())
    }
}

/// Result alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
