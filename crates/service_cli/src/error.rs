//! CLI error types

use pricer_core::types::{MeshError, PricingError};
use pricer_models::analytical::AnalyticalError;
use pricer_risk::sweep::SweepError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `bsgreeks` commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bad command-line or file argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Benchmark verification failed
    #[error("Check failed: {0}")]
    CheckFailed(String),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Sweep error
    #[error(transparent)]
    Sweep(#[from] SweepError),

    /// Pricing error
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),

    /// Mesh generation error
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Parse error from a core type
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
