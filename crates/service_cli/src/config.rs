//! CLI configuration management
//!
//! Loads `bsgreeks.toml` (or the `--config` path) when present, then applies
//! `BSGREEKS_*` environment overrides and validates the result.
//!
//! Priority (highest to lowest):
//! 1. Command-line flags (applied by the caller)
//! 2. Environment variables
//! 3. Config file
//! 4. Default values

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pricer_risk::parallel::ParallelConfig;
use pricer_risk::sweep::{SweepConfig, DEFAULT_FD_STEP};
use serde::Deserialize;
use thiserror::Error;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "bsgreeks.toml";

/// Environment variable overriding `fd_step`.
pub const ENV_FD_STEP: &str = "BSGREEKS_FD_STEP";
/// Environment variable overriding `format`.
pub const ENV_FORMAT: &str = "BSGREEKS_FORMAT";
/// Environment variable overriding `log_level`.
pub const ENV_LOG_LEVEL: &str = "BSGREEKS_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Non-positive or non-finite FD step
    #[error("Invalid finite-difference step: {0}. Must be positive and finite")]
    InvalidFdStep(f64),

    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format
    #[error("Invalid output format: {0}. Must be one of: table, csv, json")]
    InvalidFormat(String),

    /// Precision out of range
    #[error("Invalid precision: {0}. Must be between 1 and 16")]
    InvalidPrecision(usize),

    /// File read or parse failure
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Malformed environment variable
    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Trace
    Trace,
    /// Debug
    Debug,
    /// Info
    #[default]
    Info,
    /// Warn
    Warn,
    /// Error
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Step for the finite-difference Greeks
    pub fd_step: f64,
    /// Report format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub format: OutputFormat,
    /// Log level when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Decimal places in table and CSV output
    pub precision: usize,
    /// Row fan-out for matrix sweeps
    pub parallel: ParallelConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            fd_step: DEFAULT_FD_STEP,
            format: OutputFormat::Table,
            log_level: LogLevel::Info,
            precision: 6,
            parallel: ParallelConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from all sources
    ///
    /// A missing file falls back to defaults; an unreadable or invalid file
    /// is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        let config = config.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in `load`)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(step) = lookup(ENV_FD_STEP) {
            self.fd_step = step
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("{}={}", ENV_FD_STEP, step)))?;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fd_step.is_finite() && self.fd_step > 0.0) {
            return Err(ConfigError::InvalidFdStep(self.fd_step));
        }
        if !(1..=16).contains(&self.precision) {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        Ok(())
    }

    /// Sweep engine configuration derived from this config
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig::default()
            .with_fd_step(self.fd_step)
            .with_parallel(self.parallel.clone())
    }
}
