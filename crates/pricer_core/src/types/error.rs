//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing operations
//! - `MeshError`: Errors from spot/parameter mesh generation

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation produced a non-finite value
/// - `UnsupportedInstrument`: Instrument type not supported by model
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Instrument type not supported
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

/// Mesh generation errors.
///
/// # Examples
/// ```
/// use pricer_core::types::MeshError;
///
/// let err = MeshError::InvalidStep { step: 0.0 };
/// assert_eq!(format!("{}", err), "Invalid mesh step: h = 0 (must be positive and finite)");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Step is zero, negative, or not finite.
    #[error("Invalid mesh step: h = {step} (must be positive and finite)")]
    InvalidStep {
        /// The rejected step size
        step: f64,
    },

    /// Range bounds are not finite.
    #[error("Invalid mesh bounds: [{start}, {end}]")]
    InvalidBounds {
        /// Lower bound
        start: f64,
        /// Upper bound
        end: f64,
    },

    /// Upper bound lies below the lower bound.
    #[error("Empty mesh range: end {end} < start {start}")]
    EmptyRange {
        /// Lower bound
        start: f64,
        /// Upper bound
        end: f64,
    },

    /// Mesh would hold more points than the allocation limit.
    #[error("Mesh too large: {points} points exceeds the limit of {max}")]
    TooManyPoints {
        /// Requested number of points
        points: f64,
        /// Largest allowed number of points
        max: usize,
    },
}

impl From<MeshError> for PricingError {
    fn from(err: MeshError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
