//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors raised by the checked pricing and Greeks APIs

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// The closed-form formulas themselves never fail: given out-of-domain
/// inputs they propagate NaN/Inf like any floating-point expression. These
/// errors come from the checked entry points (`try_price`, the FD Greeks, the
/// sweep engine) that validate inputs before evaluating a formula.
///
/// # Variants
/// - `InvalidParameter`: A contract parameter is outside its domain
/// - `InvalidSpot`: Non-positive or non-finite spot price
/// - `InvalidStep`: Non-positive or non-finite finite-difference step
/// - `UnsupportedExerciseStyle`: Formula not defined for this contract variant
/// - `NumericalInstability`: Valid inputs produced a non-finite result
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidParameter { name: "volatility", value: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Contract parameter outside its valid domain.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Name of the offending field
        name: &'static str,
        /// The invalid value
        value: f64,
    },

    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid finite-difference step.
    #[error("Invalid finite-difference step: h = {step}")]
    InvalidStep {
        /// The invalid step
        step: f64,
    },

    /// Unsupported exercise style.
    #[error("Unsupported exercise style: {style}")]
    UnsupportedExerciseStyle {
        /// Description of the unsupported exercise style
        style: String,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidParameter { .. }
            | AnalyticalError::InvalidSpot { .. }
            | AnalyticalError::InvalidStep { .. } => PricingError::InvalidInput(err.to_string()),
            AnalyticalError::UnsupportedExerciseStyle { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}

/// Validates a spot price for the checked pricing entry points.
pub(crate) fn check_spot(spot: f64) -> Result<(), AnalyticalError> {
    if spot.is_finite() && spot > 0.0 {
        Ok(())
    } else {
        Err(AnalyticalError::InvalidSpot { spot })
    }
}

/// Turns a non-finite formula result into `NumericalInstability`.
pub(crate) fn check_finite(value: f64, what: &str) -> Result<f64, AnalyticalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::NumericalInstability {
            message: format!("{} evaluated to {}", what, value),
        })
    }
}
