//! Error types for sweep evaluation.

use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

/// Errors raised by the vector and matrix pricer.
///
/// Evaluation is fail-fast: the first error aborts the whole sweep and no
/// partial surface is returned.
///
/// # Variants
/// - `MalformedRow`: Parameter row without 4 or 5 values
/// - `InvalidSpot`: Non-positive or non-finite spot, or `S <= h` for an FD kind
/// - `Analytical`: Contract validation or unsupported Greek
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SweepError {
    /// Parameter row with the wrong number of values.
    #[error("Malformed parameter row {row}: expected 4 or 5 values (T, K, sigma, r[, b]), got {len}")]
    MalformedRow {
        /// Zero-based row index
        row: usize,
        /// Number of values found
        len: usize,
    },

    /// Invalid spot in the spot sequence.
    #[error("Invalid spot price at index {index}: S = {spot}")]
    InvalidSpot {
        /// Zero-based position in the spot sequence
        index: usize,
        /// The invalid spot
        spot: f64,
    },

    /// Error from the analytical layer.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),
}

impl From<SweepError> for PricingError {
    fn from(err: SweepError) -> Self {
        match err {
            SweepError::Analytical(inner) => inner.into(),
            other => PricingError::InvalidInput(other.to_string()),
        }
    }
}
