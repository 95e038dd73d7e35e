//! Closed-form option pricing.
//!
//! This module provides:
//! - Standard normal CDF/PDF
//! - Generalised Black-Scholes for European options (cost of carry `b`)
//! - Closed-form perpetual American options
//! - Exact and finite-difference Greeks
//! - Put-call parity utilities
//!
//! ## Design Principles
//!
//! - **Raw and checked entry points**: `price` and the Greek functions are
//!   plain formulas that propagate NaN on out-of-domain input; `try_price`
//!   validates first and reports an [`AnalyticalError`]
//! - **No cached state**: every call recomputes from the current parameters

pub mod distributions;
pub mod error;
pub mod european;
pub mod greeks;
pub mod parity;
pub mod perpetual_american;

// Re-export main types at module level
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use european::EuropeanOption;
pub use greeks::Greeks;
pub use perpetual_american::PerpetualAmericanOption;
