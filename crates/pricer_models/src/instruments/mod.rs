//! Option contract definitions.
//!
//! This module provides the data side of the pricer:
//! - [`ContractParams`]: rate, volatility, strike, expiry, carry and spot
//! - [`ExerciseStyle`]: European or perpetual American
//! - [`OptionContract`]: tagged enum over the two priced variants
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{ContractParams, ExerciseStyle, OptionContract};
//! use pricer_core::types::OptionType;
//!
//! let params = ContractParams::default().with_strike(65.0).with_expiry(0.25);
//! let contract = OptionContract::with_style(ExerciseStyle::European, params, OptionType::Put);
//! assert!(contract.price(60.0) > 5.0);
//! ```

mod contract;
mod exercise;
mod params;

pub use contract::OptionContract;
pub use exercise::ExerciseStyle;
pub use params::{
    ContractParams, DEFAULT_EXPIRY, DEFAULT_RATE, DEFAULT_STRIKE, DEFAULT_VOLATILITY,
};
