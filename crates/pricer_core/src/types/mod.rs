//! Core option and error types.
//!
//! This module provides:
//! - `option_type`: The call/put flag shared by every contract variant
//! - `error`: Structured error types for pricing and mesh operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option_type`
//! - [`PricingError`], [`MeshError`] from `error`

pub mod error;
pub mod option_type;

// Re-export commonly used types at module level
pub use error::{MeshError, PricingError};
pub use option_type::OptionType;
