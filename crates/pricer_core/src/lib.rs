//! # pricer_core: Foundation for the Black-Scholes Greeks Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - The call/put flag: `OptionType` (`types::option_type`)
//! - Error types: `PricingError`, `MeshError` (`types::error`)
//! - The `Priceable` capability consumed by finite-difference Greeks (`traits`)
//! - Uniform mesh generation for spot sweeps (`math::mesh`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::mesh::uniform;
//! use pricer_core::types::OptionType;
//!
//! let spots = uniform(10.0_f64, 50.0, 1.0).unwrap();
//! assert_eq!(spots.len(), 41);
//!
//! let right: OptionType = "P".parse().unwrap();
//! assert!(right.is_put());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
