//! # Pricer Risk (L4: Application)
//!
//! Sweeps prices and Greeks over spot meshes and parameter tables.
//!
//! This crate provides:
//! - Vector evaluation: one output per spot for a single contract
//! - Matrix evaluation: one vector per `{T, K, σ, r, [b]}` parameter row
//! - Rayon-based parallelisation across rows
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  sweep/     - OutputKind, ParamRow,     │
//! │               vector, matrix, engine    │
//! │  parallel/  - Rayon utilities           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Closed-form prices and Greeks          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::math::mesh::uniform;
//! use pricer_models::instruments::OptionContract;
//! use pricer_risk::sweep::{OutputKind, SweepEngine};
//!
//! let engine = SweepEngine::default();
//! let spots = uniform(80.0, 120.0, 5.0).unwrap();
//! let deltas = engine
//!     .vector(&OptionContract::default(), &spots, OutputKind::Delta)
//!     .unwrap();
//! assert_eq!(deltas.len(), spots.len());
//! assert!(deltas.windows(2).all(|w| w[1] > w[0]));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod parallel;
pub mod sweep;

// Re-export commonly used types
pub use parallel::ParallelConfig;
pub use sweep::{OutputKind, ParamRow, SweepConfig, SweepEngine, SweepError};
