//! Vectorised and matrix pricing.
//!
//! Sweeps a price or Greek over a sequence of spots, optionally once per
//! row of a `{T, K, σ, r, [b]}` parameter table.
//!
//! # Components
//!
//! - [`OutputKind`]: closed set of quantities, each mapped to a function of spot
//! - [`ParamRow`]: positional parameter row with `b` defaulting to `r`
//! - [`vector`] / [`matrix`]: free functions taking an explicit FD step
//! - [`SweepEngine`]: stored configuration plus Rayon row fan-out
//!
//! # Example
//!
//! ```
//! use pricer_core::types::OptionType;
//! use pricer_models::instruments::{ContractParams, OptionContract};
//! use pricer_risk::sweep::{matrix, OutputKind};
//!
//! let contract = OptionContract::european(ContractParams::default(), OptionType::Put);
//! let rows = [[0.5, 100.0, 0.2, 0.05], [1.0, 100.0, 0.2, 0.05]];
//! let surface = matrix(&contract, &rows, &[90.0, 110.0], OutputKind::Price, 0.01).unwrap();
//! assert!(surface[1][0] > surface[0][0]);
//! ```

mod engine;
mod error;
mod output;
mod row;

pub use engine::{matrix, vector, SweepConfig, SweepEngine, DEFAULT_FD_STEP};
pub use error::SweepError;
pub use output::{OutputKind, SpotFn};
pub use row::ParamRow;
