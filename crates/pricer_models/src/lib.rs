//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option pricing and sensitivities.
//!
//! This crate provides:
//! - European options under generalised Black-Scholes (cost of carry `b`)
//! - Perpetual American options in closed form
//! - Exact Greeks (delta, gamma, vega, theta, rho) for European options
//! - Finite-difference delta and gamma for any contract
//! - Put-call parity utilities
//!
//! ## Design Principles
//!
//! - **Tagged variants**: `OptionContract` is an enum over the two
//!   variants, which share one parameter record but not behaviour
//! - **Mutable parameters**: callers rebind `ContractParams` between calls
//!   and nothing derived is cached
//! - **Raw and checked APIs**: raw formulas propagate NaN, `try_*` validate

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
