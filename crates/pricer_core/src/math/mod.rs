//! Numerical helpers shared by the pricing layers.
//!
//! - `mesh`: uniform grids of spot prices or parameters

pub mod mesh;

pub use mesh::uniform;
