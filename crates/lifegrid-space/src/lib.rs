//! Spatial topology for lifegrid simulations.
//!
//! This crate defines [`Torus`], a fixed-size two-dimensional grid whose
//! edges wrap around on both axes, along with the [`SpaceError`] raised
//! when a grid cannot be constructed.
//!
//! Coordinates are `(x, y)` = `(column, row)`. Cells are ranked in
//! row-major order: `rank = y * cols + x`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod torus;
pub(crate) mod wrap;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use torus::Torus;
