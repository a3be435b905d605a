//! Core types and traits for the lifegrid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the generation counter, cell coordinates, and the read-only
//! [`CellReader`] seam shared by the live engine and its snapshots.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod id;
pub mod traits;

pub use coord::CellCoord;
pub use id::Generation;
pub use traits::CellReader;
