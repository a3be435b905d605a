//! Game of Life engine on a toroidal grid.
//!
//! [`LifeEngine`] owns a fixed-size grid of cells and a [`Generation`]
//! counter. It is seeded at construction from an explicit random source,
//! advanced one generation at a time with [`LifeEngine::advance`], and
//! can be probed or edited cell by cell between steps. Reads that must
//! outlive the next step go through [`LifeEngine::current_generation`],
//! which returns a detached [`GridSnapshot`].
//!
//! [`Viewport`] maps between pixel space and cell space for front ends
//! that draw the grid and paint cells with a pointer.
//!
//! [`Generation`]: lifegrid_core::Generation

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub(crate) mod buffer;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod rule;
pub(crate) mod seed;
pub mod snapshot;
pub mod viewport;

pub use config::{ConfigError, DensityLevel, LifeConfig};
pub use engine::LifeEngine;
pub use metrics::StepMetrics;
pub use snapshot::GridSnapshot;
pub use viewport::{PaintMode, PixelRect, Viewport};
