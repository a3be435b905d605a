//! lifegrid: Conway's Game of Life on a fixed-size toroidal grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the lifegrid sub-crates. For most users, adding `lifegrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! // A 5x5 torus holding a vertical blinker.
//! let mut engine = LifeEngine::from_pattern(5, 5, [(2, 1), (2, 2), (2, 3)]).unwrap();
//! let metrics = engine.advance();
//! assert_eq!(metrics.generation, Generation(1));
//! assert_eq!((metrics.births, metrics.deaths), (2, 2));
//!
//! // The blinker is now horizontal.
//! let snapshot = engine.current_generation();
//! assert_eq!(snapshot.to_string(), ".....\n.....\n.###.\n.....\n.....");
//!
//! // Seeded engines are reproducible.
//! let config = LifeConfig { rows: 40, cols: 60, density: DensityLevel(5), seed: 9 };
//! let a = LifeEngine::from_config(&config).unwrap();
//! let b = LifeEngine::from_config(&config).unwrap();
//! assert_eq!(a.current_generation(), b.current_generation());
//!
//! // Paint through a viewport at 5 pixels per cell.
//! let viewport = Viewport::default();
//! let mut engine = LifeEngine::from_pattern(10, 10, std::iter::empty::<CellCoord>()).unwrap();
//! viewport.paint(&mut engine, 12, 7, PaintMode::Draw);
//! assert_eq!(engine.is_alive(2, 1), Some(true));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lifegrid-core` | Coordinates, generation counter, the read trait |
//! | [`space`] | `lifegrid-space` | Toroidal topology and neighbour lookup |
//! | [`engine`] | `lifegrid-engine` | The engine, configuration, snapshots, viewport |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`lifegrid-core`).
///
/// Contains [`types::CellCoord`], [`types::Generation`], and the
/// [`types::CellReader`] trait shared by engines and snapshots.
pub use lifegrid_core as types;

/// Toroidal grid topology (`lifegrid-space`).
///
/// Provides [`space::Torus`] with coordinate wrapping, row-major ranking,
/// and 8-neighbour lookup.
pub use lifegrid_space as space;

/// The Life engine (`lifegrid-engine`).
///
/// [`engine::LifeEngine`] for stepping and editing a grid,
/// [`engine::LifeConfig`] for seeded construction, and
/// [`engine::Viewport`] for pixel-space front ends.
pub use lifegrid_engine as engine;

/// Common imports for typical lifegrid usage.
///
/// ```rust
/// use lifegrid::prelude::*;
/// ```
///
/// This imports the engine and its configuration, the read trait,
/// coordinate and generation types, and the viewport.
pub mod prelude {
    // Core types and traits
    pub use lifegrid_core::{CellCoord, CellReader, Generation};

    // Space
    pub use lifegrid_space::Torus;

    // Errors
    pub use lifegrid_engine::ConfigError;
    pub use lifegrid_space::SpaceError;

    // Engine
    pub use lifegrid_engine::{
        DensityLevel, GridSnapshot, LifeConfig, LifeEngine, PaintMode, PixelRect, StepMetrics,
        Viewport,
    };
}
