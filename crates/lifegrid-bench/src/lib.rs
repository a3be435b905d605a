//! Benchmark profiles for the lifegrid engine.
//!
//! Provides pre-built [`LifeConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells) at the default density
//! - [`stress_profile`]: 1000x1000 grid (1M cells) at the default density
//! - [`glider_field`]: a grid tiled with gliders for a deterministic,
//!   long-lived workload

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifegrid_core::CellCoord;
use lifegrid_engine::{DensityLevel, LifeConfig};

/// Build a reference benchmark profile: 100x100 grid (10K cells).
pub fn reference_profile(seed: u64) -> LifeConfig {
    LifeConfig {
        rows: 100,
        cols: 100,
        density: DensityLevel::DEFAULT,
        seed,
    }
}

/// Build a stress benchmark profile: 1000x1000 grid (1M cells).
///
/// Same density as [`reference_profile`] but at 100x the cell count.
pub fn stress_profile(seed: u64) -> LifeConfig {
    LifeConfig {
        rows: 1000,
        cols: 1000,
        density: DensityLevel::DEFAULT,
        seed,
    }
}

/// Live cells for a `side x side` grid tiled with gliders, one per 8x8 block.
///
/// Every glider heads the same way, so the tiling survives indefinitely
/// on a torus whose side is a multiple of 8.
pub fn glider_field(side: u32) -> Vec<CellCoord> {
    const GLIDER: [(i32, i32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let blocks = (side / 8) as i32;
    let mut cells = Vec::with_capacity((blocks * blocks) as usize * GLIDER.len());
    for by in 0..blocks {
        for bx in 0..blocks {
            for &(dx, dy) in &GLIDER {
                cells.push(CellCoord::new(bx * 8 + dx + 2, by * 8 + dy + 2));
            }
        }
    }
    cells
}
