//! Pixel ↔ cell mapping for drawing front ends.
//!
//! A front end draws each live cell as a square of `resolution` pixels
//! and lets the user paint cells by dragging a pointer. [`Viewport`]
//! holds the resolution and does the integer arithmetic in both
//! directions, so the front end only deals with pixels and buttons.

use lifegrid_core::{CellCoord, CellReader};

use crate::config::{ConfigError, DensityLevel, LifeConfig};
use crate::engine::LifeEngine;

/// What a pointer drag does to the cell under it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintMode {
    /// Make the cell alive (primary button).
    Draw,
    /// Make the cell dead (secondary button).
    Erase,
}

/// An axis-aligned square in pixel space.
///
/// Coordinates are `i64` so that `cell * resolution` never overflows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Side length.
    pub size: u32,
}

/// Mapping between canvas pixels and grid cells at a fixed resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    resolution: u32,
}

impl Viewport {
    /// Default cell size in pixels.
    pub const DEFAULT_RESOLUTION: u32 = 5;

    /// Create a viewport where each cell is `resolution` pixels square.
    ///
    /// Returns [`ConfigError::InvalidResolution`] for 0 or for values that
    /// do not fit in `i32`.
    pub fn new(resolution: u32) -> Result<Self, ConfigError> {
        if resolution == 0 || resolution > i32::MAX as u32 {
            return Err(ConfigError::InvalidResolution { value: resolution });
        }
        Ok(Self { resolution })
    }

    /// Cell size in pixels.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// How many whole cells fit on a canvas, as `(rows, cols)`.
    pub fn grid_dims(&self, canvas_width: u32, canvas_height: u32) -> (u32, u32) {
        (canvas_height / self.resolution, canvas_width / self.resolution)
    }

    /// An engine config that fills a canvas with whole cells.
    pub fn config_for_canvas(
        &self,
        canvas_width: u32,
        canvas_height: u32,
        density: DensityLevel,
        seed: u64,
    ) -> LifeConfig {
        let (rows, cols) = self.grid_dims(canvas_width, canvas_height);
        LifeConfig {
            rows,
            cols,
            density,
            seed,
        }
    }

    /// The cell under pixel `(px, py)`.
    ///
    /// Integer division truncating toward zero: the partial cell of pixels
    /// just left of or above the canvas still maps to column or row 0.
    /// Anything further out maps to a negative cell, which the engine ignores.
    pub fn cell_at(&self, px: i32, py: i32) -> CellCoord {
        let r = self.resolution as i32;
        CellCoord::new(px / r, py / r)
    }

    /// Apply a pointer action at pixel `(px, py)` to `engine`.
    ///
    /// Pixels that fall outside the grid change nothing.
    pub fn paint(&self, engine: &mut LifeEngine, px: i32, py: i32, mode: PaintMode) {
        let cell = self.cell_at(px, py);
        match mode {
            PaintMode::Draw => engine.set_cell_alive(cell.x, cell.y),
            PaintMode::Erase => engine.set_cell_dead(cell.x, cell.y),
        }
    }

    /// The square to fill for `cell`.
    ///
    /// Squares are one pixel smaller than the resolution, leaving a
    /// one-pixel gutter between neighbouring cells. At resolution 1 the
    /// square is empty.
    pub fn cell_rect(&self, cell: CellCoord) -> PixelRect {
        let r = i64::from(self.resolution);
        PixelRect {
            x: i64::from(cell.x) * r,
            y: i64::from(cell.y) * r,
            size: self.resolution - 1,
        }
    }

    /// One square per live cell of `grid`, in row-major order.
    pub fn live_rects<G: CellReader + ?Sized>(&self, grid: &G) -> Vec<PixelRect> {
        grid.live_cells()
            .into_iter()
            .map(|cell| self.cell_rect(cell))
            .collect()
    }

    /// Canvas size in pixels needed to show all of `grid`, as `(width, height)`.
    pub fn canvas_size<G: CellReader + ?Sized>(&self, grid: &G) -> (u64, u64) {
        let r = u64::from(self.resolution);
        (u64::from(grid.width()) * r, u64::from(grid.height()) * r)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            resolution: Self::DEFAULT_RESOLUTION,
        }
    }
}
