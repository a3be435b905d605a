//! Read-only access to cell state.

use crate::coord::CellCoord;
use crate::id::Generation;

/// Read-only view of a grid of cells.
///
/// Implemented by the live engine and by detached snapshots so that
/// consumers (renderers, viewport mapping, test assertions) can read
/// either through `&dyn CellReader` without caring which one they hold.
pub trait CellReader {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// The generation this view reflects.
    fn generation(&self) -> Generation;

    /// State of the cell at `(x, y)`.
    ///
    /// Returns `None` if the coordinate lies outside the grid.
    fn is_alive(&self, x: i32, y: i32) -> Option<bool>;

    /// Number of live cells.
    fn population(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                if self.is_alive(x, y) == Some(true) {
                    count += 1;
                }
            }
        }
        count
    }

    /// All live cells in row-major order.
    fn live_cells(&self) -> Vec<CellCoord> {
        let mut out = Vec::new();
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                if self.is_alive(x, y) == Some(true) {
                    out.push(CellCoord::new(x, y));
                }
            }
        }
        out
    }
}
