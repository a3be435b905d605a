//! Detached copies of a generation.

use std::fmt;

use lifegrid_core::{CellCoord, CellReader, Generation};
use lifegrid_space::Torus;

/// An owned copy of one generation of the grid.
///
/// Produced by [`LifeEngine::current_generation`]. The snapshot shares
/// nothing with the engine, so a renderer can iterate it while the engine
/// moves on to later generations.
///
/// [`LifeEngine::current_generation`]: crate::LifeEngine::current_generation
#[derive(Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    torus: Torus,
    generation: Generation,
    cells: Vec<bool>,
}

impl GridSnapshot {
    pub(crate) fn new(torus: Torus, generation: Generation, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), torus.cell_count());
        Self {
            torus,
            generation,
            cells,
        }
    }

    /// The topology the snapshot was taken from.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Row-major cell states: index `y * width + x`.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Consume the snapshot, returning the row-major cell states.
    pub fn into_cells(self) -> Vec<bool> {
        self.cells
    }

    /// Iterate rows from `y = 0` down, each as a slice of `width` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.torus.cols() as usize)
    }

    /// Iterate live cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let cols = self.torus.cols() as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| CellCoord::new((i % cols) as i32, (i / cols) as i32))
    }
}

impl CellReader for GridSnapshot {
    fn width(&self) -> u32 {
        self.torus.cols()
    }

    fn height(&self) -> u32 {
        self.torus.rows()
    }

    fn generation(&self) -> Generation {
        self.generation
    }

    fn is_alive(&self, x: i32, y: i32) -> Option<bool> {
        self.torus.rank(x, y).map(|i| self.cells[i])
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    fn live_cells(&self) -> Vec<CellCoord> {
        self.alive_cells().collect()
    }
}

/// Renders one line per row, `#` for live cells and `.` for dead ones.
impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridSnapshot")
            .field("width", &self.torus.cols())
            .field("height", &self.torus.rows())
            .field("generation", &self.generation)
            .field("population", &self.population())
            .finish()
    }
}
