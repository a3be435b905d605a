//! Well-known Life patterns.
//!
//! Each pattern is anchored at `(0, 0)` (its bounding box's top-left
//! corner). Use [`Pattern::at`] to place it elsewhere.

use lifegrid_core::CellCoord;

/// A named set of live cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: Vec<CellCoord>,
    /// Generations until the pattern repeats in place (1 = still life).
    /// Spaceships report 0.
    pub period: u32,
}

impl Pattern {
    fn from_pairs(name: &'static str, period: u32, pairs: &[(i32, i32)]) -> Self {
        Self {
            name,
            cells: pairs.iter().map(|&p| p.into()).collect(),
            period,
        }
    }

    /// The pattern's cells translated by `(dx, dy)`.
    pub fn at(&self, dx: i32, dy: i32) -> Vec<CellCoord> {
        self.cells.iter().map(|c| c.offset(dx, dy)).collect()
    }

    /// Width and height of the bounding box.
    pub fn extent(&self) -> (u32, u32) {
        let max_x = self.cells.iter().map(|c| c.x).max().unwrap_or(-1);
        let max_y = self.cells.iter().map(|c| c.y).max().unwrap_or(-1);
        ((max_x + 1) as u32, (max_y + 1) as u32)
    }
}

/// 2x2 still life.
pub fn block() -> Pattern {
    Pattern::from_pairs("block", 1, &[(0, 0), (1, 0), (0, 1), (1, 1)])
}

/// Six-cell still life.
pub fn beehive() -> Pattern {
    Pattern::from_pairs("beehive", 1, &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)])
}

/// Period-2 oscillator in its vertical phase.
pub fn blinker() -> Pattern {
    Pattern::from_pairs("blinker", 2, &[(0, 0), (0, 1), (0, 2)])
}

/// Period-2 oscillator.
pub fn toad() -> Pattern {
    Pattern::from_pairs("toad", 2, &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)])
}

/// The south-east travelling glider; repeats shifted by (1, 1) every 4 generations.
pub fn glider() -> Pattern {
    Pattern::from_pairs("glider", 0, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

/// Patterns that return to their exact starting cells after `period` steps.
pub fn periodic() -> Vec<Pattern> {
    vec![block(), beehive(), blinker(), toad()]
}
