//! Cell coordinates.

use std::fmt;

/// A cell position on the grid: `x` is the column, `y` the row.
///
/// Components are signed so that callers can pass coordinates derived
/// from pointer math that fall left of or above the grid. Whether a
/// coordinate is in range is decided by the topology, not by this type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl CellCoord {
    /// Construct a coordinate from a column and a row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)` without wrapping.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<CellCoord> for (i32, i32) {
    fn from(c: CellCoord) -> Self {
        (c.x, c.y)
    }
}
