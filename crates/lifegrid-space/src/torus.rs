//! 2D toroidal grid with 8-connected neighbourhood.

use crate::error::SpaceError;
use crate::wrap;
use lifegrid_core::CellCoord;
use smallvec::SmallVec;

/// All 8 offsets as `(dx, dy)`: W, E, N, S, NW, NE, SW, SE.
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// A two-dimensional grid whose edges wrap on both axes.
///
/// Each cell has coordinate `(x, y)` with `0 <= x < cols` and
/// `0 <= y < rows`. Neighbours are the four cardinal cells plus the four
/// diagonals, resolved modulo the grid size, so the west neighbour of
/// column 0 is column `cols - 1`. Distance is toroidal Chebyshev (L-inf).
///
/// # Examples
///
/// ```
/// use lifegrid_core::CellCoord;
/// use lifegrid_space::Torus;
///
/// let t = Torus::new(4, 4).unwrap();
/// let n = t.neighbours(CellCoord::new(0, 0));
/// assert_eq!(n.len(), 8);
/// assert!(n.contains(&CellCoord::new(3, 3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Torus {
    rows: u32,
    cols: u32,
}

impl Torus {
    /// Maximum size of either axis: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a torus with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows (grid height).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (grid width).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether `(x, y)` lies inside the grid without wrapping.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        wrap::in_axis(x, self.cols) && wrap::in_axis(y, self.rows)
    }

    /// Row-major rank of `(x, y)`, or `None` if it lies outside the grid.
    pub fn rank(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    /// Inverse of [`rank`](Self::rank).
    pub fn coord_of(&self, rank: usize) -> Option<CellCoord> {
        if rank >= self.cell_count() {
            return None;
        }
        let cols = self.cols as usize;
        Some(CellCoord::new((rank % cols) as i32, (rank / cols) as i32))
    }

    /// Wrap a column index onto `[0, cols)`.
    pub fn wrap_x(&self, x: i32) -> i32 {
        wrap::wrap_axis(x, self.cols)
    }

    /// Wrap a row index onto `[0, rows)`.
    pub fn wrap_y(&self, y: i32) -> i32 {
        wrap::wrap_axis(y, self.rows)
    }

    /// Wrap both components of `coord` onto the grid.
    pub fn wrap(&self, coord: CellCoord) -> CellCoord {
        CellCoord::new(self.wrap_x(coord.x), self.wrap_y(coord.y))
    }

    /// The 8-connected neighbours of `coord`, wrapped onto the grid.
    ///
    /// `coord` is wrapped first. One entry is returned per offset, except
    /// that offsets resolving back onto `coord` itself are dropped: a cell
    /// is never its own neighbour, which only matters when an axis has
    /// length 1. On a length-2 axis both horizontal (or vertical) offsets
    /// reach the same cell and it appears twice.
    pub fn neighbours(&self, coord: CellCoord) -> SmallVec<[CellCoord; 8]> {
        let centre = self.wrap(coord);
        OFFSETS_8
            .iter()
            .map(|&(dx, dy)| self.wrap(centre.offset(dx, dy)))
            .filter(|nb| *nb != centre)
            .collect()
    }

    /// Toroidal Chebyshev distance between `a` and `b`.
    pub fn distance(&self, a: CellCoord, b: CellCoord) -> u32 {
        let dx = wrap::axis_distance(a.x, b.x, self.cols);
        let dy = wrap::axis_distance(a.y, b.y, self.rows);
        dx.max(dy)
    }

    /// All cells in row-major order: `(0,0), (1,0), ..., (cols-1, rows-1)`.
    pub fn canonical_ordering(&self) -> Vec<CellCoord> {
        let mut out = Vec::with_capacity(self.cell_count());
        for y in 0..self.rows as i32 {
            for x in 0..self.cols as i32 {
                out.push(CellCoord::new(x, y));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> CellCoord {
        CellCoord::new(x, y)
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let t = Torus::new(5, 5).unwrap();
        let n = t.neighbours(c(2, 2));
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&c(2, 2)));
    }

    #[test]
    fn neighbours_wrap_corner() {
        let t = Torus::new(5, 5).unwrap();
        let n = t.neighbours(c(0, 0));
        assert_eq!(n.len(), 8);
        assert!(n.contains(&c(4, 4))); // NW wraps on both axes
        assert!(n.contains(&c(0, 4))); // N wraps
        assert!(n.contains(&c(4, 0))); // W wraps
    }

    #[test]
    fn neighbours_wrap_far_corner() {
        let t = Torus::new(3, 4).unwrap();
        let n = t.neighbours(c(3, 2));
        assert!(n.contains(&c(0, 0))); // SE wraps on both axes
        assert!(n.contains(&c(0, 2))); // E wraps
        assert!(n.contains(&c(3, 0))); // S wraps
    }

    #[test]
    fn neighbours_of_out_of_range_coord_are_wrapped() {
        let t = Torus::new(5, 5).unwrap();
        assert_eq!(t.neighbours(c(-3, 7)), t.neighbours(c(2, 2)));
    }

    // ── Degenerate axes ─────────────────────────────────────────

    #[test]
    fn single_cell_has_no_neighbours() {
        let t = Torus::new(1, 1).unwrap();
        assert!(t.neighbours(c(0, 0)).is_empty());
    }

    #[test]
    fn single_column_drops_self_offsets() {
        // 1 column: dx = -1 and dx = +1 both land on x = 0.
        let t = Torus::new(5, 1).unwrap();
        let n = t.neighbours(c(0, 2));
        assert_eq!(n.len(), 6);
        assert!(!n.contains(&c(0, 2)));
        assert_eq!(n.iter().filter(|nb| **nb == c(0, 1)).count(), 3);
        assert_eq!(n.iter().filter(|nb| **nb == c(0, 3)).count(), 3);
    }

    #[test]
    fn two_columns_count_coinciding_neighbour_twice() {
        let t = Torus::new(4, 2).unwrap();
        let n = t.neighbours(c(0, 1));
        assert_eq!(n.len(), 8);
        assert_eq!(n.iter().filter(|nb| **nb == c(1, 1)).count(), 2);
    }

    // ── Rank tests ──────────────────────────────────────────────

    #[test]
    fn rank_is_row_major() {
        let t = Torus::new(3, 4).unwrap();
        assert_eq!(t.rank(0, 0), Some(0));
        assert_eq!(t.rank(3, 0), Some(3));
        assert_eq!(t.rank(1, 2), Some(9));
        assert_eq!(t.rank(4, 0), None);
        assert_eq!(t.rank(0, -1), None);
    }

    #[test]
    fn coord_of_inverts_rank() {
        let t = Torus::new(3, 4).unwrap();
        assert_eq!(t.coord_of(9), Some(c(1, 2)));
        assert_eq!(t.coord_of(12), None);
    }

    // ── Distance tests ──────────────────────────────────────────

    #[test]
    fn distance_wraps_both_axes() {
        let t = Torus::new(10, 10).unwrap();
        assert_eq!(t.distance(c(0, 0), c(9, 9)), 1);
        assert_eq!(t.distance(c(0, 0), c(3, 4)), 4);
        assert_eq!(t.distance(c(0, 0), c(5, 5)), 5);
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_dimension_returns_error() {
        assert_eq!(Torus::new(0, 5), Err(SpaceError::EmptySpace));
        assert_eq!(Torus::new(5, 0), Err(SpaceError::EmptySpace));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Torus::new(big, 5),
            Err(SpaceError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Torus::new(5, big),
            Err(SpaceError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_square() {
        compliance::run_full_compliance(&Torus::new(6, 6).unwrap());
    }

    #[test]
    fn compliance_rectangular() {
        compliance::run_full_compliance(&Torus::new(3, 7).unwrap());
    }

    #[test]
    fn compliance_degenerate() {
        compliance::run_full_compliance(&Torus::new(1, 4).unwrap());
        compliance::run_full_compliance(&Torus::new(2, 2).unwrap());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn distance_is_metric(
            rows in 1u32..10,
            cols in 1u32..10,
            ax in 0i32..10, ay in 0i32..10,
            bx in 0i32..10, by in 0i32..10,
            cx in 0i32..10, cy in 0i32..10,
        ) {
            let t = Torus::new(rows, cols).unwrap();
            let a = t.wrap(c(ax, ay));
            let b = t.wrap(c(bx, by));
            let cv = t.wrap(c(cx, cy));

            prop_assert_eq!(t.distance(a, a), 0);
            prop_assert_eq!(t.distance(a, b), t.distance(b, a));
            prop_assert!(t.distance(a, cv) <= t.distance(a, b) + t.distance(b, cv));
        }

        #[test]
        fn neighbours_symmetric(
            rows in 1u32..10,
            cols in 1u32..10,
            x in -20i32..20, y in -20i32..20,
        ) {
            let t = Torus::new(rows, cols).unwrap();
            let coord = t.wrap(c(x, y));
            for nb in t.neighbours(coord) {
                prop_assert!(
                    t.neighbours(nb).contains(&coord),
                    "neighbour symmetry violated: {:?} in N({:?}) but not vice versa",
                    nb, coord,
                );
                prop_assert_eq!(t.distance(coord, nb), 1);
            }
        }
    }
}
