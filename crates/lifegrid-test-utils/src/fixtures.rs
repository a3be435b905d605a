//! ASCII grids and neighbour enumeration.

use lifegrid_core::{CellCoord, CellReader};
use lifegrid_space::torus::OFFSETS_8;

/// A grid parsed from ASCII art.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedGrid {
    pub rows: u32,
    pub cols: u32,
    pub alive: Vec<CellCoord>,
}

/// Parse a grid drawn with `#` (or `O`) for live cells and `.` for dead ones.
///
/// Leading/trailing blank lines and per-line surrounding whitespace are
/// ignored, so fixtures can be written as indented raw strings.
///
/// # Panics
///
/// Panics on ragged rows or unknown characters; fixtures are test-only.
pub fn parse_grid(ascii: &str) -> ParsedGrid {
    let lines: Vec<&str> = ascii
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let cols = lines.first().map_or(0, |l| l.chars().count());
    let mut alive = Vec::new();
    for (y, line) in lines.iter().enumerate() {
        assert_eq!(line.chars().count(), cols, "ragged row {y}: {line:?}");
        for (x, ch) in line.chars().enumerate() {
            match ch {
                '#' | 'O' => alive.push(CellCoord::new(x as i32, y as i32)),
                '.' => {}
                other => panic!("unexpected character {other:?} at ({x}, {y})"),
            }
        }
    }
    ParsedGrid {
        rows: lines.len() as u32,
        cols: cols as u32,
        alive,
    }
}

/// Render any grid as `#`/`.` rows joined by newlines.
pub fn render(grid: &dyn CellReader) -> String {
    let mut out = String::new();
    for y in 0..grid.height() as i32 {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.width() as i32 {
            out.push(if grid.is_alive(x, y) == Some(true) { '#' } else { '.' });
        }
    }
    out
}

/// Every `k`-element subset of the 8 neighbour offsets around `centre`.
///
/// Offsets are applied without wrapping; place `centre` at least one cell
/// from every edge, or wrap the results yourself.
pub fn neighbour_subsets(centre: CellCoord, k: usize) -> Vec<Vec<CellCoord>> {
    let mut out = Vec::new();
    for mask in 0u16..(1 << OFFSETS_8.len()) {
        if mask.count_ones() as usize != k {
            continue;
        }
        let subset = OFFSETS_8
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << *i) != 0)
            .map(|(_, &(dx, dy))| centre.offset(dx, dy))
            .collect();
        out.push(subset);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_dimensions_and_cells() {
        let g = parse_grid(
            "
            .#.
            ..#
            ###
            ",
        );
        assert_eq!((g.rows, g.cols), (3, 3));
        assert_eq!(g.alive.len(), 5);
        assert_eq!(g.alive[0], CellCoord::new(1, 0));
    }

    #[test]
    fn subset_counts_are_binomial() {
        let c = CellCoord::new(5, 5);
        assert_eq!(neighbour_subsets(c, 0).len(), 1);
        assert_eq!(neighbour_subsets(c, 2).len(), 28);
        assert_eq!(neighbour_subsets(c, 3).len(), 56);
        assert_eq!(neighbour_subsets(c, 4).len(), 70);
    }

    #[test]
    fn subsets_never_include_centre() {
        let c = CellCoord::new(2, 2);
        for s in neighbour_subsets(c, 3) {
            assert!(!s.contains(&c));
        }
    }
}
