//! Torus compliance test helpers.
//!
//! These functions verify that a [`Torus`] satisfies the invariants the
//! engine relies on. Reused across the rectangular and degenerate grid
//! tests in [`crate::torus`].

use crate::torus::Torus;
use indexmap::IndexSet;

/// Assert that `distance(a, a) == 0` for all cells.
pub fn assert_distance_reflexive(space: &Torus) {
    for coord in space.canonical_ordering() {
        let d = space.distance(coord, coord);
        assert_eq!(d, 0, "distance({coord}, {coord}) = {d}, expected 0");
    }
}

/// Assert that `distance(a, b) == distance(b, a)` for all cell pairs.
pub fn assert_distance_symmetric(space: &Torus) {
    let cells = space.canonical_ordering();
    for &a in &cells {
        for &b in &cells {
            let dab = space.distance(a, b);
            let dba = space.distance(b, a);
            assert_eq!(dab, dba, "distance({a}, {b}) = {dab} != distance({b}, {a}) = {dba}");
        }
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &Torus) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(coord) {
            assert!(
                space.neighbours(nb).contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that no cell is its own neighbour.
pub fn assert_neighbours_exclude_self(space: &Torus) {
    for coord in space.canonical_ordering() {
        assert!(
            !space.neighbours(coord).contains(&coord),
            "{coord} listed as its own neighbour"
        );
    }
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique coords.
pub fn assert_canonical_ordering_complete(space: &Torus) {
    let ordering = space.canonical_ordering();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        space.cell_count(),
        "canonical_ordering has duplicates"
    );
}

/// Assert that `rank` agrees with the position in `canonical_ordering`.
pub fn assert_rank_matches_ordering(space: &Torus) {
    for (i, coord) in space.canonical_ordering().into_iter().enumerate() {
        assert_eq!(space.rank(coord.x, coord.y), Some(i), "rank({coord})");
        assert_eq!(space.coord_of(i), Some(coord), "coord_of({i})");
    }
}

/// Run all compliance checks on a torus.
pub fn run_full_compliance(space: &Torus) {
    assert_distance_reflexive(space);
    assert_distance_symmetric(space);
    assert_neighbours_symmetric(space);
    assert_neighbours_exclude_self(space);
    assert_canonical_ordering_complete(space);
    assert_rank_matches_ordering(space);
}
