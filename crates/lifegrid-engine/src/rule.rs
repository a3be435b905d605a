//! The B3/S23 transition rule and toroidal neighbour counting.

use lifegrid_space::Torus;

/// Next state of a single cell given its current state and the number of
/// live neighbours.
///
/// A dead cell with exactly 3 live neighbours is born. A live cell with
/// fewer than 2 or more than 3 live neighbours dies. Everything else keeps
/// its state.
pub fn next_state(alive: bool, live_neighbours: u8) -> bool {
    match (alive, live_neighbours) {
        (false, 3) => true,
        (true, n) if !(2..=3).contains(&n) => false,
        (state, _) => state,
    }
}

/// Count live cells in the 3x3 block around `(x, y)` on `torus`, excluding
/// every position that wraps back onto `(x, y)` itself.
///
/// `cells` is the row-major grid for `torus` and `(x, y)` must be in range.
/// Positions that coincide with each other (on an axis of length 2) are
/// counted once per offset.
pub fn live_neighbours(cells: &[bool], torus: &Torus, x: i32, y: i32) -> u8 {
    let cols = torus.cols() as usize;
    let mut count = 0;
    for dy in -1..=1 {
        let row = torus.wrap_y(y + dy);
        for dx in -1..=1 {
            let col = torus.wrap_x(x + dx);
            if col == x && row == y {
                continue;
            }
            if cells[(row as usize) * cols + col as usize] {
                count += 1;
            }
        }
    }
    count
}
