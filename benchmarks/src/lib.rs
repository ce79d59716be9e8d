//! Grid builders shared by the benchmark suites.
//!
//! Each builder gives one search regime: wide branching (open room), long
//! single corridor (serpentine), full exhaustion (sealed goal).

use wayfinder_grid::coord::Coordinate;
use wayfinder_grid::grid::Grid;

/// All-open `side` x `side` room, corner to corner.
///
/// # Panics
///
/// Panics if `side` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn open_room(side: usize) -> Grid {
    assert!(side > 0);
    Grid::new(
        side,
        side,
        &vec![false; side * side],
        Coordinate::new(0, 0),
        Coordinate::new(side - 1, side - 1),
    )
    .expect("open room dimensions match")
}

/// Back-and-forth corridor: open even rows joined by one gap in each odd
/// wall row, alternating between the right and left ends.
///
/// `rows` is rounded up to the next odd number so the goal row is open.
///
/// # Panics
///
/// Panics if `width` is zero.
#[must_use]
pub fn serpentine(rows: usize, width: usize) -> Grid {
    assert!(width > 0);
    let height = rows | 1;
    let mut walls = Vec::with_capacity(height * width);
    for row in 0..height {
        if row % 2 == 0 {
            walls.extend(std::iter::repeat(false).take(width));
        } else {
            let gap = if (row / 2) % 2 == 0 { width - 1 } else { 0 };
            walls.extend((0..width).map(|col| col != gap));
        }
    }
    let goal_col = if (height / 2) % 2 == 0 { 0 } else { width - 1 };
    Grid::new(
        height,
        width,
        &walls,
        Coordinate::new(0, 0),
        Coordinate::new(height - 1, goal_col),
    )
    .expect("serpentine dimensions match")
}

/// Open room whose goal, in the bottom-right corner, is walled off. Every
/// other cell is explored before the search gives up.
///
/// # Panics
///
/// Panics if `side` is less than three.
#[must_use]
pub fn sealed_goal(side: usize) -> Grid {
    assert!(side >= 3);
    let mut walls = vec![false; side * side];
    walls[(side - 2) * side + (side - 1)] = true;
    walls[(side - 1) * side + (side - 2)] = true;
    Grid::new(
        side,
        side,
        &walls,
        Coordinate::new(0, 0),
        Coordinate::new(side - 1, side - 1),
    )
    .expect("sealed room dimensions match")
}
