//! Text rendering of a grid with an optional path/explored overlay.
//!
//! The overlay is plain coordinates so this crate never needs to know about
//! search types.

use std::collections::HashSet;

use crate::coord::Coordinate;
use crate::grid::Grid;

pub const WALL: char = '█';
pub const START: char = 'A';
pub const GOAL: char = 'B';
pub const PATH: char = '*';
pub const EXPLORED: char = '·';
pub const OPEN: char = ' ';

/// What to draw on top of the bare grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOverlay<'a> {
    /// Cells on the solution path.
    pub path: &'a [Coordinate],
    /// Cells the search processed.
    pub explored: &'a [Coordinate],
    /// Draw explored-but-off-path cells with [`EXPLORED`].
    pub show_explored: bool,
}

/// Render one line per row, each terminated by `\n`.
///
/// Priority per cell: wall, start, goal, path, explored, open.
#[must_use]
pub fn render(grid: &Grid, overlay: &RenderOverlay<'_>) -> String {
    let path: HashSet<Coordinate> = overlay.path.iter().copied().collect();
    let explored: HashSet<Coordinate> = if overlay.show_explored {
        overlay.explored.iter().copied().collect()
    } else {
        HashSet::new()
    };

    let mut out = String::with_capacity(grid.height() * (grid.width() * WALL.len_utf8() + 1));
    for row in grid.rows() {
        for cell in row {
            let ch = if cell.blocked {
                WALL
            } else if cell.coord == grid.start() {
                START
            } else if cell.coord == grid.goal() {
                GOAL
            } else if path.contains(&cell.coord) {
                PATH
            } else if explored.contains(&cell.coord) {
                EXPLORED
            } else {
                OPEN
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
