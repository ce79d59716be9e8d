//! Text maze loader.
//!
//! One line per grid row. `#` is a wall, space or `.` is open, `A`/`S` marks
//! the start and `B`/`G` the goal. Line endings may be `\n` or `\r\n`;
//! trailing blank lines are ignored. Every row must have the same width.

use std::path::Path;

use log::debug;

use crate::coord::Coordinate;
use crate::grid::{Grid, GridError};

/// Failure to turn text into a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Io { path: String, detail: String },
    /// No rows after trimming trailing blank lines.
    Empty,
    UnknownCharacter { ch: char, at: Coordinate },
    MissingStart,
    MissingGoal,
    DuplicateStart { first: Coordinate, second: Coordinate },
    DuplicateGoal { first: Coordinate, second: Coordinate },
    Grid(GridError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read maze file {path}: {detail}"),
            Self::Empty => f.write_str("maze is empty"),
            Self::UnknownCharacter { ch, at } => {
                write!(f, "unknown maze character {ch:?} at {at}")
            }
            Self::MissingStart => f.write_str("no start point ('A' or 'S') found in the maze"),
            Self::MissingGoal => f.write_str("no goal point ('B' or 'G') found in the maze"),
            Self::DuplicateStart { first, second } => {
                write!(f, "second start point at {second} (first at {first})")
            }
            Self::DuplicateGoal { first, second } => {
                write!(f, "second goal point at {second} (first at {first})")
            }
            Self::Grid(e) => write!(f, "invalid maze layout: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for LoadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Parse a maze from text.
///
/// # Errors
///
/// See [`LoadError`]. Start and goal must each appear exactly once.
pub fn load_str(text: &str) -> Result<Grid, LoadError> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(LoadError::Empty);
    }

    let mut start: Option<Coordinate> = None;
    let mut goal: Option<Coordinate> = None;
    let mut rows = Vec::with_capacity(lines.len());

    for (row, line) in lines.iter().enumerate() {
        let mut walls = Vec::with_capacity(line.len());
        for (col, ch) in line.chars().enumerate() {
            let at = Coordinate::new(row, col);
            let blocked = match ch {
                '#' => true,
                ' ' | '.' => false,
                'A' | 'S' => {
                    if let Some(first) = start.replace(at) {
                        return Err(LoadError::DuplicateStart { first, second: at });
                    }
                    false
                }
                'B' | 'G' => {
                    if let Some(first) = goal.replace(at) {
                        return Err(LoadError::DuplicateGoal { first, second: at });
                    }
                    false
                }
                other => return Err(LoadError::UnknownCharacter { ch: other, at }),
            };
            walls.push(blocked);
        }
        rows.push(walls);
    }

    let start = start.ok_or(LoadError::MissingStart)?;
    let goal = goal.ok_or(LoadError::MissingGoal)?;
    let grid = Grid::from_rows(&rows, start, goal)?;
    debug!(
        "loaded {}x{} maze, start {start}, goal {goal}, {} open cells",
        grid.height(),
        grid.width(),
        grid.open_cell_count()
    );
    Ok(grid)
}

/// Read and parse a maze file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise as [`load_str`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    load_str(&text)
}
