//! The rectangular maze grid.
//!
//! A [`Grid`] is built once (by the loader or directly by a caller) and is
//! read-only afterwards. Construction only checks structure (cell count,
//! rectangular rows). Search preconditions (non-zero size, start and goal in
//! bounds and open) are checked by [`Grid::validate`], which the search engine
//! calls before every run.

use crate::coord::Coordinate;
use crate::hash::{canonical_hash, ContentHash, DOMAIN_GRID};

/// One grid cell: its position and whether it is a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coordinate,
    pub blocked: bool,
}

/// Structural or precondition failure of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Height or width is zero.
    ZeroDimensions { height: usize, width: usize },
    /// The flat wall list does not have `height * width` entries.
    CellCountMismatch { expected: usize, actual: usize },
    /// A row's width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    StartOutOfBounds { start: Coordinate },
    GoalOutOfBounds { goal: Coordinate },
    StartBlocked { start: Coordinate },
    GoalBlocked { goal: Coordinate },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimensions { height, width } => {
                write!(f, "grid has zero dimensions ({height}x{width})")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has width {actual}, expected {expected}"),
            Self::StartOutOfBounds { start } => write!(f, "start {start} is outside the grid"),
            Self::GoalOutOfBounds { goal } => write!(f, "goal {goal} is outside the grid"),
            Self::StartBlocked { start } => write!(f, "start {start} is on a wall"),
            Self::GoalBlocked { goal } => write!(f, "goal {goal} is on a wall"),
        }
    }
}

impl std::error::Error for GridError {}

/// Row-major rectangular grid with a start and a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
    start: Coordinate,
    goal: Coordinate,
}

impl Grid {
    /// Build a grid from a flat row-major wall list.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellCountMismatch`] if `blocked.len()` is not
    /// `height * width`.
    pub fn new(
        height: usize,
        width: usize,
        blocked: &[bool],
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Self, GridError> {
        let expected = height.checked_mul(width).ok_or(GridError::CellCountMismatch {
            expected: usize::MAX,
            actual: blocked.len(),
        })?;
        if blocked.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: blocked.len(),
            });
        }
        let cells = blocked
            .iter()
            .enumerate()
            .map(|(i, &blocked)| Cell {
                coord: Coordinate::new(i / width, i % width),
                blocked,
            })
            .collect();
        Ok(Self {
            height,
            width,
            cells,
            start,
            goal,
        })
    }

    /// Build a grid from rows of wall flags. Width is taken from the first row.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRow`] if any row differs in width.
    pub fn from_rows(
        rows: &[Vec<bool>],
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut flat = Vec::with_capacity(rows.len() * width);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            flat.extend_from_slice(cells);
        }
        Self::new(rows.len(), width, &flat, start, goal)
    }

    /// Check the preconditions a search needs.
    ///
    /// # Errors
    ///
    /// Zero dimensions, start or goal out of bounds, start or goal on a wall.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.height == 0 || self.width == 0 {
            return Err(GridError::ZeroDimensions {
                height: self.height,
                width: self.width,
            });
        }
        let start = self.start;
        let goal = self.goal;
        match self.cell(start) {
            None => return Err(GridError::StartOutOfBounds { start }),
            Some(cell) if cell.blocked => return Err(GridError::StartBlocked { start }),
            Some(_) => {}
        }
        match self.cell(goal) {
            None => Err(GridError::GoalOutOfBounds { goal }),
            Some(cell) if cell.blocked => Err(GridError::GoalBlocked { goal }),
            Some(_) => Ok(()),
        }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[must_use]
    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    /// Iterate rows as slices of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on 0; an empty grid has no rows either way.
        self.cells.chunks(self.width.max(1))
    }

    #[must_use]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// The cell at `coord`, or `None` if out of bounds.
    #[must_use]
    pub fn cell(&self, coord: Coordinate) -> Option<&Cell> {
        if !self.in_bounds(coord) {
            return None;
        }
        self.cells.get(coord.row * self.width + coord.col)
    }

    /// In bounds and not a wall.
    #[must_use]
    pub fn is_open(&self, coord: Coordinate) -> bool {
        self.cell(coord).is_some_and(|c| !c.blocked)
    }

    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.blocked).count()
    }

    /// Content fingerprint over dimensions, start, goal and the wall layout.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let mut data = Vec::with_capacity(48 + self.cells.len());
        for n in [
            self.height,
            self.width,
            self.start.row,
            self.start.col,
            self.goal.row,
            self.goal.col,
        ] {
            data.extend_from_slice(&u64::try_from(n).unwrap_or(u64::MAX).to_le_bytes());
        }
        data.extend(self.cells.iter().map(|c| u8::from(c.blocked)));
        canonical_hash(DOMAIN_GRID, &data)
    }
}
