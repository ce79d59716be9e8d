//! Grid coordinates and the four movement actions.

use std::fmt;

/// A cell position: `(row, col)`, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The coordinate one step away in the direction of `action`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant
    /// (row or column below zero). Upper bounds are the grid's business.
    #[must_use]
    pub fn step(self, action: Action) -> Option<Self> {
        match action {
            Action::Up => self.row.checked_sub(1).map(|row| Self::new(row, self.col)),
            Action::Left => self.col.checked_sub(1).map(|col| Self::new(self.row, col)),
            Action::Right => self.col.checked_add(1).map(|col| Self::new(self.row, col)),
            Action::Down => self.row.checked_add(1).map(|row| Self::new(row, self.col)),
        }
    }

    /// Manhattan distance: `|Δrow| + |Δcol|`.
    #[must_use]
    pub fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single discrete move between orthogonally adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Left,
    Right,
    Down,
}

impl Action {
    /// Candidate generation order. Exploration bias depends on it, so traces
    /// are only reproducible while this order is fixed.
    pub const GENERATION_ORDER: [Action; 4] =
        [Action::Up, Action::Left, Action::Right, Action::Down];

    /// Lowercase label used in reports and traces.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Left => "left",
            Self::Right => "right",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
