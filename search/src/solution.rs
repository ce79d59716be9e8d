//! The reconstructed start-to-goal path.

use wayfinder_grid::coord::{Action, Coordinate};

/// Ordered actions and the cell each action lands on.
///
/// `actions` and `cells` always have equal length; `cells[i]` is where
/// `actions[i]` leads. The start cell is kept separately, so an empty
/// solution (start == goal) still knows where it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    start: Coordinate,
    actions: Vec<Action>,
    cells: Vec<Coordinate>,
}

impl Solution {
    /// # Panics
    ///
    /// Debug builds assert `actions.len() == cells.len()`.
    #[must_use]
    pub fn new(start: Coordinate, actions: Vec<Action>, cells: Vec<Coordinate>) -> Self {
        debug_assert_eq!(actions.len(), cells.len(), "one cell per action");
        Self {
            start,
            actions,
            cells,
        }
    }

    #[must_use]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Start-inclusive coordinate sequence (`len() + 1` entries).
    #[must_use]
    pub fn path(&self) -> Vec<Coordinate> {
        let mut path = Vec::with_capacity(self.cells.len() + 1);
        path.push(self.start);
        path.extend_from_slice(&self.cells);
        path
    }

    /// Action labels in order (`"up"`, `"left"`, ...).
    #[must_use]
    pub fn action_labels(&self) -> Vec<&'static str> {
        self.actions.iter().map(|a| a.label()).collect()
    }

    /// Apply the actions to `start` one by one.
    ///
    /// Returns the final coordinate, or `None` if a step would go below zero.
    /// Does not consult any grid.
    #[must_use]
    pub fn replay(&self) -> Option<Coordinate> {
        self.actions
            .iter()
            .try_fold(self.start, |at, &action| at.step(action))
    }
}
