//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Failing to find a path
//! is not an error: it is reported as [`crate::search::SearchStatus::Exhausted`].

use wayfinder_grid::grid::GridError;

/// Popping from an empty frontier.
///
/// The engine treats this as the "no path" termination signal and never
/// surfaces it to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    EmptyFrontier,
}

impl std::fmt::Display for FrontierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFrontier => f.write_str("pop from empty frontier"),
        }
    }
}

impl std::error::Error for FrontierError {}

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is created; the engine stays in `Ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The grid violates a search precondition.
    InvalidGrid(GridError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGrid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGrid(e) => Some(e),
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::InvalidGrid(e)
    }
}
