//! Harness runner: load → solve → render → report.
//!
//! # Pipeline
//!
//! ```text
//! load_file() → [strategy dispatch] → solve() (timed)
//!   → render() with path/explored overlay → report_digest()
//! ```

use std::time::{Duration, Instant};

use log::info;

use wayfinder_grid::grid::Grid;
use wayfinder_grid::hash::ContentHash;
use wayfinder_grid::load::{load_file, LoadError};
use wayfinder_grid::render::{render, RenderOverlay};
use wayfinder_search::error::SearchError;
use wayfinder_search::search::{solve, SearchOutcome};

use crate::args::{RunConfig, Strategy};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The maze file could not be loaded.
    Load(LoadError),
    /// The search rejected the grid.
    Search(SearchError),
    /// Canonical report serialization failed.
    Canon { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::Canon { detail } => write!(f, "report serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Canon { .. } => None,
        }
    }
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// The result of one harness run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub grid: Grid,
    pub outcome: SearchOutcome,
    /// Wall-clock time of the solve only (not load or render).
    pub elapsed: Duration,
    /// The maze with the solution path (and optionally explored cells).
    pub rendered: String,
    pub report_digest: ContentHash,
}

impl RunReport {
    /// Human-readable statistics, one line each.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        match self.outcome.solution() {
            Some(solution) => lines.push(format!("Solution is {} steps.", solution.len())),
            None => lines.push("No solution found".to_string()),
        }
        lines.push(format!("Explored {} nodes", self.outcome.explored_count));
        lines.push(format!("Time to solve: {:?}", self.elapsed));
        lines
    }
}

/// Load the configured maze file and run it.
///
/// # Errors
///
/// [`RunError::Load`] if the file cannot be loaded, otherwise as [`run_grid`].
pub fn run(config: &RunConfig) -> Result<RunReport, RunError> {
    let grid = load_file(&config.file)?;
    run_grid(grid, config)
}

/// Solve an already-built grid with the configured strategy and policy.
///
/// # Errors
///
/// [`RunError::Search`] for an invalid grid, [`RunError::Canon`] if the
/// report cannot be serialized.
pub fn run_grid(grid: Grid, config: &RunConfig) -> Result<RunReport, RunError> {
    let started = Instant::now();
    let outcome = match config.strategy {
        Strategy::DepthFirst => solve(&grid, &config.policy)?,
    };
    let elapsed = started.elapsed();

    let path = outcome.solution().map(|s| s.path()).unwrap_or_default();
    let rendered = render(
        &grid,
        &RenderOverlay {
            path: &path,
            explored: outcome.explored.as_slice(),
            show_explored: config.show_explored,
        },
    );
    let report_digest = outcome.report_digest().map_err(|e| RunError::Canon {
        detail: e.to_string(),
    })?;

    info!(
        "{} on {}: solved={} explored={} in {elapsed:?}",
        config.strategy.name(),
        config.file.display(),
        outcome.is_solved(),
        outcome.explored_count
    );

    Ok(RunReport {
        grid,
        outcome,
        elapsed,
        rendered,
        report_digest,
    })
}
