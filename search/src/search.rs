//! Search entry point and the depth-first expansion loop.
//!
//! # Loop
//!
//! ```text
//! validate grid → root at start → push
//!   loop: pop (empty → Exhausted) → count → goal? (→ Solved)
//!         → mark explored → push unqueued, unexplored neighbors
//! ```
//!
//! All per-run state (node arena, frontier, explored set, counters) is local
//! to one [`SearchEngine::solve`] call, so a grid can be solved by any number
//! of engines at once.

use log::{debug, trace};

use wayfinder_grid::grid::Grid;
use wayfinder_grid::hash::ContentHash;

use crate::error::SearchError;
use crate::explored::ExploredSet;
use crate::frontier::StackFrontier;
use crate::neighbors::NeighborGenerator;
use crate::node::NodeArena;
use crate::policy::SearchPolicy;
use crate::solution::Solution;
use crate::trace::{CandidateOutcome, CandidateRecord, ExpandEvent};

/// Engine lifecycle.
///
/// `Ready` on construction; `Running` while a solve executes; each solve ends
/// in exactly one of `Solved` or `Exhausted`. A rejected grid leaves the
/// state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Ready,
    Running,
    Solved,
    Exhausted,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// Goal popped; path reconstructed.
    Solved(Solution),
    /// Frontier emptied without reaching the goal. Not an error.
    Exhausted,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    /// Coordinates processed, in first-explored order. On a solved run the
    /// goal is included as the last entry.
    pub explored: ExploredSet,
    /// Number of frontier pops.
    pub explored_count: u64,
    /// Nodes created, root included.
    pub nodes_created: u64,
    pub frontier_high_water: u64,
    /// Fingerprint of the grid that was searched.
    pub grid_digest: ContentHash,
    /// The policy the run used.
    pub policy: SearchPolicy,
    /// Expansion events; empty unless `policy.record_trace`.
    pub trace: Vec<ExpandEvent>,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self.status, SearchStatus::Solved(_))
    }

    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match &self.status {
            SearchStatus::Solved(solution) => Some(solution),
            SearchStatus::Exhausted => None,
        }
    }
}

/// Depth-first search engine bound to one read-only grid.
#[derive(Debug)]
pub struct SearchEngine<'g> {
    grid: &'g Grid,
    policy: SearchPolicy,
    state: EngineState,
}

impl<'g> SearchEngine<'g> {
    #[must_use]
    pub fn new(grid: &'g Grid, policy: SearchPolicy) -> Self {
        Self {
            grid,
            policy,
            state: EngineState::Ready,
        }
    }

    #[must_use]
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Run one depth-first search from start to goal.
    ///
    /// Each call starts from fresh per-run state; calling it again on the same
    /// grid with a deterministic policy gives the same outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidGrid`] if the grid fails
    /// [`Grid::validate`]. No search step is taken in that case.
    pub fn solve(&mut self) -> Result<SearchOutcome, SearchError> {
        self.grid.validate()?;

        self.state = EngineState::Running;
        debug!(
            "solving {}x{} grid from {} to {}",
            self.grid.height(),
            self.grid.width(),
            self.grid.start(),
            self.grid.goal()
        );

        let outcome = run(self.grid, &self.policy);

        self.state = if outcome.is_solved() {
            EngineState::Solved
        } else {
            EngineState::Exhausted
        };
        debug!(
            "search {:?} after {} pops, {} nodes created, frontier high water {}",
            self.state, outcome.explored_count, outcome.nodes_created, outcome.frontier_high_water
        );
        Ok(outcome)
    }
}

/// Validate `grid` and solve it with a fresh engine.
///
/// # Errors
///
/// As [`SearchEngine::solve`].
pub fn solve(grid: &Grid, policy: &SearchPolicy) -> Result<SearchOutcome, SearchError> {
    SearchEngine::new(grid, policy.clone()).solve()
}

fn run(grid: &Grid, policy: &SearchPolicy) -> SearchOutcome {
    let mut arena = NodeArena::new();
    let mut frontier = StackFrontier::new();
    let mut explored = ExploredSet::new();
    let mut neighbors = NeighborGenerator::new(policy.neighbor_order);
    let mut events: Vec<ExpandEvent> = Vec::new();
    let mut explored_count: u64 = 0;
    let goal = grid.goal();

    let root = arena.root(grid.start());
    frontier.push(root, grid.start());

    let status = loop {
        if log::log_enabled!(log::Level::Trace) {
            let queued: Vec<String> = frontier.iter().map(|e| e.coord.to_string()).collect();
            trace!("frontier before pop: [{}]", queued.join(", "));
        }

        // EmptyFrontier is the normal no-path signal.
        let Ok(current) = frontier.pop() else {
            break SearchStatus::Exhausted;
        };
        let expansion_order = explored_count;
        let frontier_len = frontier.len();
        explored_count += 1;
        trace!("popped node {} at {}", current.node_id, current.coord);

        if current.coord == goal {
            explored.mark_explored(current.coord);
            if policy.record_trace {
                events.push(ExpandEvent {
                    expansion_order,
                    node_id: current.node_id,
                    coord: current.coord,
                    frontier_len,
                    is_goal: true,
                    candidates: Vec::new(),
                });
            }
            break SearchStatus::Solved(arena.reconstruct(current.node_id));
        }

        explored.mark_explored(current.coord);

        let mut candidates = Vec::new();
        for neighbor in neighbors.neighbors(grid, current.coord) {
            let outcome = if frontier.contains_coordinate(neighbor.coord) {
                CandidateOutcome::AlreadyQueued
            } else if explored.is_explored(neighbor.coord) {
                CandidateOutcome::AlreadyExplored
            } else {
                let child = arena.child(current.node_id, neighbor.coord, neighbor.action);
                frontier.push(child, neighbor.coord);
                trace!("pushed node {child} at {} ({})", neighbor.coord, neighbor.action);
                CandidateOutcome::Pushed { to_node: child }
            };
            if policy.record_trace {
                candidates.push(CandidateRecord {
                    action: neighbor.action,
                    coord: neighbor.coord,
                    outcome,
                });
            }
        }

        if policy.record_trace {
            events.push(ExpandEvent {
                expansion_order,
                node_id: current.node_id,
                coord: current.coord,
                frontier_len,
                is_goal: false,
                candidates,
            });
        }
    };

    SearchOutcome {
        status,
        explored,
        explored_count,
        nodes_created: arena.len() as u64,
        frontier_high_water: frontier.high_water() as u64,
        grid_digest: grid.digest(),
        policy: policy.clone(),
        trace: events,
    }
}
