//! Expansion trace: the optional per-pop audit log.
//!
//! Recorded only when [`crate::policy::SearchPolicy::record_trace`] is set.
//! Recording never changes what the search does.

use wayfinder_grid::coord::{Action, Coordinate};

use crate::node::NodeId;

/// A single frontier-pop + neighbor-expansion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of frontier pops (0-based).
    pub expansion_order: u64,
    /// The popped node.
    pub node_id: NodeId,
    pub coord: Coordinate,
    /// Frontier size right after the pop.
    pub frontier_len: usize,
    /// True for the final pop of a solved run. Goal pops have no candidates.
    pub is_goal: bool,
    /// Valid neighbors in the order they were considered.
    pub candidates: Vec<CandidateRecord>,
}

/// One valid neighbor and what happened to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateRecord {
    pub action: Action,
    pub coord: Coordinate,
    pub outcome: CandidateOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// A new node was created and pushed.
    Pushed { to_node: NodeId },
    /// A node on this coordinate is already on the frontier.
    AlreadyQueued,
    /// This coordinate was already processed.
    AlreadyExplored,
}

impl CandidateOutcome {
    #[must_use]
    pub fn is_pushed(self) -> bool {
        matches!(self, Self::Pushed { .. })
    }
}

pub(crate) fn coord_to_json(c: Coordinate) -> serde_json::Value {
    serde_json::json!([c.row, c.col])
}

pub(crate) fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_to_json).collect::<Vec<_>>(),
        "coord": coord_to_json(e.coord),
        "expansion_order": e.expansion_order,
        "frontier_len": e.frontier_len,
        "is_goal": e.is_goal,
        "node_id": e.node_id,
    })
}

fn candidate_to_json(r: &CandidateRecord) -> serde_json::Value {
    serde_json::json!({
        "action": r.action.label(),
        "coord": coord_to_json(r.coord),
        "outcome": outcome_to_json(r.outcome),
    })
}

fn outcome_to_json(o: CandidateOutcome) -> serde_json::Value {
    match o {
        CandidateOutcome::Pushed { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "pushed"})
        }
        CandidateOutcome::AlreadyQueued => serde_json::json!({"type": "already_queued"}),
        CandidateOutcome::AlreadyExplored => serde_json::json!({"type": "already_explored"}),
    }
}
