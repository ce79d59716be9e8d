//! Canonical JSON report of a search run.
//!
//! The report is the external view of a [`SearchOutcome`]: status, solution,
//! explored order, counters, the grid fingerprint and the policy echo. Its
//! canonical bytes are stable across runs and processes for deterministic
//! policies, so [`SearchOutcome::report_digest`] can be compared directly.

use wayfinder_grid::canon::{canonical_json_bytes, CanonError};
use wayfinder_grid::hash::{canonical_hash, ContentHash};

use crate::search::{SearchOutcome, SearchStatus};
use crate::solution::Solution;
use crate::trace::{coord_to_json, expand_event_to_json};

/// Domain prefix for search report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"WAYFINDER::SEARCH_REPORT::V1\0";

impl SearchOutcome {
    /// Serialize the outcome to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Digest of [`SearchOutcome::to_canonical_json_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn report_digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let (status, solution) = match &self.status {
            SearchStatus::Solved(s) => ("solved", solution_to_json(s)),
            SearchStatus::Exhausted => ("exhausted", serde_json::Value::Null),
        };
        serde_json::json!({
            "explored": self.explored.iter().map(|&c| coord_to_json(c)).collect::<Vec<_>>(),
            "explored_count": self.explored_count,
            "frontier_high_water": self.frontier_high_water,
            "grid_digest": self.grid_digest.as_str(),
            "nodes_created": self.nodes_created,
            "policy": self.policy.to_json_value(),
            "solution": solution,
            "status": status,
            "trace": self.trace.iter().map(expand_event_to_json).collect::<Vec<_>>(),
        })
    }
}

fn solution_to_json(s: &Solution) -> serde_json::Value {
    serde_json::json!({
        "actions": s.action_labels(),
        "cells": s.cells().iter().map(|&c| coord_to_json(c)).collect::<Vec<_>>(),
        "start": coord_to_json(s.start()),
    })
}
