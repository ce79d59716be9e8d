//! LIFO frontier: the stack that makes the search depth-first.
//!
//! Alongside the stack the frontier keeps a per-coordinate count of queued
//! entries, so [`StackFrontier::contains_coordinate`] is O(1) instead of a
//! scan over the stack. Observable behavior is the same as a linear scan.

use std::collections::HashMap;

use wayfinder_grid::coord::Coordinate;

use crate::error::FrontierError;
use crate::node::NodeId;

/// A queued node: its arena id and the coordinate it stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node_id: NodeId,
    pub coord: Coordinate,
}

/// Stack frontier.
///
/// Maintains:
/// - A `Vec` used as a stack (push and pop at the tail)
/// - A `HashMap<Coordinate, usize>` of queued-entry counts
/// - The high-water mark of stack size
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<FrontierEntry>,
    queued: HashMap<Coordinate, usize>,
    high_water: usize,
}

impl StackFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node at the tail. Always succeeds; duplicates are the
    /// caller's concern.
    pub fn push(&mut self, node_id: NodeId, coord: Coordinate) {
        self.stack.push(FrontierEntry { node_id, coord });
        *self.queued.entry(coord).or_insert(0) += 1;
        self.high_water = self.high_water.max(self.stack.len());
    }

    /// Remove and return the most recently pushed node.
    ///
    /// # Errors
    ///
    /// [`FrontierError::EmptyFrontier`] when nothing is queued.
    pub fn pop(&mut self) -> Result<FrontierEntry, FrontierError> {
        let entry = self.stack.pop().ok_or(FrontierError::EmptyFrontier)?;
        if let Some(count) = self.queued.get_mut(&entry.coord) {
            *count -= 1;
            if *count == 0 {
                self.queued.remove(&entry.coord);
            }
        }
        Ok(entry)
    }

    /// Whether any queued node stands on `coord`.
    #[must_use]
    pub fn contains_coordinate(&self, coord: Coordinate) -> bool {
        self.queued.contains_key(&coord)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Largest size the stack has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Queued entries, bottom of the stack first.
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEntry> {
        self.stack.iter()
    }
}
