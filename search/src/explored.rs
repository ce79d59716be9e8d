//! Explored set: coordinates already popped and processed.

use std::collections::HashSet;

use wayfinder_grid::coord::Coordinate;

/// Hash-backed membership plus first-explored order.
///
/// The order is what reports and renderers iterate, so output never depends
/// on hash iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploredSet {
    seen: HashSet<Coordinate>,
    order: Vec<Coordinate>,
}

impl ExploredSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `coord` as explored. Idempotent; returns `true` on first mark.
    pub fn mark_explored(&mut self, coord: Coordinate) -> bool {
        let fresh = self.seen.insert(coord);
        if fresh {
            self.order.push(coord);
        }
        fresh
    }

    #[must_use]
    pub fn is_explored(&self, coord: Coordinate) -> bool {
        self.seen.contains(&coord)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Explored coordinates in the order they were first marked.
    #[must_use]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.order.iter()
    }
}
