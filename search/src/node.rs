//! Search nodes and the arena that owns them.
//!
//! Nodes live in a growable `Vec` and refer to their parent by index. A
//! node's parent is always created before it, so parent links can never form
//! a cycle and path reconstruction always terminates at the root.

use wayfinder_grid::coord::{Action, Coordinate};

use crate::solution::Solution;

/// Index of a node in its [`NodeArena`]; also its creation order.
pub type NodeId = usize;

/// A point reached during search, plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Parent node (`None` for root).
    pub parent_id: Option<NodeId>,
    /// The grid cell this node stands on.
    pub coord: Coordinate,
    /// The move that produced this node from its parent (`None` for root).
    pub action: Option<Action>,
}

/// Owner of every node created during one solve.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the root node. Any previous contents are discarded.
    pub fn root(&mut self, coord: Coordinate) -> NodeId {
        self.nodes.clear();
        self.nodes.push(SearchNode {
            parent_id: None,
            coord,
            action: None,
        });
        0
    }

    /// Create a child of `parent` reached by `action`.
    pub fn child(&mut self, parent: NodeId, coord: Coordinate, action: Action) -> NodeId {
        debug_assert!(parent < self.nodes.len(), "parent must already exist");
        self.nodes.push(SearchNode {
            parent_id: Some(parent),
            coord,
            action: Some(action),
        });
        self.nodes.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Follow parent links from `goal` back to the root and return the path
    /// in start-to-goal order.
    ///
    /// The root contributes its coordinate as the solution start but no
    /// action or cell.
    ///
    /// # Panics
    ///
    /// Panics if `goal` was not returned by this arena's [`NodeArena::root`]
    /// or [`NodeArena::child`].
    #[must_use]
    pub fn reconstruct(&self, goal: NodeId) -> Solution {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut node = &self.nodes[goal];
        while let (Some(parent), Some(action)) = (node.parent_id, node.action) {
            actions.push(action);
            cells.push(node.coord);
            node = &self.nodes[parent];
        }
        actions.reverse();
        cells.reverse();
        Solution::new(node.coord, actions, cells)
    }
}
