//! Neighbor generation and validity.
//!
//! Candidates are produced in [`Action::GENERATION_ORDER`] (up, left, right,
//! down). A candidate is valid iff it lies inside the grid and is not a wall.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use wayfinder_grid::coord::{Action, Coordinate};
use wayfinder_grid::grid::Grid;

use crate::policy::NeighborOrder;

/// A valid move out of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub action: Action,
    pub coord: Coordinate,
}

/// Valid neighbors of `coord` in generation order.
#[must_use]
pub fn valid_neighbors(grid: &Grid, coord: Coordinate) -> Vec<Neighbor> {
    Action::GENERATION_ORDER
        .iter()
        .filter_map(|&action| {
            coord
                .step(action)
                .filter(|&next| grid.is_open(next))
                .map(|next| Neighbor {
                    action,
                    coord: next,
                })
        })
        .collect()
}

/// Neighbor source for one solve. Holds the RNG when shuffling is enabled.
#[derive(Debug)]
pub struct NeighborGenerator {
    rng: Option<StdRng>,
}

impl NeighborGenerator {
    #[must_use]
    pub fn new(order: NeighborOrder) -> Self {
        let rng = match order {
            NeighborOrder::Generation => None,
            NeighborOrder::Shuffled { seed } => Some(StdRng::seed_from_u64(seed)),
        };
        Self { rng }
    }

    /// Valid neighbors of `coord`, shuffled if the policy asks for it.
    pub fn neighbors(&mut self, grid: &Grid, coord: Coordinate) -> Vec<Neighbor> {
        let mut neighbors = valid_neighbors(grid, coord);
        if let Some(rng) = self.rng.as_mut() {
            neighbors.shuffle(rng);
        }
        neighbors
    }
}
