//! Wayfinder Search: depth-first maze search with an index-based node arena.
//!
//! This crate depends only on `wayfinder_grid`. It performs no I/O; the
//! `log` macros it calls are no-ops unless the caller installs a logger.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfinder_grid  ←  wayfinder_search  ←  wayfinder_harness
//! (grid, loader)     (frontier, nodes)    (runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`search::SearchEngine`]: `Ready → Running → Solved | Exhausted`
//! - [`frontier::StackFrontier`]: LIFO frontier with O(1) coordinate lookup
//! - [`explored::ExploredSet`]: processed coordinates, in first-explored order
//! - [`node::NodeArena`]: node storage and parent-chain path reconstruction
//! - [`solution::Solution`]: start-to-goal actions and cells
//! - [`policy::SearchPolicy`]: neighbor order and trace recording

#![forbid(unsafe_code)]

pub mod error;
pub mod explored;
pub mod frontier;
pub mod neighbors;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
pub mod solution;
pub mod trace;
