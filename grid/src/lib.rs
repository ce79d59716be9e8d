//! Wayfinder Grid: the maze data model and its plain-data collaborators.
//!
//! This crate owns everything the search engine reads but never writes:
//! the rectangular [`grid::Grid`], its [`coord::Coordinate`]s and movement
//! [`coord::Action`]s, the text loader, the text renderer, and the canonical
//! JSON + hashing primitives used to fingerprint grids and reports.
//!
//! # Module Dependency Direction
//!
//! `hash` ← `canon`, `coord` ← `grid` ← `load`, `render`
//!
//! Nothing here depends on `wayfinder_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod coord;
pub mod grid;
pub mod hash;
pub mod load;
pub mod render;
