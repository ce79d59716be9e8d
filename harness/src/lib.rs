//! Wayfinder Harness: file-to-report orchestration around the search core.
//!
//! The harness loads a maze, hands the grid to `wayfinder_search`, times the
//! solve, and renders the result. It does NOT implement search logic.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod cli;
pub mod runner;
