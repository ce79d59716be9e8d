//! `wayfinder`: solve a maze file with depth-first search and print the result.
//!
//! Usage: `wayfinder --help`.

use std::process::ExitCode;

fn main() -> ExitCode {
    wayfinder_harness::cli::run_cli()
}
