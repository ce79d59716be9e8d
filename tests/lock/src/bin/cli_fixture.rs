//! The `wayfinder` command, built inside the lock-test package so the
//! end-to-end tests can spawn it.
//!
//! Usage: same flags as `wayfinder`.

use std::process::ExitCode;

fn main() -> ExitCode {
    wayfinder_harness::cli::run_cli()
}
