//! The `wayfinder` command: parse arguments, run, print.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::args::{parse_args, RunConfig};
use crate::runner::{run, RunReport};

/// Entry point shared by the `wayfinder` binary and its test fixture.
///
/// Installs `env_logger`, so `RUST_LOG` controls stderr narration. Argument
/// errors and `--help` exit through clap with its own status codes.
#[must_use]
pub fn run_cli() -> ExitCode {
    env_logger::init();

    let config = match parse_args(std::env::args_os().skip(1)) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    let report = match run(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match print_report(&mut io::stdout().lock(), &config, &report) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: cannot write output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Write the rendered maze and run statistics.
///
/// # Errors
///
/// Propagates write failures on `out`.
pub fn print_report(
    out: &mut impl Write,
    config: &RunConfig,
    report: &RunReport,
) -> io::Result<()> {
    if report.outcome.is_solved() {
        writeln!(out, "Solution:")?;
    }
    write!(out, "{}", report.rendered)?;
    for line in report.summary_lines() {
        writeln!(out, "{line}")?;
    }
    if config.policy.record_trace {
        writeln!(out, "Expansion trace: {} events", report.outcome.trace.len())?;
    }
    writeln!(out, "Report digest: {}", report.report_digest)
}
