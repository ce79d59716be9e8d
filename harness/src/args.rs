//! Command-line arguments for the `wayfinder` binary.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use wayfinder_search::policy::{NeighborOrder, SearchPolicy};

/// Search strategy selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Depth-first search with a stack frontier
    #[default]
    #[value(name = "dfs")]
    DepthFirst,
}

impl Strategy {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
        }
    }
}

/// Solve a text maze and print the path.
#[derive(Debug, Parser)]
#[command(name = "wayfinder", version)]
#[command(about = "Solve a text maze with depth-first search")]
#[command(after_help = "Set RUST_LOG=debug (or trace) for search narration on stderr.")]
pub struct Cli {
    /// Maze file: `#` wall, space or `.` open, `A`/`S` start, `B`/`G` goal
    #[arg(
        long,
        value_name = "PATH",
        default_value = "maze.txt",
        value_parser = parse_maze_path
    )]
    pub file: PathBuf,

    /// Search strategy
    #[arg(long = "search", value_name = "NAME", value_enum, default_value = "dfs")]
    pub strategy: Strategy,

    /// Shuffle valid neighbors with this seed
    #[arg(long, value_name = "U64")]
    pub seed: Option<u64>,

    /// Record the expansion trace in the report
    #[arg(long)]
    pub trace: bool,

    /// Mark explored cells in the rendered maze
    #[arg(long)]
    pub show_explored: bool,
}

fn parse_maze_path(raw: &str) -> Result<PathBuf, String> {
    if raw.is_empty() {
        return Err("maze path must not be empty".to_string());
    }
    Ok(PathBuf::from(raw))
}

/// Everything one CLI invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub file: PathBuf,
    pub strategy: Strategy,
    pub policy: SearchPolicy,
    pub show_explored: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("maze.txt"),
            strategy: Strategy::default(),
            policy: SearchPolicy::default(),
            show_explored: false,
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let neighbor_order = match cli.seed {
            Some(seed) => NeighborOrder::Shuffled { seed },
            None => NeighborOrder::Generation,
        };
        Self {
            file: cli.file,
            strategy: cli.strategy,
            policy: SearchPolicy {
                neighbor_order,
                record_trace: cli.trace,
            },
            show_explored: cli.show_explored,
        }
    }
}

/// Parse arguments (without the program name) into a [`RunConfig`].
///
/// # Errors
///
/// The [`clap::Error`] for unknown flags and missing or invalid values.
/// `--help` and `--version` also come back as errors, with kind
/// `DisplayHelp` / `DisplayVersion`; [`clap::Error::exit`] prints them.
pub fn parse_args<I, T>(args: I) -> Result<RunConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv =
        std::iter::once(OsString::from("wayfinder")).chain(args.into_iter().map(Into::into));
    Cli::try_parse_from(argv).map(RunConfig::from)
}
