//! Harness locks: argument parsing feeding the runner end to end.

use std::io::Write;

use lock_tests::maze_fixtures::{BRAIDED, ENCLOSED_GOAL};
use wayfinder_harness::args::parse_args;
use wayfinder_harness::runner::{run, RunError};
use wayfinder_search::policy::NeighborOrder;

fn write_maze(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn args_for(file: &tempfile::NamedTempFile, extra: &[&str]) -> Vec<String> {
    let mut args = vec![
        "--file".to_string(),
        file.path().to_string_lossy().to_string(),
    ];
    args.extend(extra.iter().map(ToString::to_string));
    args
}

#[test]
fn parsed_config_runs_braided_maze() {
    let file = write_maze(BRAIDED);
    let config = parse_args(args_for(&file, &["--search", "dfs"])).unwrap();
    let report = run(&config).unwrap();

    assert!(report.outcome.is_solved());
    let steps = report.outcome.solution().unwrap().len();
    assert_eq!(report.summary_lines()[0], format!("Solution is {steps} steps."));
    assert!(report.summary_lines()[2].starts_with("Time to solve: "));
}

#[test]
fn trace_and_seed_flags_reach_the_policy() {
    let file = write_maze(BRAIDED);
    let config = parse_args(args_for(&file, &["--trace", "--seed", "17"])).unwrap();
    assert_eq!(config.policy.neighbor_order, NeighborOrder::Shuffled { seed: 17 });

    let report = run(&config).unwrap();
    assert_eq!(
        report.outcome.trace.len() as u64,
        report.outcome.explored_count
    );
    assert_eq!(report.outcome.policy, config.policy);
}

#[test]
fn enclosed_goal_reports_no_solution() {
    let file = write_maze(ENCLOSED_GOAL);
    let config = parse_args(args_for(&file, &["--show-explored"])).unwrap();
    let report = run(&config).unwrap();
    assert_eq!(report.summary_lines()[0], "No solution found");
    assert_eq!(report.summary_lines()[1], "Explored 14 nodes");
    assert!(report.rendered.contains('·'));
    assert!(!report.rendered.contains('*'));
}

#[test]
fn unsupported_strategy_rejected_before_loading() {
    let err = parse_args(["--search", "bfs", "--file", "does-not-exist.txt"]).unwrap_err();
    assert!(err.to_string().contains("'bfs'"), "{err}");
}

#[test]
fn malformed_file_is_load_error() {
    let file = write_maze("S..\n...\n");
    let config = parse_args(args_for(&file, &[])).unwrap();
    assert!(matches!(run(&config), Err(RunError::Load(_))));
}
