//! End-to-end locks on the `wayfinder` command: stdout layout, exit status,
//! argument diagnostics.

use std::io::Write;
use std::process::{Command, Output};

use lock_tests::maze_fixtures::SCENARIO_A;

fn wayfinder(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cli_fixture"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn cli_fixture")
}

fn write_maze(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

fn stdout_of(out: Output) -> String {
    String::from_utf8(out.stdout).unwrap()
}

fn stderr_of(out: Output) -> String {
    String::from_utf8(out.stderr).unwrap()
}

#[test]
fn solves_and_prints_rendering() {
    let file = write_maze("#####\n#A  #\n### #\n#B  #\n#####\n");
    let out = wayfinder(&["--file", &file.path().to_string_lossy()]);
    assert!(out.status.success());

    let stdout = stdout_of(out);
    let expected = "Solution:\n█████\n█A**█\n███*█\n█B**█\n█████\n";
    assert!(stdout.starts_with(expected), "{stdout}");
    assert!(stdout.contains("Solution is 6 steps.\n"));
    assert!(stdout.contains("Explored 7 nodes\n"));
    assert!(stdout.contains("Report digest: sha256:"));
}

#[test]
fn unsolvable_maze_exits_cleanly() {
    let file = write_maze("A#B\n");
    let out = wayfinder(&["--file", &file.path().to_string_lossy()]);
    assert!(out.status.success());
    let stdout = stdout_of(out);
    assert!(!stdout.contains("Solution:"));
    assert!(stdout.contains("No solution found\n"));
}

#[test]
fn trace_flag_prints_event_count() {
    let file = write_maze(SCENARIO_A);
    let out = wayfinder(&["--file", &file.path().to_string_lossy(), "--trace"]);
    let stdout = stdout_of(out);
    assert!(stdout.contains("Expansion trace: 5 events\n"), "{stdout}");
}

#[test]
fn help_succeeds() {
    let out = wayfinder(&["--help"]);
    assert!(out.status.success());
    let stdout = stdout_of(out);
    assert!(stdout.contains("--file"));
    assert!(stdout.contains("--show-explored"));
}

#[test]
fn unsupported_strategy_fails_with_diagnostic() {
    let out = wayfinder(&["--search", "astar"]);
    assert!(!out.status.success());
    assert!(stderr_of(out).contains("invalid value 'astar'"));
}

#[test]
fn flag_is_not_taken_as_seed_value() {
    let out = wayfinder(&["--seed", "--trace"]);
    assert!(!out.status.success());
    assert!(stderr_of(out).contains("--seed"));
}

#[test]
fn empty_file_path_rejected() {
    let out = wayfinder(&["--file="]);
    assert!(!out.status.success());
    assert!(stderr_of(out).contains("maze path must not be empty"));
}

#[test]
fn missing_file_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("none.txt");
    let out = wayfinder(&["--file", &missing.to_string_lossy()]);
    assert!(!out.status.success());
    assert!(stderr_of(out).contains("cannot read maze file"));
}
