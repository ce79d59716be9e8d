//! Search property locks: path validity, explored-set semantics, idempotence,
//! seeded shuffling, concurrent independent solves.

use std::collections::HashSet;

use lock_tests::maze_fixtures::{
    assert_valid_path, corridor, maze, open_grid, reachable_open_cells, BRAIDED, ENCLOSED_GOAL,
    SCENARIO_A, WALLED_OFF,
};
use wayfinder_grid::coord::Coordinate;
use wayfinder_grid::grid::{Grid, GridError};
use wayfinder_search::error::SearchError;
use wayfinder_search::policy::SearchPolicy;
use wayfinder_search::search::{solve, SearchStatus};
use wayfinder_search::trace::CandidateOutcome;

fn all_fixtures() -> Vec<Grid> {
    vec![
        maze(SCENARIO_A),
        maze(ENCLOSED_GOAL),
        maze(WALLED_OFF),
        maze(BRAIDED),
        open_grid(1, 1),
        open_grid(6, 9),
        corridor(12),
    ]
}

// ---------------------------------------------------------------------------
// Corridors
// ---------------------------------------------------------------------------

#[test]
fn corridor_solutions_are_straight() {
    for len in 1..=16 {
        let grid = corridor(len);
        let outcome = solve(&grid, &SearchPolicy::default()).unwrap();
        let solution = outcome.solution().expect("corridor is solvable");
        assert_valid_path(&grid, solution);
        assert_eq!(solution.len(), grid.start().manhattan(grid.goal()));
        assert!(solution.action_labels().iter().all(|&a| a == "right"));
    }
}

#[test]
fn open_grid_paths_are_at_least_manhattan() {
    for (h, w) in [(2, 2), (3, 7), (8, 5), (10, 10)] {
        let grid = open_grid(h, w);
        let outcome = solve(&grid, &SearchPolicy::default()).unwrap();
        let solution = outcome.solution().unwrap();
        assert_valid_path(&grid, solution);
        assert!(solution.len() >= grid.start().manhattan(grid.goal()));
    }
}

// ---------------------------------------------------------------------------
// Explored-set semantics
// ---------------------------------------------------------------------------

#[test]
fn explored_coordinates_are_unique_and_open() {
    for grid in all_fixtures() {
        let outcome = solve(&grid, &SearchPolicy::default()).unwrap();
        let unique: HashSet<Coordinate> = outcome.explored.iter().copied().collect();
        assert_eq!(unique.len(), outcome.explored.len(), "no coordinate twice");
        assert!(outcome.explored.iter().all(|&cell| grid.is_open(cell)));
        assert_eq!(outcome.explored_count as usize, outcome.explored.len());
        assert!(outcome.explored.len() <= grid.open_cell_count());
        assert!(outcome.explored.len() <= reachable_open_cells(&grid));
    }
}

#[test]
fn exhausted_runs_explore_every_reachable_cell() {
    for text in [ENCLOSED_GOAL, WALLED_OFF] {
        let grid = maze(text);
        let outcome = solve(&grid, &SearchPolicy::default()).unwrap();
        assert_eq!(outcome.status, SearchStatus::Exhausted);
        assert_eq!(outcome.explored.len(), reachable_open_cells(&grid));
    }
}

#[test]
fn nodes_are_created_once_per_coordinate() {
    for grid in all_fixtures() {
        let outcome = solve(
            &grid,
            &SearchPolicy {
                record_trace: true,
                ..SearchPolicy::default()
            },
        )
        .unwrap();
        let mut pushed = HashSet::new();
        pushed.insert(grid.start());
        for event in &outcome.trace {
            for candidate in &event.candidates {
                if candidate.outcome.is_pushed() {
                    assert!(pushed.insert(candidate.coord), "{} pushed twice", candidate.coord);
                }
            }
        }
        assert_eq!(pushed.len() as u64, outcome.nodes_created);
    }
}

#[test]
fn trace_candidates_respect_queue_and_explored_rules() {
    let grid = maze(BRAIDED);
    let outcome = solve(
        &grid,
        &SearchPolicy {
            record_trace: true,
            ..SearchPolicy::default()
        },
    )
    .unwrap();

    let mut explored_so_far = HashSet::new();
    for event in &outcome.trace {
        assert_eq!(event.expansion_order as usize, explored_so_far.len());
        if !event.is_goal {
            for candidate in &event.candidates {
                if candidate.outcome == CandidateOutcome::AlreadyExplored {
                    assert!(
                        explored_so_far.contains(&candidate.coord),
                        "{} marked explored before it was popped",
                        candidate.coord
                    );
                }
            }
        }
        explored_so_far.insert(event.coord);
    }
}

// ---------------------------------------------------------------------------
// Idempotence and round-trip
// ---------------------------------------------------------------------------

#[test]
fn repeated_solves_are_identical() {
    for grid in all_fixtures() {
        let a = solve(&grid, &SearchPolicy::default()).unwrap();
        let b = solve(&grid, &SearchPolicy::default()).unwrap();
        assert_eq!(a.explored_count, b.explored_count);
        assert_eq!(a.status, b.status);
        assert_eq!(a.explored, b.explored);
    }
}

#[test]
fn replaying_actions_lands_on_goal() {
    for grid in all_fixtures() {
        let outcome = solve(&grid, &SearchPolicy::default()).unwrap();
        if let Some(solution) = outcome.solution() {
            assert_eq!(solution.replay(), Some(grid.goal()));
        }
    }
}

// ---------------------------------------------------------------------------
// Seeded shuffling
// ---------------------------------------------------------------------------

#[test]
fn every_seed_finds_a_valid_path() {
    let grid = maze(BRAIDED);
    for seed in 0..64 {
        let outcome = solve(&grid, &SearchPolicy::shuffled(seed)).unwrap();
        let solution = outcome
            .solution()
            .unwrap_or_else(|| panic!("seed {seed} failed to solve"));
        assert_valid_path(&grid, solution);
    }
}

#[test]
fn same_seed_same_run() {
    let grid = open_grid(12, 12);
    let a = solve(&grid, &SearchPolicy::shuffled(99)).unwrap();
    let b = solve(&grid, &SearchPolicy::shuffled(99)).unwrap();
    assert_eq!(a.status, b.status);
    assert_eq!(a.explored, b.explored);
    assert_eq!(a.report_digest().unwrap(), b.report_digest().unwrap());
}

#[test]
fn shuffling_changes_open_grid_traversal() {
    let grid = open_grid(12, 12);
    let baseline = solve(&grid, &SearchPolicy::default()).unwrap();
    let differs = (0..16).any(|seed| {
        let shuffled = solve(&grid, &SearchPolicy::shuffled(seed)).unwrap();
        shuffled.explored != baseline.explored
    });
    assert!(differs, "some seed must deviate from generation order");
}

#[test]
fn shuffled_exhaustion_still_covers_reachable_cells() {
    let grid = maze(ENCLOSED_GOAL);
    for seed in 0..8 {
        let outcome = solve(&grid, &SearchPolicy::shuffled(seed)).unwrap();
        assert_eq!(outcome.status, SearchStatus::Exhausted);
        assert_eq!(outcome.explored.len(), reachable_open_cells(&grid));
    }
}

// ---------------------------------------------------------------------------
// Preconditions and concurrency
// ---------------------------------------------------------------------------

#[test]
fn invalid_grids_rejected() {
    let c = Coordinate::new;
    let zero = Grid::new(0, 4, &[], c(0, 0), c(0, 0)).unwrap();
    assert!(matches!(
        solve(&zero, &SearchPolicy::default()),
        Err(SearchError::InvalidGrid(GridError::ZeroDimensions { .. }))
    ));

    let goal_outside = Grid::new(2, 2, &[false; 4], c(0, 0), c(2, 2)).unwrap();
    assert!(matches!(
        solve(&goal_outside, &SearchPolicy::default()),
        Err(SearchError::InvalidGrid(GridError::GoalOutOfBounds { .. }))
    ));

    let goal_on_wall = Grid::new(1, 3, &[false, false, true], c(0, 0), c(0, 2)).unwrap();
    assert!(matches!(
        solve(&goal_on_wall, &SearchPolicy::default()),
        Err(SearchError::InvalidGrid(GridError::GoalBlocked { .. }))
    ));
}

#[test]
fn concurrent_solves_match_sequential() {
    let grids = all_fixtures();
    let sequential: Vec<_> = grids
        .iter()
        .map(|g| solve(g, &SearchPolicy::default()).unwrap().report_digest().unwrap())
        .collect();

    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = grids
            .iter()
            .map(|g| scope.spawn(move || solve(g, &SearchPolicy::default()).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().report_digest().unwrap())
            .collect()
    });

    assert_eq!(sequential, concurrent);
}
