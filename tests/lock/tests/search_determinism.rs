//! In-process determinism: repeated runs over every fixture produce
//! byte-identical traversal logs and identical paths.

use gridsearch_harness::worlds::grid_world::GridWorld;
use gridsearch_kernel::grid::heuristic::Heuristic;
use gridsearch_search::policy::{SearchPolicy, Strategy};
use gridsearch_search::search::search;
use lock_tests::fixtures::{load, SOLVABLE, UNSOLVABLE};

const RUNS: usize = 10;

fn assert_deterministic(name: &str, diagonal: bool) {
    let map = load(name);
    let heuristic = if diagonal {
        Heuristic::Octile
    } else {
        Heuristic::Manhattan
    };
    let world = GridWorld::new(&map)
        .with_diagonals(diagonal)
        .with_heuristic(heuristic);
    let policy = SearchPolicy::default();

    for strategy in Strategy::ALL {
        let first = search(strategy, &world, &policy).unwrap();
        let first_bytes = first.graph.to_canonical_json_bytes().unwrap();

        for i in 1..RUNS {
            let again = search(strategy, &world, &policy).unwrap();
            assert_eq!(
                again.graph.to_canonical_json_bytes().unwrap(),
                first_bytes,
                "{name} {strategy} diagonal={diagonal}: graph bytes differ on run {i}"
            );
            assert_eq!(
                again.outcome, first.outcome,
                "{name} {strategy} diagonal={diagonal}: outcome differs on run {i}"
            );
        }
    }
}

#[test]
fn cardinal_runs_are_deterministic() {
    for name in SOLVABLE.iter().chain(UNSOLVABLE) {
        assert_deterministic(name, false);
    }
}

#[test]
fn diagonal_runs_are_deterministic() {
    for name in SOLVABLE.iter().chain(UNSOLVABLE) {
        assert_deterministic(name, true);
    }
}

#[test]
fn strategies_produce_distinct_logs() {
    let map = load("maze");
    let world = GridWorld::new(&map);
    let policy = SearchPolicy::default();
    let digests: std::collections::BTreeSet<String> = Strategy::ALL
        .iter()
        .map(|&s| {
            search(s, &world, &policy)
                .unwrap()
                .graph
                .digest()
                .unwrap()
                .as_str()
                .to_string()
        })
        .collect();
    assert_eq!(digests.len(), Strategy::ALL.len(), "strategy is bound into the log");
}
