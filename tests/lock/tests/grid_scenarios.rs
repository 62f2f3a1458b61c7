//! Search properties over the fixture maps: optimality agreement, path
//! replay, visited-set hygiene, and the fixed scenario costs.

use std::collections::HashSet;

use gridsearch_harness::config::RunConfig;
use gridsearch_harness::runner::run_grid;
use gridsearch_harness::worlds::grid_world::GridWorld;
use gridsearch_kernel::grid::heuristic::Heuristic;
use gridsearch_kernel::grid::map::GridMap;
use gridsearch_kernel::grid::state::GridState;
use gridsearch_search::frontier::{Frontier, PriorityFrontier};
use gridsearch_search::graph::TerminationReason;
use gridsearch_search::policy::{SearchPolicy, Strategy};
use gridsearch_search::search::{a_star_search, search, uniform_cost_search};
use gridsearch_search::{NodeId, SearchTree};
use lock_tests::fixtures::{load, SOLVABLE, UNSOLVABLE};

const EPS: f64 = 1e-9;
const SQRT_2: f64 = std::f64::consts::SQRT_2;

fn optimal_cost(name: &str, diagonal: bool) -> f64 {
    let map = load(name);
    let world = GridWorld::new(&map).with_diagonals(diagonal);
    uniform_cost_search(&world, &SearchPolicy::default())
        .unwrap()
        .result()
        .expect("fixture is solvable")
        .cost
}

#[test]
fn known_optimal_costs() {
    let cases = [
        ("scenario", false, 4.0),
        ("scenario", true, 2.0 * SQRT_2),
        ("open_room", false, 11.0),
        ("open_room", true, 5.0 + 3.0 * SQRT_2),
        ("maze", false, 18.0),
        ("maze", true, 12.0 + 3.0 * SQRT_2),
        ("ragged", false, 8.0),
        ("ragged", true, 4.0 + 2.0 * SQRT_2),
    ];
    for (name, diagonal, expected) in cases {
        let cost = optimal_cost(name, diagonal);
        assert!(
            (cost - expected).abs() < EPS,
            "{name} diagonal={diagonal}: expected {expected}, got {cost}"
        );
    }
}

#[test]
fn a_star_agrees_with_uniform_cost() {
    for name in SOLVABLE {
        let map = load(name);
        for (diagonal, heuristic) in [
            (false, Heuristic::Zero),
            (false, Heuristic::Manhattan),
            (false, Heuristic::Octile),
            (true, Heuristic::Zero),
            (true, Heuristic::Octile),
        ] {
            let world = GridWorld::new(&map)
                .with_diagonals(diagonal)
                .with_heuristic(heuristic);
            let ucs = uniform_cost_search(&world, &SearchPolicy::default()).unwrap();
            let astar = a_star_search(&world, &SearchPolicy::default()).unwrap();
            let (u, a) = (ucs.result().unwrap().cost, astar.result().unwrap().cost);
            assert!(
                (u - a).abs() < EPS,
                "{name} diagonal={diagonal} {heuristic}: ucs {u} astar {a}"
            );
        }
    }
}

#[test]
fn every_path_replays_through_the_transition_model() {
    for name in SOLVABLE {
        let map = load(name);
        for diagonal in [false, true] {
            for strategy in Strategy::ALL {
                let world = GridWorld::new(&map).with_diagonals(diagonal);
                let run = search(strategy, &world, &SearchPolicy::default()).unwrap();
                let found = run.result().unwrap();

                assert_eq!(found.states[0], map.initial());
                assert_eq!(*found.states.last().unwrap(), map.goal());
                assert_eq!(found.actions.len() + 1, found.states.len());

                let mut current = map.initial();
                for (step, &action) in found.actions.iter().enumerate() {
                    current = map.transition(current, action);
                    assert_eq!(current, found.states[step + 1], "{name} {strategy} step {step}");
                    assert!(!map.is_occupied(current));
                }
            }
        }
    }
}

#[test]
fn visited_never_repeats_and_excludes_walls() {
    for name in SOLVABLE.iter().chain(UNSOLVABLE) {
        let map = load(name);
        for strategy in Strategy::ALL {
            let world = GridWorld::new(&map).with_diagonals(true);
            let run = search(strategy, &world, &SearchPolicy::default()).unwrap();
            let visited = run.visited();
            let unique: HashSet<&GridState> = visited.iter().collect();
            assert_eq!(unique.len(), visited.len(), "{name} {strategy}");
            assert!(visited.iter().all(|s| !map.is_occupied(*s)));
            assert_eq!(visited.len() as u64, run.graph.metadata.total_expansions);
        }
    }
}

#[test]
fn enclosed_goal_is_exhausted() {
    let map = load("enclosed");
    for strategy in Strategy::ALL {
        let report = run_grid(&map, &RunConfig::new(strategy)).unwrap();
        assert!(!report.found());
        assert_eq!(report.termination, TerminationReason::FrontierExhausted);
        assert_eq!(report.visited.len(), 4);
    }
}

#[test]
fn single_cell_map_is_trivially_solved() {
    let map =
        GridMap::from_occupancy(&[vec![false]], GridState::new(0, 0), GridState::new(0, 0))
            .unwrap();
    for strategy in Strategy::ALL {
        let report = run_grid(&map, &RunConfig::new(strategy)).unwrap();
        assert!(report.found());
        assert_eq!(report.path, vec![GridState::new(0, 0)]);
        assert!(report.actions.is_empty());
        assert_eq!(report.graph.metadata.total_expansions, 0);
    }
}

#[test]
fn scenario_never_crosses_the_wall_column() {
    let map = load("scenario");
    let report = run_grid(&map, &RunConfig::new(Strategy::UniformCost)).unwrap();
    assert!((report.cost.unwrap() - 4.0).abs() < EPS);
    for cell in &report.path {
        assert!(
            !(cell.col == 2 && cell.row < 2),
            "path enters wall cell {cell}"
        );
    }
}

#[test]
fn budgets_end_search_early() {
    let map = load("maze");
    let config = RunConfig {
        policy: SearchPolicy::default().with_max_expansions(5),
        ..RunConfig::new(Strategy::BreadthFirst)
    };
    let report = run_grid(&map, &config).unwrap();
    assert_eq!(report.termination, TerminationReason::ExpansionBudgetExceeded);
    assert_eq!(report.visited.len(), 5);

    let config = RunConfig {
        policy: SearchPolicy::default().with_max_cost(17.0),
        ..RunConfig::new(Strategy::UniformCost)
    };
    let report = run_grid(&map, &config).unwrap();
    assert_eq!(report.termination, TerminationReason::CostCeilingReached);

    let config = RunConfig {
        policy: SearchPolicy::default().with_max_cost(18.0),
        ..RunConfig::new(Strategy::UniformCost)
    };
    assert!(run_grid(&map, &config).unwrap().found());
}

#[test]
fn priority_frontier_keeps_lowest_cost_entry() {
    let mut tree: SearchTree<GridState, ()> = SearchTree::new();
    let s = GridState::new(1, 1);
    let ids: Vec<NodeId> = (0..3).map(|_| tree.add_root(s)).collect();

    let mut frontier = PriorityFrontier::new();
    frontier.push(&s, ids[0], 5.0);
    frontier.push(&s, ids[1], 3.0);
    assert_eq!(frontier.len(), 1);
    assert_eq!(frontier.cost_of(&s), Some(3.0));

    frontier.push(&s, ids[2], 7.0);
    assert_eq!(frontier.len(), 1);
    assert_eq!(frontier.cost_of(&s), Some(3.0));
    assert_eq!(frontier.pop(), Ok(ids[1]));
    assert!(frontier.is_empty());
}
