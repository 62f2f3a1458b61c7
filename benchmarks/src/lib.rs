//! Shared helpers for gridsearch benchmark suites.
//!
//! Maps are generated, not loaded, so every suite can scale them.

use gridsearch_harness::config::RunConfig;
use gridsearch_harness::worlds::grid_world::GridWorld;
use gridsearch_kernel::grid::action::GridAction;
use gridsearch_kernel::grid::heuristic::Heuristic;
use gridsearch_kernel::grid::map::GridMap;
use gridsearch_kernel::grid::state::GridState;
use gridsearch_search::graph::SearchGraph;
use gridsearch_search::policy::{SearchPolicy, Strategy};
use gridsearch_search::search::{search, SearchRun};

/// A named map plus the configuration to search it with.
pub struct Regime {
    pub name: &'static str,
    pub map: GridMap,
    pub config: RunConfig,
}

/// `size` x `size` grid with no obstacles, initial top-left, goal bottom-right.
///
/// # Panics
///
/// Panics if `size` is zero.
#[must_use]
pub fn open_grid(size: usize) -> GridMap {
    let grid = vec![vec![false; size]; size];
    GridMap::from_occupancy(
        &grid,
        GridState::new(0, 0),
        GridState::new(size - 1, size - 1),
    )
    .expect("open grid has free corners")
}

/// Serpentine corridor: every odd row is a wall with a single gap, the gaps
/// alternating between the right and left edges.
///
/// `size` is rounded up to the next odd number so the last row is a
/// corridor. The path length grows roughly with `size²/2`.
///
/// # Panics
///
/// Panics if `size` is zero.
#[must_use]
pub fn serpentine(size: usize) -> GridMap {
    let n = size | 1;
    let mut grid = vec![vec![false; n]; n];
    for (row, cells) in grid.iter_mut().enumerate().filter(|(r, _)| r % 2 == 1) {
        let gap = if (row / 2) % 2 == 0 { n - 1 } else { 0 };
        for (col, cell) in cells.iter_mut().enumerate() {
            *cell = col != gap;
        }
    }
    GridMap::from_occupancy(&grid, GridState::new(0, 0), GridState::new(n - 1, n - 1))
        .expect("serpentine corridors are free at both ends")
}

/// Open grid whose goal is walled into the bottom-right corner. Every
/// strategy exhausts the reachable region and reports no path.
///
/// # Panics
///
/// Panics if `size` is less than 3.
#[must_use]
pub fn sealed_goal(size: usize) -> GridMap {
    assert!(size >= 3, "sealed_goal needs room for the wall");
    let mut grid = vec![vec![false; size]; size];
    grid[size - 2][size - 1] = true;
    grid[size - 1][size - 2] = true;
    grid[size - 2][size - 2] = true;
    GridMap::from_occupancy(
        &grid,
        GridState::new(0, 0),
        GridState::new(size - 1, size - 1),
    )
    .expect("sealed goal is itself free")
}

/// The standard regime set used by the macro and report suites.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let mut out = Vec::new();
    for strategy in Strategy::ALL {
        let heuristic = if strategy == Strategy::AStar {
            Heuristic::Manhattan
        } else {
            Heuristic::Zero
        };
        let config = RunConfig {
            heuristic,
            ..RunConfig::new(strategy)
        };
        out.push(Regime {
            name: "open_32",
            map: open_grid(32),
            config,
        });
        out.push(Regime {
            name: "serpentine_31",
            map: serpentine(31),
            config,
        });
        out.push(Regime {
            name: "sealed_goal_32",
            map: sealed_goal(32),
            config,
        });
        out.push(Regime {
            name: "sealed_goal_32_budget_100",
            map: sealed_goal(32),
            config: RunConfig {
                policy: SearchPolicy::default().with_max_expansions(100),
                ..config
            },
        });
    }
    out
}

/// Run the search layer alone, skipping config validation and digesting.
///
/// # Panics
///
/// Panics if the policy is rejected. Benchmark regimes are expected to be valid.
#[must_use]
pub fn search_only(map: &GridMap, config: &RunConfig) -> SearchRun<GridState, GridAction> {
    let world = GridWorld::new(map)
        .with_diagonals(config.diagonal)
        .with_heuristic(config.effective_heuristic());
    search(config.strategy, &world, &config.policy).expect("benchmark policy is valid")
}

/// Traversal counters as JSON, for report metadata.
#[must_use]
pub fn graph_stats_json(graph: &SearchGraph) -> serde_json::Value {
    let m = &graph.metadata;
    serde_json::json!({
        "duplicates_discarded": m.total_duplicates_discarded,
        "expansions": m.total_expansions,
        "frontier_high_water": m.frontier_high_water,
        "nodes_generated": m.total_nodes_generated,
        "pruned": m.total_pruned,
        "termination": m.termination_reason.tag(),
    })
}
