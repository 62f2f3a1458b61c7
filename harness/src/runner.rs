//! Grid runner: map + config in, [`RunReport`] out.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig::validate() → GridWorld::new(map) → search(strategy, ..)
//!   → SearchGraph::digest() → RunReport
//! ```
//!
//! The runner owns no search logic; it binds a map to the search layer and
//! packages what came back.

use std::path::Path;

use gridsearch_kernel::grid::action::GridAction;
use gridsearch_kernel::grid::error::MapFormatError;
use gridsearch_kernel::grid::map::GridMap;
use gridsearch_kernel::grid::state::GridState;
use gridsearch_kernel::proof::canon::canonical_json_bytes;
use gridsearch_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use gridsearch_search::error::SearchError;
use gridsearch_search::graph::{SearchGraph, TerminationReason};
use gridsearch_search::search::search;

use crate::config::{ConfigError, RunConfig};
use crate::worlds::grid_world::GridWorld;

/// Error during a grid run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunError {
    /// The map file could not be read or parsed.
    Map(MapFormatError),
    /// The configuration was rejected before searching.
    Config(ConfigError),
    /// The search layer refused to start.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Map(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
            Self::CanonFailed { detail } => write!(f, "canonical JSON failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<MapFormatError> for RunError {
    fn from(e: MapFormatError) -> Self {
        Self::Map(e)
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Everything one grid run produced.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub config: RunConfig,
    pub termination: TerminationReason,
    /// Initial to goal, inclusive. Empty when no path was found.
    pub path: Vec<GridState>,
    pub actions: Vec<GridAction>,
    /// Path cost. `None` when no path was found.
    pub cost: Option<f64>,
    /// Expanded states in order of first expansion.
    pub visited: Vec<GridState>,
    pub graph: SearchGraph,
    pub graph_digest: ContentHash,
    pub map_digest: ContentHash,
}

impl RunReport {
    #[must_use]
    pub fn found(&self) -> bool {
        self.termination.is_goal_reached()
    }

    /// Action tokens (`u`, `d`, `ne`, ...) in path order.
    #[must_use]
    pub fn action_tokens(&self) -> Vec<&'static str> {
        self.actions.iter().copied().map(GridAction::token).collect()
    }

    /// Human-facing JSON report. Includes the float path cost, so it is not
    /// canonical; use [`RunReport::digest`] for identity.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let mut report = self.identity_json();
        report["cost"] = serde_json::json!(self.cost);
        report["stats"] = serde_json::json!({
            "duplicates_discarded": self.graph.metadata.total_duplicates_discarded,
            "expansions": self.graph.metadata.total_expansions,
            "frontier_high_water": self.graph.metadata.frontier_high_water,
            "nodes_generated": self.graph.metadata.total_nodes_generated,
            "pruned": self.graph.metadata.total_pruned,
        });
        report
    }

    /// Content digest over the integer-only part of the report.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::CanonFailed`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, RunError> {
        let bytes =
            canonical_json_bytes(&self.identity_json()).map_err(|e| RunError::CanonFailed {
                detail: format!("{e:?}"),
            })?;
        Ok(canonical_hash(HashDomain::RunReport, &bytes))
    }

    fn identity_json(&self) -> serde_json::Value {
        serde_json::json!({
            "actions": self.action_tokens(),
            "config": self.config.to_json(),
            "found": self.found(),
            "graph_digest": self.graph_digest.as_str(),
            "map_digest": self.map_digest.as_str(),
            "path": self.path.iter().copied().map(GridState::to_json).collect::<Vec<_>>(),
            "schema_version": "run_report.v1",
            "termination": self.termination.tag(),
            "visited_count": self.visited.len(),
        })
    }
}

/// Search `map` as configured.
///
/// # Errors
///
/// Returns [`RunError::Config`] if `config` fails validation, or
/// [`RunError::CanonFailed`] if the map or traversal log cannot be digested.
/// A search that finds no path is not an error; see [`RunReport::found`].
pub fn run_grid(map: &GridMap, config: &RunConfig) -> Result<RunReport, RunError> {
    config.validate()?;

    let world = GridWorld::new(map)
        .with_diagonals(config.diagonal)
        .with_heuristic(config.effective_heuristic());

    log::debug!(
        "run_grid: {}x{} map, {} free cells, strategy={}, diagonal={}",
        map.rows(),
        map.cols(),
        map.free_cells(),
        config.strategy,
        config.diagonal
    );

    let run = search(config.strategy, &world, &config.policy).map_err(RunError::Search)?;

    let graph_digest = run.graph.digest().map_err(|e| RunError::CanonFailed {
        detail: format!("search graph: {e:?}"),
    })?;
    let map_digest = map.digest().map_err(|e| RunError::CanonFailed {
        detail: format!("grid map: {e:?}"),
    })?;
    let termination = run.termination_reason();

    let (path, actions, cost, visited) = match run.outcome {
        Ok(found) => (found.states, found.actions, Some(found.cost), found.visited),
        Err(exhausted) => {
            log::info!("no path: {exhausted}");
            (Vec::new(), Vec::new(), None, exhausted.visited)
        }
    };

    Ok(RunReport {
        config: *config,
        termination,
        path,
        actions,
        cost,
        visited,
        graph: run.graph,
        graph_digest,
        map_digest,
    })
}

/// Load the map at `path` and search it.
///
/// # Errors
///
/// Returns [`RunError::Map`] if the file is unreadable or malformed, and
/// otherwise whatever [`run_grid`] returns.
pub fn run_map_file(path: impl AsRef<Path>, config: &RunConfig) -> Result<RunReport, RunError> {
    let map = GridMap::load(path)?;
    run_grid(&map, config)
}
