//! Run configuration: which algorithm, which moves, which estimate, which
//! bounds.
//!
//! The CLI maps its flags onto a [`RunConfig`]; tests build one directly.

use gridsearch_kernel::grid::heuristic::Heuristic;
use gridsearch_search::error::SearchError;
use gridsearch_search::policy::{SearchPolicy, Strategy};

/// Everything needed to run one grid search besides the map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunConfig {
    pub strategy: Strategy,
    /// Offer diagonal moves (cost √2) in addition to the cardinal ones.
    pub diagonal: bool,
    /// Estimate used by A*. Ignored by the other strategies.
    pub heuristic: Heuristic,
    pub policy: SearchPolicy,
}

/// A [`RunConfig`] the runner refuses to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The heuristic overestimates under the selected action set, so A*
    /// could return a suboptimal path.
    InadmissibleHeuristic { heuristic: Heuristic, diagonal: bool },
    /// The search policy failed validation.
    Policy(SearchError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InadmissibleHeuristic {
                heuristic,
                diagonal,
            } => {
                let moves = if *diagonal { "eight" } else { "four" };
                write!(
                    f,
                    "heuristic {heuristic} is not admissible with {moves}-connected moves"
                )
            }
            Self::Policy(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl RunConfig {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Check the configuration before any search step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InadmissibleHeuristic`] for A* with an estimate
    /// that can overestimate, or [`ConfigError::Policy`] if the policy is
    /// invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategy == Strategy::AStar && !self.heuristic.admissible_for(self.diagonal) {
            return Err(ConfigError::InadmissibleHeuristic {
                heuristic: self.heuristic,
                diagonal: self.diagonal,
            });
        }
        self.policy.validate().map_err(ConfigError::Policy)
    }

    /// The heuristic the search will actually consult.
    ///
    /// Only A* reads estimates; the other strategies report `Zero` so the
    /// run report does not claim an estimate that had no effect.
    #[must_use]
    pub fn effective_heuristic(&self) -> Heuristic {
        if self.strategy == Strategy::AStar {
            self.heuristic
        } else {
            Heuristic::Zero
        }
    }

    /// JSON echo for reports. `max_cost` is rendered as a string so the
    /// value stays usable in integer-only canonical form.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "diagonal": self.diagonal,
            "heuristic": self.effective_heuristic().name(),
            "max_cost": self.policy.max_cost.map(|c| c.to_string()),
            "max_expansions": self.policy.max_expansions,
            "strategy": self.strategy.name(),
        })
    }
}
