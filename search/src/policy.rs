//! Search policy and strategy selection.

use crate::error::SearchError;

/// Work bounds for a single search.
///
/// Both ceilings are optional; the default runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. The goal test on a popped node still runs
    /// when the cap is reached, so a goal at the cap boundary is found.
    pub max_expansions: Option<u64>,
    /// Successors whose path cost would exceed this are not pushed.
    pub max_cost: Option<f64>,
}

impl SearchPolicy {
    /// Unbounded policy.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: None,
            max_cost: None,
        }
    }

    #[must_use]
    pub const fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    #[must_use]
    pub const fn with_max_cost(mut self, max: f64) -> Self {
        self.max_cost = Some(max);
        self
    }

    /// Validate that the engine can honor this policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_cost` is negative or NaN.
    pub fn validate(&self) -> Result<(), SearchError> {
        if let Some(max_cost) = self.max_cost {
            if max_cost.is_nan() {
                return Err(SearchError::InvalidPolicy {
                    detail: "max_cost is NaN".into(),
                });
            }
            if max_cost < 0.0 {
                return Err(SearchError::InvalidPolicy {
                    detail: format!("max_cost must be non-negative, got {max_cost}"),
                });
            }
        }
        Ok(())
    }

    /// True if a successor at `cost` falls outside the cost ceiling.
    #[must_use]
    pub fn exceeds_cost(&self, cost: f64) -> bool {
        self.max_cost.is_some_and(|max| cost > max)
    }
}

/// Which search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    #[default]
    AStar,
}

impl Strategy {
    pub const ALL: [Self; 4] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::UniformCost,
        Self::AStar,
    ];

    /// Short name, as accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::AStar => "astar",
        }
    }

    /// True for the strategies backed by the cost-ordered frontier.
    #[must_use]
    pub const fn is_cost_ordered(self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth_first" => Ok(Self::DepthFirst),
            "bfs" | "breadth-first" | "breadth_first" => Ok(Self::BreadthFirst),
            "ucs" | "uniform-cost" | "uniform_cost" => Ok(Self::UniformCost),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            other => Err(format!(
                "unknown strategy {other:?} (expected dfs, bfs, ucs or astar)"
            )),
        }
    }
}
