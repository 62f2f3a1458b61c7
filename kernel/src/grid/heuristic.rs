//! Remaining-cost estimates for grid search.

use std::str::FromStr;

use crate::grid::state::GridState;

/// Which admissible estimate to use toward the goal.
///
/// `Manhattan` is admissible only for four-connected moves; with diagonals
/// enabled a single diagonal step covers two Manhattan units at cost √2.
/// `Octile` is admissible for both action sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Always 0. Admissible but uninformative; A* degrades to uniform-cost.
    #[default]
    Zero,
    Manhattan,
    Octile,
}

impl Heuristic {
    /// Estimate the cost from `from` to `goal`. Never negative.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn estimate(self, from: GridState, goal: GridState) -> f64 {
        let dr = from.row.abs_diff(goal.row) as f64;
        let dc = from.col.abs_diff(goal.col) as f64;
        match self {
            Self::Zero => 0.0,
            Self::Manhattan => dr + dc,
            Self::Octile => {
                let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
                hi + (std::f64::consts::SQRT_2 - 1.0) * lo
            }
        }
    }

    /// Whether this estimate never overestimates under the given action set.
    #[must_use]
    pub fn admissible_for(self, diagonal: bool) -> bool {
        !(diagonal && self == Self::Manhattan)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Manhattan => "manhattan",
            Self::Octile => "octile",
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" | "none" => Ok(Self::Zero),
            "manhattan" => Ok(Self::Manhattan),
            "octile" => Ok(Self::Octile),
            other => Err(format!("unknown heuristic: {other}")),
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
