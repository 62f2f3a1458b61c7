//! Grid move actions.
//!
//! The action set is closed: an out-of-set action cannot be constructed, so
//! the transition model never sees one. Text tokens are validated at the
//! boundary by [`GridAction::from_token`].

use std::str::FromStr;

use crate::grid::error::ActionParseError;

/// A single move on the grid.
///
/// Declaration order is the canonical expansion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GridAction {
    Up,
    Down,
    Left,
    Right,
    NorthEast,
    NorthWest,
    SouthWest,
    SouthEast,
}

impl GridAction {
    /// Four-connected moves, in expansion order.
    pub const CARDINAL: [GridAction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Eight-connected moves: the cardinal set followed by the diagonals.
    pub const WITH_DIAGONALS: [GridAction; 8] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// The action set for a map search, with or without diagonal moves.
    #[must_use]
    pub fn set(diagonal: bool) -> &'static [GridAction] {
        if diagonal {
            &Self::WITH_DIAGONALS
        } else {
            &Self::CARDINAL
        }
    }

    /// Signed `(row, col)` displacement.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
            Self::NorthEast => (-1, 1),
            Self::NorthWest => (-1, -1),
            Self::SouthWest => (1, -1),
            Self::SouthEast => (1, 1),
        }
    }

    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::NorthEast | Self::NorthWest | Self::SouthWest | Self::SouthEast
        )
    }

    /// Cost of actually moving with this action: 1 for cardinal moves,
    /// √2 for diagonal ones.
    #[must_use]
    pub fn move_cost(self) -> f64 {
        if self.is_diagonal() {
            std::f64::consts::SQRT_2
        } else {
            1.0
        }
    }

    /// Short text token (`u`, `d`, `l`, `r`, `ne`, `nw`, `sw`, `se`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Up => "u",
            Self::Down => "d",
            Self::Left => "l",
            Self::Right => "r",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthWest => "sw",
            Self::SouthEast => "se",
        }
    }

    /// Parse a token, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ActionParseError::UnknownToken`] for anything outside the set.
    pub fn from_token(token: &str) -> Result<Self, ActionParseError> {
        Self::WITH_DIAGONALS
            .into_iter()
            .find(|a| a.token().eq_ignore_ascii_case(token))
            .ok_or_else(|| ActionParseError::UnknownToken {
                token: token.to_string(),
            })
    }
}

impl FromStr for GridAction {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl std::fmt::Display for GridAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
