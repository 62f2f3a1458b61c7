//! Typed errors for the grid environment model.

use crate::grid::state::GridState;

/// Map text could not be turned into a [`crate::grid::map::GridMap`].
///
/// Fatal to loading; callers should not retry with the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapFormatError {
    /// The map has no rows or no columns.
    Empty,
    /// No cell is marked `i`.
    MissingInitial,
    /// No cell is marked `g`.
    MissingGoal,
    /// More than one cell is marked `i`.
    DuplicateInitial { first: GridState, second: GridState },
    /// More than one cell is marked `g`.
    DuplicateGoal { first: GridState, second: GridState },
    /// A programmatic marker lies outside the grid.
    MarkerOutOfBounds { state: GridState },
    /// A programmatic marker sits on an occupied cell.
    MarkerOccupied { state: GridState },
    /// The map file could not be read.
    Io { path: String, detail: String },
}

impl std::fmt::Display for MapFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "map is empty"),
            Self::MissingInitial => write!(f, "map has no initial cell ('i')"),
            Self::MissingGoal => write!(f, "map has no goal cell ('g')"),
            Self::DuplicateInitial { first, second } => {
                write!(f, "map has more than one initial cell: {first} and {second}")
            }
            Self::DuplicateGoal { first, second } => {
                write!(f, "map has more than one goal cell: {first} and {second}")
            }
            Self::MarkerOutOfBounds { state } => write!(f, "marker {state} is outside the grid"),
            Self::MarkerOccupied { state } => write!(f, "marker {state} is on an occupied cell"),
            Self::Io { path, detail } => write!(f, "cannot read map {path}: {detail}"),
        }
    }
}

impl std::error::Error for MapFormatError {}

/// A text token did not name a [`crate::grid::action::GridAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    UnknownToken { token: String },
}

impl std::fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken { token } => write!(f, "unknown action token: {token:?}"),
        }
    }
}

impl std::error::Error for ActionParseError {}
