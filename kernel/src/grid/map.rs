//! Occupancy grid map: the environment model for grid search.
//!
//! # Map text format
//!
//! One row per line, case-insensitive:
//!
//! ```text
//! x  occupied cell
//! i  initial cell (exactly one)
//! g  goal cell (exactly one)
//! *  anything else (including `0` and space) is free
//! ```
//!
//! Trailing whitespace is ignored. Rows may differ in length; the grid width
//! is the longest row and shorter rows are padded with free cells.

use std::path::Path;

use crate::grid::action::GridAction;
use crate::grid::error::MapFormatError;
use crate::grid::heuristic::Heuristic;
use crate::grid::state::GridState;
use crate::proof::canon::{canonical_json_bytes, CanonError};
use crate::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// A rectangular occupancy grid with one initial and one goal cell.
///
/// Invariants (enforced by every constructor):
/// - `rows > 0` and `cols > 0`
/// - `initial` and `goal` are in bounds and not occupied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    rows: usize,
    cols: usize,
    occupied: Vec<bool>,
    initial: GridState,
    goal: GridState,
}

impl GridMap {
    /// Parse map text.
    ///
    /// # Errors
    ///
    /// Returns [`MapFormatError`] if the grid is empty, or if the initial or
    /// goal marker is missing or appears more than once.
    pub fn parse(text: &str) -> Result<Self, MapFormatError> {
        let lines: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end().chars().collect())
            .collect();
        let rows = lines.len();
        let cols = lines.iter().map(Vec::len).max().unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(MapFormatError::Empty);
        }

        let mut occupied = vec![false; rows * cols];
        let mut initial: Option<GridState> = None;
        let mut goal: Option<GridState> = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.iter().enumerate() {
                let here = GridState::new(row, col);
                match ch.to_ascii_lowercase() {
                    'x' => occupied[row * cols + col] = true,
                    'i' => {
                        if let Some(first) = initial {
                            return Err(MapFormatError::DuplicateInitial {
                                first,
                                second: here,
                            });
                        }
                        initial = Some(here);
                    }
                    'g' => {
                        if let Some(first) = goal {
                            return Err(MapFormatError::DuplicateGoal {
                                first,
                                second: here,
                            });
                        }
                        goal = Some(here);
                    }
                    _ => {}
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            occupied,
            initial: initial.ok_or(MapFormatError::MissingInitial)?,
            goal: goal.ok_or(MapFormatError::MissingGoal)?,
        })
    }

    /// Read and parse a map file.
    ///
    /// # Errors
    ///
    /// Returns [`MapFormatError::Io`] if the file cannot be read as UTF-8,
    /// otherwise any error from [`GridMap::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapFormatError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| MapFormatError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        let map = Self::parse(&text)?;
        log::debug!(
            "loaded map {}: {}x{}, initial {}, goal {}",
            path.display(),
            map.rows,
            map.cols,
            map.initial,
            map.goal
        );
        Ok(map)
    }

    /// Build a map from row-major occupancy rows (true = blocked).
    ///
    /// Rows may differ in length; shorter rows are padded with free cells.
    ///
    /// # Errors
    ///
    /// Returns [`MapFormatError::Empty`] for an empty grid, and
    /// `MarkerOutOfBounds` / `MarkerOccupied` if a marker is not a free cell.
    pub fn from_occupancy(
        grid: &[Vec<bool>],
        initial: GridState,
        goal: GridState,
    ) -> Result<Self, MapFormatError> {
        let rows = grid.len();
        let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(MapFormatError::Empty);
        }
        let mut occupied = vec![false; rows * cols];
        for (row, cells) in grid.iter().enumerate() {
            occupied[row * cols..row * cols + cells.len()].copy_from_slice(cells);
        }
        let map = Self {
            rows,
            cols,
            occupied,
            initial,
            goal,
        };
        for marker in [initial, goal] {
            if !map.in_bounds(marker) {
                return Err(MapFormatError::MarkerOutOfBounds { state: marker });
            }
            if map.is_occupied(marker) {
                return Err(MapFormatError::MarkerOccupied { state: marker });
            }
        }
        Ok(map)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn initial(&self) -> GridState {
        self.initial
    }

    #[must_use]
    pub fn goal(&self) -> GridState {
        self.goal
    }

    #[must_use]
    pub fn in_bounds(&self, s: GridState) -> bool {
        s.row < self.rows && s.col < self.cols
    }

    /// Whether `s` is blocked. Out-of-bounds cells count as blocked.
    #[must_use]
    pub fn is_occupied(&self, s: GridState) -> bool {
        !self.in_bounds(s) || self.occupied[s.row * self.cols + s.col]
    }

    /// Number of free cells on the map.
    #[must_use]
    pub fn free_cells(&self) -> usize {
        self.occupied.iter().filter(|&&o| !o).count()
    }

    /// Apply `action` in state `s`.
    ///
    /// Moving off the grid or onto an occupied cell leaves the state unchanged.
    #[must_use]
    pub fn transition(&self, s: GridState, action: GridAction) -> GridState {
        let (d_row, d_col) = action.delta();
        match s.offset(d_row, d_col) {
            Some(next) if !self.is_occupied(next) => next,
            _ => s,
        }
    }

    #[must_use]
    pub fn is_goal(&self, s: GridState) -> bool {
        s == self.goal
    }

    /// Cost of the step `from --action--> to`: 0 for a blocked move (self-loop),
    /// otherwise the action's move cost.
    #[must_use]
    pub fn step_cost(&self, from: GridState, action: GridAction, to: GridState) -> f64 {
        if from == to {
            0.0
        } else {
            action.move_cost()
        }
    }

    /// The default estimate: always 0.
    #[must_use]
    pub fn uninformed_heuristic(&self, _s: GridState) -> f64 {
        0.0
    }

    /// Estimate the remaining cost from `s` to this map's goal.
    #[must_use]
    pub fn heuristic(&self, heuristic: Heuristic, s: GridState) -> f64 {
        heuristic.estimate(s, self.goal)
    }

    /// Iterate all cells in row-major order with their occupancy.
    pub fn cells(&self) -> impl Iterator<Item = (GridState, bool)> + '_ {
        self.occupied
            .iter()
            .enumerate()
            .map(|(i, &o)| (GridState::new(i / self.cols, i % self.cols), o))
    }

    /// Content digest of the grid and its markers.
    ///
    /// Two maps that parse to the same occupancy and markers share a digest,
    /// regardless of which free-cell characters the source text used.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let rows: Vec<String> = (0..self.rows)
            .map(|r| {
                self.occupied[r * self.cols..(r + 1) * self.cols]
                    .iter()
                    .map(|&o| if o { 'x' } else { '0' })
                    .collect()
            })
            .collect();
        let value = serde_json::json!({
            "cols": self.cols,
            "goal": self.goal.to_json(),
            "initial": self.initial.to_json(),
            "occupancy": rows,
            "rows": self.rows,
        });
        let bytes = canonical_json_bytes(&value)?;
        Ok(canonical_hash(HashDomain::GridMap, &bytes))
    }
}
