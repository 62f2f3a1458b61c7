//! Grid cell coordinates.

/// A cell on the grid, addressed by row (top to bottom) and column (left to right).
///
/// Plain value type: two states with equal coordinates are interchangeable.
/// Ordering is row-major, which gives deterministic iteration wherever states
/// are collected into ordered sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridState {
    pub row: usize,
    pub col: usize,
}

impl GridState {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed `(row, col)` delta.
    ///
    /// Returns `None` if either coordinate would go negative. Upper bounds are
    /// the map's concern.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Canonical JSON form: `[row, col]`.
    #[must_use]
    pub fn to_json(self) -> serde_json::Value {
        serde_json::json!([self.row, self.col])
    }
}

impl std::fmt::Display for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
