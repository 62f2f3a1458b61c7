//! Plain-text rendering of a grid with search results overlaid.
//!
//! | glyph | meaning |
//! |---|---|
//! | `#` | occupied |
//! | `.` | free, never expanded |
//! | `o` | expanded, not on the path |
//! | `*` | on the path |
//! | `I` / `G` | initial / goal |

use std::collections::HashSet;

use gridsearch_kernel::grid::map::GridMap;
use gridsearch_kernel::grid::state::GridState;

/// Render `map` with `visited` and `path` overlaid, one line per row.
///
/// Markers take precedence over the path, and the path over visited cells.
#[must_use]
pub fn render(map: &GridMap, visited: &[GridState], path: &[GridState]) -> String {
    let visited: HashSet<GridState> = visited.iter().copied().collect();
    let path: HashSet<GridState> = path.iter().copied().collect();

    let mut out = String::with_capacity(map.rows() * (map.cols() + 1));
    for (cell, occupied) in map.cells() {
        let glyph = if cell == map.initial() {
            'I'
        } else if cell == map.goal() {
            'G'
        } else if occupied {
            '#'
        } else if path.contains(&cell) {
            '*'
        } else if visited.contains(&cell) {
            'o'
        } else {
            '.'
        };
        out.push(glyph);
        if cell.col + 1 == map.cols() {
            out.push('\n');
        }
    }
    out
}
