//! Fixture maps under `tests/fixtures/maps/`.

use std::path::{Path, PathBuf};

use gridsearch_kernel::grid::map::GridMap;

/// Solvable fixtures, by file stem.
pub const SOLVABLE: &[&str] = &["scenario", "open_room", "maze", "ragged"];

/// Fixtures whose goal cannot be reached from the initial cell.
pub const UNSOLVABLE: &[&str] = &["enclosed"];

/// Absolute path of the fixture directory.
///
/// # Panics
///
/// Panics if the crate is not nested two levels below the workspace root.
#[must_use]
pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("lock tests live at <workspace>/tests/lock")
        .join("tests/fixtures/maps")
}

#[must_use]
pub fn fixture_path(name: &str) -> PathBuf {
    fixture_dir().join(format!("{name}.txt"))
}

/// Load a fixture map.
///
/// # Panics
///
/// Panics if the fixture is missing or malformed.
#[must_use]
pub fn load(name: &str) -> GridMap {
    let path = fixture_path(name);
    GridMap::load(&path).unwrap_or_else(|e| panic!("fixture {}: {e}", path.display()))
}
