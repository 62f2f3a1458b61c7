//! Map text format lock: marker rules, padding, case folding, and the
//! digest's independence from free-cell spelling.

use gridsearch_kernel::grid::error::MapFormatError;
use gridsearch_kernel::grid::map::GridMap;
use gridsearch_kernel::grid::state::GridState;
use lock_tests::fixtures::{load, SOLVABLE, UNSOLVABLE};

#[test]
fn all_fixtures_parse() {
    for name in SOLVABLE.iter().chain(UNSOLVABLE) {
        let map = load(name);
        assert!(!map.is_occupied(map.initial()), "{name}");
        assert!(!map.is_occupied(map.goal()), "{name}");
    }
}

#[test]
fn ragged_fixture_is_padded_and_case_folded() {
    let map = load("ragged");
    assert_eq!((map.rows(), map.cols()), (3, 7));
    assert_eq!(map.initial(), GridState::new(0, 0));
    assert_eq!(map.goal(), GridState::new(2, 6));
    assert!(map.is_occupied(GridState::new(0, 4)), "uppercase X is occupied");
    assert!(!map.is_occupied(GridState::new(1, 6)), "padding is free");
    assert!(!map.is_occupied(GridState::new(0, 1)), "space is free");
}

#[test]
fn marker_errors() {
    let cases: [(&str, MapFormatError); 4] = [
        ("", MapFormatError::Empty),
        ("0x0\n00g\n", MapFormatError::MissingInitial),
        ("i0x\n000\n", MapFormatError::MissingGoal),
        (
            "i0g\n00G\n",
            MapFormatError::DuplicateGoal {
                first: GridState::new(0, 2),
                second: GridState::new(1, 2),
            },
        ),
    ];
    for (text, expected) in cases {
        assert_eq!(GridMap::parse(text).unwrap_err(), expected, "{text:?}");
    }
    assert!(matches!(
        GridMap::parse("i0i\n00g\n"),
        Err(MapFormatError::DuplicateInitial { .. })
    ));
}

#[test]
fn digest_ignores_free_cell_spelling_and_trailing_space() {
    let a = GridMap::parse("i0x\n00x\n00g\n").unwrap();
    let b = GridMap::parse("I.X   \n..x\n  G\n").unwrap();
    assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    assert_eq!(a.digest().unwrap(), load("scenario").digest().unwrap());

    let c = GridMap::parse("i0x\n000\n00g\n").unwrap();
    assert_ne!(a.digest().unwrap(), c.digest().unwrap());
}
