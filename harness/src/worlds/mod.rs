//! Environment adapters for the search layer.

pub mod grid_world;
