//! Grid environment model: states, actions, occupancy map, heuristics.
//!
//! # Types
//!
//! - [`state::GridState`] -- a `(row, col)` cell coordinate
//! - [`action::GridAction`] -- closed set of move tokens, cardinal and diagonal
//! - [`map::GridMap`] -- occupancy grid with transition model and goal test
//! - [`heuristic::Heuristic`] -- admissible remaining-cost estimates
//!
//! Invalid moves never fail: leaving the grid or entering an occupied cell
//! yields the current state unchanged.

pub mod action;
pub mod error;
pub mod heuristic;
pub mod map;
pub mod state;
