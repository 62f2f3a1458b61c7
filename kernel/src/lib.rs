//! Gridsearch Kernel: the environment model and canonical hashing.
//!
//! # API Surface
//!
//! - [`grid::map::GridMap`] -- occupancy grid with transition model, goal test
//!   and heuristic estimates
//! - [`grid::map::GridMap::parse`] / [`grid::map::GridMap::load`] -- map text ingestion
//! - [`proof::canon::canonical_json_bytes`] -- the single canonical JSON writer
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 digests
//!
//! # Module Dependency Direction
//!
//! `grid` and `proof` are independent. Neither knows anything about search.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod proof;
