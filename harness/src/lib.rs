//! Gridsearch Harness: binds grid maps to the search layer.
//!
//! The harness runs a map through the search pipeline
//! (`RunConfig::validate` → `GridWorld` → `search` → digest) and packages the
//! result as a [`runner::RunReport`].
//!
//! The harness does NOT implement search logic; it delegates to
//! `gridsearch_search`. Maps provide environment semantics only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod render;
pub mod runner;
pub mod worlds;
