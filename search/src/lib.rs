//! Gridsearch Search: one traversal loop, four frontier disciplines.
//!
//! This crate provides the search layer. It depends only on
//! `gridsearch_kernel` (for canonical hashing of the traversal log); it knows
//! nothing about grids. Any type implementing [`SearchProblem`] can be searched.
//!
//! # Crate dependency graph
//!
//! ```text
//! gridsearch_kernel  ←  gridsearch_search  ←  gridsearch_harness  ←  gridsearch_cli
//! (grid, hashing)       (frontier, nodes)      (worlds, runner)       (binary)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`] -- states, actions, transition, goal test, heuristic
//! - [`SearchTree`] -- arena of immutable [`SearchNode`]s addressed by [`NodeId`]
//! - [`Frontier`] -- stack, queue and cost-ordered implementations
//! - [`SearchRun`] -- the outcome plus a [`SearchGraph`] traversal log
//! - [`SearchPolicy`] / [`Strategy`] -- budgets and algorithm selection

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;

pub use contract::{FnProblem, SearchProblem};
pub use error::{FrontierError, SearchError};
pub use frontier::{Frontier, InsertionFrontier, PriorityFrontier, PushOutcome};
pub use graph::{ExpandEvent, SearchGraph, SuccessorOutcome, SuccessorRecord, TerminationReason};
pub use node::{NodeId, SearchNode, SearchTree};
pub use path::{extract_path, Path};
pub use policy::{SearchPolicy, Strategy};
pub use search::{
    a_star_search, breadth_first_search, depth_first_search, search, uniform_cost_search,
    ProblemRun, SearchExhausted, SearchResult, SearchRun,
};
