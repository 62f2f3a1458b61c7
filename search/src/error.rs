//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget hit, invariant violations) are
//! expressed via [`crate::graph::TerminationReason`] and always come with a
//! traversal log.

/// Typed failure for pre-flight search validation.
///
/// Returned before any node is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy carries a value the engine cannot honor.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Frontier operation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    /// `pop` was called on an empty frontier.
    Empty,
}

impl std::fmt::Display for FrontierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "pop from empty frontier"),
        }
    }
}

impl std::error::Error for FrontierError {}
