//! `SearchGraph`: expansion-event traversal log.
//!
//! The ordered list of [`ExpandEvent`] entries is the decision surface: which
//! node was expanded when, and what happened to each of its successors. The
//! log holds node ids and action indices only, never states or costs, so its
//! canonical form is integer-only and identical across runs and processes.

use gridsearch_kernel::proof::canon::{canonical_json_bytes, CanonError};
use gridsearch_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::policy::Strategy;

/// The complete traversal log of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchGraph {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    pub metadata: SearchGraphMetadata,
}

/// A single frontier pop that led to successor generation.
///
/// Pops discarded as already visited are counted in the metadata but do not
/// produce an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of expansions, from 0.
    pub expansion_order: u64,
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub depth: u32,
    /// One record per action, in action order.
    pub successors: Vec<SuccessorRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessorRecord {
    /// Position of the action in the problem's action list.
    pub action_index: u64,
    pub outcome: SuccessorOutcome,
}

/// What happened to a generated successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessorOutcome {
    /// New frontier entry.
    Pushed { to_node: u64 },
    /// Replaced a costlier frontier entry for the same state.
    Relaxed { to_node: u64 },
    /// A frontier entry at least as cheap already existed.
    Ignored { to_node: u64 },
    /// Path cost would exceed `max_cost`; no node was created.
    PrunedByCostCeiling,
}

/// Aggregate counters and the termination reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchGraphMetadata {
    pub strategy: Strategy,
    pub total_expansions: u64,
    /// Nodes created, including the root.
    pub total_nodes_generated: u64,
    /// Pops discarded because the state was already expanded at no greater cost.
    pub total_duplicates_discarded: u64,
    pub total_pruned: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was popped.
    GoalReached { node_id: u64 },
    /// Frontier emptied without finding a goal.
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
    /// Frontier emptied and at least one successor had been pruned by
    /// `max_cost`.
    CostCeilingReached,
    /// The frontier reported a non-empty length but `pop` failed.
    FrontierInvariantViolation,
}

impl TerminationReason {
    #[must_use]
    pub const fn is_goal_reached(self) -> bool {
        matches!(self, Self::GoalReached { .. })
    }

    /// Stable snake-case tag, as written to the canonical log.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::CostCeilingReached => "cost_ceiling_reached",
            Self::FrontierInvariantViolation => "frontier_invariant_violation",
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GoalReached { node_id } => write!(f, "goal reached at node #{node_id}"),
            Self::FrontierExhausted => write!(f, "frontier exhausted"),
            Self::ExpansionBudgetExceeded => write!(f, "expansion budget exceeded"),
            Self::CostCeilingReached => write!(f, "cost ceiling reached"),
            Self::FrontierInvariantViolation => write!(f, "frontier invariant violated"),
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraph {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "node_id": e.node_id,
        "parent_id": e.parent_id,
        "successors": e.successors.iter().map(successor_to_json).collect::<Vec<_>>(),
    })
}

fn successor_to_json(r: &SuccessorRecord) -> serde_json::Value {
    serde_json::json!({
        "action_index": r.action_index,
        "outcome": outcome_to_json(r.outcome),
    })
}

fn outcome_to_json(o: SuccessorOutcome) -> serde_json::Value {
    match o {
        SuccessorOutcome::Pushed { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "pushed"})
        }
        SuccessorOutcome::Relaxed { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "relaxed"})
        }
        SuccessorOutcome::Ignored { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "ignored"})
        }
        SuccessorOutcome::PrunedByCostCeiling => {
            serde_json::json!({"type": "pruned_by_cost_ceiling"})
        }
    }
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "strategy": m.strategy.name(),
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_duplicates_discarded": m.total_duplicates_discarded,
        "total_expansions": m.total_expansions,
        "total_nodes_generated": m.total_nodes_generated,
        "total_pruned": m.total_pruned,
    })
}

fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.tag()})
        }
        _ => serde_json::json!({"type": r.tag()}),
    }
}
