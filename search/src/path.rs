//! Path extraction: walk parent links from a goal node back to the root.

use crate::node::{NodeId, SearchTree};

/// A path from the initial state to a goal, inclusive at both ends.
///
/// `actions[i]` takes `states[i]` to `states[i + 1]`, so
/// `actions.len() == states.len() - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<S, A> {
    pub states: Vec<S>,
    pub actions: Vec<A>,
    /// Cumulative cost of the goal node.
    pub cost: f64,
}

impl<S, A> Path<S, A> {
    /// Number of moves (the action count).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.actions.len()
    }
}

/// Reconstruct the root-to-`goal` path.
///
/// Only the nodes on the chain from `goal` to the root are touched; the rest
/// of the tree may be dropped afterwards.
///
/// # Panics
///
/// Panics if `goal` was not issued by `tree`.
#[must_use]
pub fn extract_path<S: Clone, A: Copy>(tree: &SearchTree<S, A>, goal: NodeId) -> Path<S, A> {
    let goal_node = tree.node(goal);
    let mut states = Vec::with_capacity(goal_node.depth() as usize + 1);
    let mut actions = Vec::with_capacity(goal_node.depth() as usize);

    let mut current = Some(goal);
    while let Some(id) = current {
        let node = tree.node(id);
        states.push(node.state().clone());
        if let Some(action) = node.parent_action() {
            actions.push(action);
        }
        current = node.parent();
    }

    states.reverse();
    actions.reverse();
    Path {
        states,
        actions,
        cost: goal_node.cost(),
    }
}
