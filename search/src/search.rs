//! Search entry points and the shared expansion loop.

use std::collections::HashMap;

use crate::contract::SearchProblem;
use crate::error::SearchError;
use crate::frontier::{Frontier, InsertionFrontier, PriorityFrontier, PushOutcome};
use crate::graph::{
    ExpandEvent, SearchGraph, SearchGraphMetadata, SuccessorOutcome, SuccessorRecord,
    TerminationReason,
};
use crate::node::{NodeId, SearchTree};
use crate::path::extract_path;
use crate::policy::{SearchPolicy, Strategy};

/// A path to a goal plus the states expanded on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<S, A> {
    /// Initial state to goal state, inclusive.
    pub states: Vec<S>,
    /// `actions[i]` takes `states[i]` to `states[i + 1]`.
    pub actions: Vec<A>,
    pub cost: f64,
    /// Expanded states in order of first expansion, without duplicates.
    pub visited: Vec<S>,
}

/// The search ended without reaching a goal.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchExhausted<S> {
    pub reason: TerminationReason,
    /// Expanded states in order of first expansion, without duplicates.
    pub visited: Vec<S>,
}

impl<S> std::fmt::Display for SearchExhausted<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no path found: {} after {} expansions",
            self.reason,
            self.visited.len()
        )
    }
}

impl<S: std::fmt::Debug> std::error::Error for SearchExhausted<S> {}

/// Outcome of one search invocation.
///
/// Always carries the traversal log, whichever way the search ended.
#[derive(Debug, Clone)]
pub struct SearchRun<S, A> {
    pub outcome: Result<SearchResult<S, A>, SearchExhausted<S>>,
    pub graph: SearchGraph,
}

impl<S, A> SearchRun<S, A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.outcome.is_ok()
    }

    #[must_use]
    pub fn result(&self) -> Option<&SearchResult<S, A>> {
        self.outcome.as_ref().ok()
    }

    #[must_use]
    pub fn termination_reason(&self) -> TerminationReason {
        self.graph.metadata.termination_reason
    }

    /// Expanded states, whichever way the search ended.
    #[must_use]
    pub fn visited(&self) -> &[S] {
        match &self.outcome {
            Ok(found) => &found.visited,
            Err(exhausted) => &exhausted.visited,
        }
    }
}

/// `SearchRun` specialized to a problem's state and action types.
pub type ProblemRun<P> = SearchRun<<P as SearchProblem>::State, <P as SearchProblem>::Action>;

/// Depth-first search: stack frontier, revisits discarded on pop.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn depth_first_search<P>(problem: &P, policy: &SearchPolicy) -> Result<ProblemRun<P>, SearchError>
where
    P: SearchProblem + ?Sized,
{
    search(Strategy::DepthFirst, problem, policy)
}

/// Breadth-first search: queue frontier, revisits discarded on pop.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn breadth_first_search<P>(
    problem: &P,
    policy: &SearchPolicy,
) -> Result<ProblemRun<P>, SearchError>
where
    P: SearchProblem + ?Sized,
{
    search(Strategy::BreadthFirst, problem, policy)
}

/// Uniform-cost search: heap frontier ordered by path cost `g`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn uniform_cost_search<P>(
    problem: &P,
    policy: &SearchPolicy,
) -> Result<ProblemRun<P>, SearchError>
where
    P: SearchProblem + ?Sized,
{
    search(Strategy::UniformCost, problem, policy)
}

/// A* search: heap frontier ordered by `g + h`.
///
/// Returns an optimal path when the problem's heuristic is admissible.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
pub fn a_star_search<P>(problem: &P, policy: &SearchPolicy) -> Result<ProblemRun<P>, SearchError>
where
    P: SearchProblem + ?Sized,
{
    search(Strategy::AStar, problem, policy)
}

/// Run `strategy` on `problem`.
///
/// All runtime terminations (goal, exhaustion, budget, ceiling, frontier
/// invariant violation) return `Ok(SearchRun)` with the traversal log.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. No search steps are taken in that case.
pub fn search<P>(
    strategy: Strategy,
    problem: &P,
    policy: &SearchPolicy,
) -> Result<ProblemRun<P>, SearchError>
where
    P: SearchProblem + ?Sized,
{
    policy.validate()?;
    let run = match strategy {
        Strategy::DepthFirst => {
            run_loop(problem, policy, strategy, InsertionFrontier::stack(), |_, g| g)
        }
        Strategy::BreadthFirst => {
            run_loop(problem, policy, strategy, InsertionFrontier::queue(), |_, g| g)
        }
        Strategy::UniformCost => {
            run_loop(problem, policy, strategy, PriorityFrontier::new(), |_, g| g)
        }
        Strategy::AStar => run_loop(problem, policy, strategy, PriorityFrontier::new(), |s, g| {
            g + problem.heuristic(s)
        }),
    };
    Ok(run)
}

#[derive(Debug, Default)]
struct Counters {
    expansions: u64,
    nodes_generated: u64,
    duplicates_discarded: u64,
    pruned: u64,
    reopened: u64,
}

/// The traversal loop shared by every strategy.
///
/// `priority(state, g)` yields the frontier key for a node; the stack and
/// queue frontiers store it but never order by it.
#[allow(clippy::too_many_lines)]
fn run_loop<P, F>(
    problem: &P,
    policy: &SearchPolicy,
    strategy: Strategy,
    mut frontier: F,
    priority: impl Fn(&P::State, f64) -> f64,
) -> ProblemRun<P>
where
    P: SearchProblem + ?Sized,
    F: Frontier<P::State>,
{
    let mut tree: SearchTree<P::State, P::Action> = SearchTree::new();
    // Path cost each state was last expanded with.
    let mut expanded: HashMap<P::State, f64> = HashMap::new();
    let reopen = strategy.is_cost_ordered();
    let mut visited: Vec<P::State> = Vec::new();
    let mut events: Vec<ExpandEvent> = Vec::new();
    let mut counters = Counters::default();

    let initial = problem.initial_state();
    let root = tree.add_root(initial.clone());
    counters.nodes_generated += 1;
    frontier.push(&initial, root, priority(&initial, 0.0));

    log::debug!(
        "search start: strategy={strategy}, actions={}, max_expansions={:?}, max_cost={:?}",
        problem.actions().len(),
        policy.max_expansions,
        policy.max_cost
    );

    let mut goal: Option<NodeId> = None;

    let termination = loop {
        if frontier.is_empty() {
            break if counters.pruned > 0 {
                TerminationReason::CostCeilingReached
            } else {
                TerminationReason::FrontierExhausted
            };
        }

        let id = match frontier.pop() {
            Ok(id) => id,
            Err(err) => {
                log::warn!("frontier reported {} entries but pop failed: {err}", frontier.len());
                break TerminationReason::FrontierInvariantViolation;
            }
        };

        let (state, cost, parent, depth) = {
            let node = tree.node(id);
            (node.state().clone(), node.cost(), node.parent(), node.depth())
        };

        if problem.is_goal(&state) {
            goal = Some(id);
            break TerminationReason::GoalReached {
                node_id: id.index() as u64,
            };
        }

        // Cost-ordered strategies expand a state again when it is reached
        // strictly more cheaply, so an admissible but inconsistent heuristic
        // still yields an optimal path.
        if let Some(&expanded_cost) = expanded.get(&state) {
            if !reopen || cost >= expanded_cost {
                counters.duplicates_discarded += 1;
                continue;
            }
            log::trace!("reopen node {id}: cost {cost} < {expanded_cost}");
            counters.reopened += 1;
        }

        if policy
            .max_expansions
            .is_some_and(|max| counters.expansions >= max)
        {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        if expanded.insert(state.clone(), cost).is_none() {
            visited.push(state.clone());
        }

        let actions = problem.actions();
        let mut successors = Vec::with_capacity(actions.len());
        for (index, &action) in actions.iter().enumerate() {
            let next = problem.transition(&state, action);
            let step = problem.step_cost(&state, action, &next);
            let child_cost = cost + step;

            let outcome = if policy.exceeds_cost(child_cost) {
                counters.pruned += 1;
                SuccessorOutcome::PrunedByCostCeiling
            } else {
                let child = tree.add_child(id, action, next.clone(), step);
                counters.nodes_generated += 1;
                let to_node = child.index() as u64;
                match frontier.push(&next, child, priority(&next, child_cost)) {
                    PushOutcome::Inserted => SuccessorOutcome::Pushed { to_node },
                    PushOutcome::Relaxed => SuccessorOutcome::Relaxed { to_node },
                    PushOutcome::Ignored => SuccessorOutcome::Ignored { to_node },
                }
            };
            successors.push(SuccessorRecord {
                action_index: index as u64,
                outcome,
            });
        }

        log::trace!(
            "expand #{}: node {id} depth {depth} cost {cost}, frontier {}",
            counters.expansions,
            frontier.len()
        );

        events.push(ExpandEvent {
            expansion_order: counters.expansions,
            node_id: id.index() as u64,
            parent_id: parent.map(|p| p.index() as u64),
            depth,
            successors,
        });
        counters.expansions += 1;
    };

    log::debug!(
        "search end: strategy={strategy}, {termination}, expansions={}, generated={}, discarded={}, pruned={}, reopened={}",
        counters.expansions,
        counters.nodes_generated,
        counters.duplicates_discarded,
        counters.pruned,
        counters.reopened
    );

    let graph = SearchGraph {
        expansions: events,
        metadata: SearchGraphMetadata {
            strategy,
            total_expansions: counters.expansions,
            total_nodes_generated: counters.nodes_generated,
            total_duplicates_discarded: counters.duplicates_discarded,
            total_pruned: counters.pruned,
            frontier_high_water: frontier.high_water(),
            termination_reason: termination,
        },
    };

    let outcome = match goal {
        Some(goal_id) => {
            let path = extract_path(&tree, goal_id);
            Ok(SearchResult {
                states: path.states,
                actions: path.actions,
                cost: path.cost,
                visited,
            })
        }
        None => Err(SearchExhausted {
            reason: termination,
            visited,
        }),
    };

    SearchRun { outcome, graph }
}
