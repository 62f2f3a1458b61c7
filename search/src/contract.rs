//! Search problem contract trait.

use std::hash::Hash;

/// A deterministic, fully observable search problem.
///
/// # Contract
///
/// - `transition` is deterministic. An inapplicable action returns the input
///   state unchanged; the engine still pushes the resulting self-loop and
///   discards it on pop as already visited.
/// - `actions` returns the same slice, in the same order, for every call.
///   Order determines expansion order and therefore the returned path.
/// - `heuristic` is non-negative and admissible for A* to return optimal paths.
///   It need not be consistent: A* expands a state again when it is reached
///   strictly more cheaply than on its previous expansion.
pub trait SearchProblem {
    /// Plain value state: equal states are interchangeable.
    type State: Clone + Eq + Hash;
    /// Member of a closed, ordered action set.
    type Action: Copy;

    fn initial_state(&self) -> Self::State;

    /// The fixed action ordering used for every expansion.
    fn actions(&self) -> &[Self::Action];

    fn transition(&self, state: &Self::State, action: Self::Action) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// Cost of one step. Default: 1 per move, 0 for a self-loop.
    fn step_cost(&self, from: &Self::State, _action: Self::Action, to: &Self::State) -> f64 {
        if from == to {
            0.0
        } else {
            1.0
        }
    }

    /// Estimated remaining cost. Default: 0 (uniform-cost behavior under A*).
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}

type TransitionFn<'a, S, A> = Box<dyn Fn(&S, A) -> S + 'a>;
type GoalFn<'a, S> = Box<dyn Fn(&S) -> bool + 'a>;
type HeuristicFn<'a, S> = Box<dyn Fn(&S) -> f64 + 'a>;
type StepCostFn<'a, S, A> = Box<dyn Fn(&S, A, &S) -> f64 + 'a>;

/// A [`SearchProblem`] assembled from plain closures.
///
/// ```
/// use gridsearch_search::{FnProblem, SearchPolicy, breadth_first_search};
///
/// // Walk the integers from 0 to 5 with +1 / -1 moves.
/// let problem = FnProblem::new(0i32, |s: &i32, a: i32| s + a, |s: &i32| *s == 5, vec![1, -1]);
/// let run = breadth_first_search(&problem, &SearchPolicy::default()).unwrap();
/// assert_eq!(run.result().unwrap().states, vec![0, 1, 2, 3, 4, 5]);
/// ```
pub struct FnProblem<'a, S, A> {
    initial: S,
    actions: Vec<A>,
    transition: TransitionFn<'a, S, A>,
    is_goal: GoalFn<'a, S>,
    heuristic: Option<HeuristicFn<'a, S>>,
    step_cost: Option<StepCostFn<'a, S, A>>,
}

impl<'a, S, A> FnProblem<'a, S, A> {
    pub fn new(
        initial: S,
        transition: impl Fn(&S, A) -> S + 'a,
        is_goal: impl Fn(&S) -> bool + 'a,
        actions: impl Into<Vec<A>>,
    ) -> Self {
        Self {
            initial,
            actions: actions.into(),
            transition: Box::new(transition),
            is_goal: Box::new(is_goal),
            heuristic: None,
            step_cost: None,
        }
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: impl Fn(&S) -> f64 + 'a) -> Self {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    #[must_use]
    pub fn with_step_cost(mut self, step_cost: impl Fn(&S, A, &S) -> f64 + 'a) -> Self {
        self.step_cost = Some(Box::new(step_cost));
        self
    }
}

impl<S, A> SearchProblem for FnProblem<'_, S, A>
where
    S: Clone + Eq + Hash,
    A: Copy,
{
    type State = S;
    type Action = A;

    fn initial_state(&self) -> S {
        self.initial.clone()
    }

    fn actions(&self) -> &[A] {
        &self.actions
    }

    fn transition(&self, state: &S, action: A) -> S {
        (self.transition)(state, action)
    }

    fn is_goal(&self, state: &S) -> bool {
        (self.is_goal)(state)
    }

    fn step_cost(&self, from: &S, action: A, to: &S) -> f64 {
        match &self.step_cost {
            Some(cost) => cost(from, action, to),
            None if from == to => 0.0,
            None => 1.0,
        }
    }

    fn heuristic(&self, state: &S) -> f64 {
        self.heuristic.as_ref().map_or(0.0, |h| h(state))
    }
}
