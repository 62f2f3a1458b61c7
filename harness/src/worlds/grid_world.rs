//! `GridWorld`: a [`GridMap`] bound to an action set and a heuristic.
//!
//! The map owns the environment semantics (transition, step cost, goal
//! test); this adapter only fixes which actions are offered and which
//! estimate A* sees.

use gridsearch_kernel::grid::action::GridAction;
use gridsearch_kernel::grid::heuristic::Heuristic;
use gridsearch_kernel::grid::map::GridMap;
use gridsearch_kernel::grid::state::GridState;

use gridsearch_search::contract::SearchProblem;

/// Search-capable view of a grid map.
#[derive(Debug, Clone, Copy)]
pub struct GridWorld<'a> {
    map: &'a GridMap,
    actions: &'static [GridAction],
    heuristic: Heuristic,
}

impl<'a> GridWorld<'a> {
    /// Four-connected moves, zero heuristic.
    #[must_use]
    pub fn new(map: &'a GridMap) -> Self {
        Self {
            map,
            actions: GridAction::set(false),
            heuristic: Heuristic::Zero,
        }
    }

    /// Offer the four diagonal moves after the cardinal ones.
    #[must_use]
    pub fn with_diagonals(mut self, diagonal: bool) -> Self {
        self.actions = GridAction::set(diagonal);
        self
    }

    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[must_use]
    pub fn map(&self) -> &'a GridMap {
        self.map
    }

    #[must_use]
    pub fn diagonal(&self) -> bool {
        self.actions.len() > GridAction::CARDINAL.len()
    }
}

impl SearchProblem for GridWorld<'_> {
    type State = GridState;
    type Action = GridAction;

    fn initial_state(&self) -> GridState {
        self.map.initial()
    }

    fn actions(&self) -> &[GridAction] {
        self.actions
    }

    fn transition(&self, state: &GridState, action: GridAction) -> GridState {
        self.map.transition(*state, action)
    }

    fn is_goal(&self, state: &GridState) -> bool {
        self.map.is_goal(*state)
    }

    fn step_cost(&self, from: &GridState, action: GridAction, to: &GridState) -> f64 {
        self.map.step_cost(*from, action, *to)
    }

    fn heuristic(&self, state: &GridState) -> f64 {
        self.map.heuristic(self.heuristic, *state)
    }
}
