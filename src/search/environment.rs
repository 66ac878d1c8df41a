//! The state-transition interface every search strategy consumes. Concrete
//! problem instances (maze construction, connectivity checks, rendering) live
//! outside the engine; the engine only ever sees this trait.

use crate::search::SearchError;
use std::fmt::Debug;
use std::hash::Hash;

/// A single outgoing edge of the state space.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S, A> {
    pub state: S,
    pub action: A,
    pub cost: f64,
}

/// A deterministic, fully observable state space. States are identified by
/// semantic value alone: two action sequences reaching the same state meet in
/// one search node.
pub trait Environment {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + PartialEq + Debug;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// All outgoing transitions of `state`. Finite per call; step costs must
    /// be non-negative.
    fn successors(&self, state: &Self::State) -> Vec<Transition<Self::State, Self::Action>>;
}

/// Successor generation with the cost contract enforced. A negative step cost
/// would silently corrupt every cost-ordered frontier, so it fails the whole
/// search instead.
pub fn checked_successors<E: Environment>(
    env: &E,
    state: &E::State,
) -> Result<Vec<Transition<E::State, E::Action>>, SearchError> {
    let transitions = env.successors(state);
    for transition in &transitions {
        if transition.cost < 0.0 {
            return Err(SearchError::NegativeStepCost {
                cost: transition.cost,
            });
        }
    }
    Ok(transitions)
}
