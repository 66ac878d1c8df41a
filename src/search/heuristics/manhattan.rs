use crate::grid::{GridEnvironment, GridState};
use crate::search::{Heuristic, HeuristicValue};

/// Manhattan distance to the goal. While the key is not yet held the estimate
/// is the sum of the two legs (to the key cell, then key to goal); each leg is
/// a lower bound of its stage, so the sum never overestimates the true
/// remaining cost of the two-stage task.
#[derive(Clone, Debug, Default)]
pub struct ManhattanDistance {}

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance {}
    }
}

fn manhattan(from: (i32, i32), to: (i32, i32)) -> f64 {
    ((from.0 - to.0).abs() + (from.1 - to.1).abs()) as f64
}

impl Heuristic<GridEnvironment> for ManhattanDistance {
    fn evaluate(&mut self, state: &GridState, env: &GridEnvironment) -> HeuristicValue {
        let goal = env.goal();
        match env.key() {
            Some(key) if !state.has_key => {
                (manhattan(state.position(), key) + manhattan(key, goal)).into()
            }
            _ => manhattan(state.position(), goal).into(),
        }
    }
}
