use crate::grid::{GridEnvironment, GridState};
use crate::search::{Heuristic, HeuristicValue};

/// Straight-line distance to the goal, with the same two-leg split as the
/// Manhattan variant while the key is not held. Dominated by Manhattan on a
/// 4-connected grid, so it is admissible wherever Manhattan is.
#[derive(Clone, Debug, Default)]
pub struct EuclideanDistance {}

impl EuclideanDistance {
    pub fn new() -> Self {
        EuclideanDistance {}
    }
}

fn euclidean(from: (i32, i32), to: (i32, i32)) -> f64 {
    f64::from(from.0 - to.0).hypot(f64::from(from.1 - to.1))
}

impl Heuristic<GridEnvironment> for EuclideanDistance {
    fn evaluate(&mut self, state: &GridState, env: &GridEnvironment) -> HeuristicValue {
        let goal = env.goal();
        match env.key() {
            Some(key) if !state.has_key => {
                (euclidean(state.position(), key) + euclidean(key, goal)).into()
            }
            _ => euclidean(state.position(), goal).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::ManhattanDistance;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn straight_line_with_key_held() {
        let env = GridEnvironment::from_text(KEY_MAZE_10X10_TEXT).unwrap();
        let mut heuristic = EuclideanDistance::new();
        let state = GridState::new(6, 5, true);
        assert_approx_eq!(
            heuristic.evaluate(&state, &env).into_inner(),
            5.0 // 3-4-5 triangle to (9, 9)
        );
    }

    #[test]
    fn never_exceeds_manhattan() {
        let env = GridEnvironment::from_text(KEY_MAZE_10X10_TEXT).unwrap();
        let mut euclidean = EuclideanDistance::new();
        let mut manhattan = ManhattanDistance::new();
        for x in 0..10 {
            for y in 0..10 {
                for has_key in [false, true] {
                    let state = GridState::new(x, y, has_key);
                    assert!(
                        euclidean.evaluate(&state, &env) <= manhattan.evaluate(&state, &env),
                        "euclidean exceeds manhattan at {state:?}"
                    );
                }
            }
        }
    }
}
