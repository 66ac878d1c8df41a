use thiserror::Error;

/// Contract violations between the engine and its collaborators. Exhausting
/// the frontier without a goal is not an error; it is a `success = false`
/// report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("environment produced a transition with negative step cost {cost}")]
    NegativeStepCost { cost: f64 },
    #[error("heuristic returned a negative estimate {value} for a reachable state")]
    NegativeHeuristic { value: f64 },
    #[error("heuristic evaluates to {value} on a goal state, expected 0")]
    GoalHeuristicNotZero { value: f64 },
}
