//! Shared fixtures for the test modules: fixed maze instances and a tiny
//! explicit-graph environment for the cases a grid cannot express.

use crate::search::{Environment, Heuristic, HeuristicValue, Transition};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

/// The 10×10 key maze used across the engine tests. The cheapest route is
/// 18 steps: 5 from the start to the key at (2, 3), then 13 on to the goal.
/// The start-to-key rectangle, row 3 and the rightmost column are kept open
/// so that every heuristic-guided strategy can descend monotonically.
pub const KEY_MAZE_10X10_TEXT: &str = "
    S....#....
    ...#.#.##.
    ...#...#..
    ..K.......
    #.######..
    ....#..#..
    .####..#..
    .......#..
    #.#####.#.
    .........G
";

/// A fully open 5×5 maze without a key; the shortest route costs 8.
pub const OPEN_MAZE_5X5_TEXT: &str = "
    S....
    .....
    .....
    .....
    ....G
";

/// A hand-rolled state space over named nodes, for contract edge cases and
/// weighted-cost behaviour that the uniform-cost grid cannot exhibit.
#[derive(Debug, Clone)]
pub struct GraphEnvironment {
    initial: &'static str,
    goals: Vec<&'static str>,
    edges: Vec<(&'static str, &'static str, f64)>,
}

impl GraphEnvironment {
    /// The initial state has no outgoing transitions and is not a goal.
    pub fn without_successors() -> Self {
        Self {
            initial: "start",
            goals: vec!["goal"],
            edges: vec![],
        }
    }

    /// The initial state already satisfies the goal test.
    pub fn goal_at_start() -> Self {
        Self {
            initial: "start",
            goals: vec!["start"],
            edges: vec![],
        }
    }

    /// One edge with a negative step cost, which every engine must reject.
    pub fn with_negative_edge() -> Self {
        Self {
            initial: "start",
            goals: vec!["goal"],
            edges: vec![("start", "trap", -1.0), ("trap", "goal", 1.0)],
        }
    }

    /// The direct edge to "a" costs 10; the detour through "b" costs 2.
    pub fn weighted_diamond() -> Self {
        Self {
            initial: "start",
            goals: vec!["goal"],
            edges: vec![
                ("start", "a", 10.0),
                ("start", "b", 1.0),
                ("b", "a", 1.0),
                ("a", "goal", 1.0),
            ],
        }
    }

    /// With [`Self::inconsistent_heuristic`], A* closes "b" at cost 5 before
    /// the cheaper route through "a" is found, forcing a reopen. The
    /// heuristic is admissible (true costs: a = 11, b = 10) but violates
    /// consistency on the a → b edge.
    pub fn inconsistent_heuristic_graph() -> Self {
        Self {
            initial: "start",
            goals: vec!["goal"],
            edges: vec![
                ("start", "a", 1.0),
                ("start", "b", 5.0),
                ("a", "b", 1.0),
                ("b", "goal", 10.0),
            ],
        }
    }

    pub fn inconsistent_heuristic() -> FixedHeuristic {
        FixedHeuristic::new(&[("start", 11.0), ("a", 10.9), ("b", 0.0), ("goal", 0.0)])
    }
}

impl Environment for GraphEnvironment {
    type State = &'static str;
    type Action = &'static str;

    fn initial_state(&self) -> &'static str {
        self.initial
    }

    fn is_goal(&self, state: &&'static str) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &&'static str) -> Vec<Transition<&'static str, &'static str>> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(_, to, cost)| Transition {
                state: to,
                action: to,
                cost,
            })
            .collect()
    }
}

/// A table-driven heuristic for the graph fixtures; unlisted states map to 0.
#[derive(Debug, Clone)]
pub struct FixedHeuristic {
    values: HashMap<&'static str, f64>,
}

impl FixedHeuristic {
    pub fn new(values: &[(&'static str, f64)]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

impl Heuristic<GraphEnvironment> for FixedHeuristic {
    fn evaluate(&mut self, state: &&'static str, _env: &GraphEnvironment) -> HeuristicValue {
        OrderedFloat(self.values.get(state).copied().unwrap_or(0.0))
    }
}
