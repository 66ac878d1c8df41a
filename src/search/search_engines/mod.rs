mod astar;
mod bfs;
mod dfs;
mod gbfs;
mod ids;
mod search_engine;
mod ucs;

pub use astar::AStar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use gbfs::Gbfs;
pub use ids::Ids;
pub use search_engine::{SearchEngine, SearchOptions, StrategyName};
pub use ucs::Ucs;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridEnvironment;
    use crate::search::heuristics::{
        EuclideanDistance, HeuristicName, ManhattanDistance, ZeroHeuristic,
    };
    use crate::search::{validate, SearchError};
    use crate::test_utils::*;

    fn all_strategies() -> Vec<StrategyName> {
        vec![
            StrategyName::Bfs,
            StrategyName::Dfs,
            StrategyName::Ucs,
            StrategyName::Ids,
            StrategyName::Gbfs,
            StrategyName::AStar,
        ]
    }

    #[test]
    fn key_maze_cost_agreement() {
        let env = GridEnvironment::from_text(KEY_MAZE_10X10_TEXT).unwrap();

        // Optimal strategies all agree on the cheapest key-then-goal route.
        let mut bfs = Bfs::new();
        let mut ucs = Ucs::new();
        let mut astar_manhattan = AStar::new();
        let mut astar_euclidean = AStar::new();
        let mut gbfs = Gbfs::new();

        let reports = vec![
            bfs.search(&env, &mut ZeroHeuristic::new()).unwrap(),
            ucs.search(&env, &mut ZeroHeuristic::new()).unwrap(),
            astar_manhattan
                .search(&env, &mut ManhattanDistance::new())
                .unwrap(),
            astar_euclidean
                .search(&env, &mut EuclideanDistance::new())
                .unwrap(),
            gbfs.search(&env, &mut ManhattanDistance::new()).unwrap(),
        ];
        for report in &reports {
            assert!(report.success);
            assert_eq!(report.path_cost, 18.0);
            assert_eq!(report.actions.len(), 18);
            validate(report, &env).unwrap();
        }
    }

    #[test]
    fn key_maze_incomplete_strategies_still_reach_the_goal() {
        let env = GridEnvironment::from_text(KEY_MAZE_10X10_TEXT).unwrap();
        let options = SearchOptions::default();
        for name in [StrategyName::Dfs, StrategyName::Ids] {
            let report = name
                .create(&options)
                .search(&env, &mut ZeroHeuristic::new())
                .unwrap();
            assert!(report.success, "{name:?} failed on the key maze");
            assert!(report.path_cost >= 18.0);
            validate(&report, &env).unwrap();
        }
    }

    #[test]
    fn key_maze_goal_state_carries_the_key() {
        let env = GridEnvironment::from_text(KEY_MAZE_10X10_TEXT).unwrap();
        let report = Bfs::new().search(&env, &mut ZeroHeuristic::new()).unwrap();
        let goal_state = report.path.last().unwrap();
        assert!(goal_state.has_key);
        assert_eq!(goal_state.position(), (9, 9));
        // the key cell is on the path before the goal
        assert!(report
            .path
            .iter()
            .any(|state| state.position() == (2, 3) && state.has_key));
    }

    #[test]
    fn dead_environment_is_a_failure_not_an_error() {
        let env = GraphEnvironment::without_successors();
        let options = SearchOptions::default();
        for name in all_strategies() {
            let report = name
                .create(&options)
                .search(&env, &mut ZeroHeuristic::new())
                .unwrap();
            assert!(!report.success, "{name:?} claimed success");
            assert!(report.nodes_expanded >= 1, "{name:?} expanded nothing");
            assert!(report.path.is_empty());
            assert!(report.actions.is_empty());
        }
    }

    #[test]
    fn negative_step_cost_fails_fast() {
        let env = GraphEnvironment::with_negative_edge();
        let options = SearchOptions::default();
        for name in all_strategies() {
            let result = name
                .create(&options)
                .search(&env, &mut ZeroHeuristic::new());
            assert!(
                matches!(result, Err(SearchError::NegativeStepCost { .. })),
                "{name:?} accepted a negative step cost"
            );
        }
    }

    #[test]
    fn initial_state_already_at_the_goal() {
        let env = GraphEnvironment::goal_at_start();
        let options = SearchOptions::default();
        for name in all_strategies() {
            let report = name
                .create(&options)
                .search(&env, &mut ZeroHeuristic::new())
                .unwrap();
            assert!(report.success, "{name:?}");
            assert_eq!(report.path_cost, 0.0);
            assert_eq!(report.path, vec!["start"]);
            assert!(report.actions.is_empty());
            assert_eq!(report.nodes_expanded, 1);
        }
    }

    #[test]
    fn registry_covers_every_heuristic() {
        let env = GridEnvironment::from_text(KEY_MAZE_10X10_TEXT).unwrap();
        for heuristic_name in [
            HeuristicName::Manhattan,
            HeuristicName::Euclidean,
            HeuristicName::Zero,
        ] {
            let mut heuristic = heuristic_name.create();
            let report = AStar::new().search(&env, heuristic.as_mut()).unwrap();
            assert!(report.success);
            assert_eq!(report.path_cost, 18.0);
        }
    }
}
