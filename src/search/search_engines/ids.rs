//! Iterative deepening search.

use super::dfs::{depth_limited_search, DepthLimitedOutcome};
use crate::search::search_engines::SearchEngine;
use crate::search::{Environment, Heuristic, SearchError, SearchReport, SearchStatistics};
use std::collections::HashSet;

/// Repeated depth-limited passes with limits 0, 1, 2, … Optimal and complete
/// for uniform step costs, at the price of re-expanding shallow states every
/// pass: the expansion counter sums all passes, which inflates it relative to
/// the single-pass strategies. That is the expected cost profile, not a bug.
#[derive(Debug)]
pub struct Ids {
    max_depth: u32,
}

impl Ids {
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }
}

impl<E: Environment> SearchEngine<E> for Ids {
    fn search(
        &mut self,
        env: &E,
        _heuristic: &mut dyn Heuristic<E>,
    ) -> Result<SearchReport<E::State, E::Action>, SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut all_visited: HashSet<E::State> = HashSet::new();

        for depth_limit in 0..=self.max_depth {
            match depth_limited_search(env, depth_limit, &mut statistics)? {
                DepthLimitedOutcome::Found { space, goal_id } => {
                    all_visited.extend(space.visited_states());
                    let (path, actions) = space.extract_path(goal_id);
                    let path_cost = space.node(goal_id).g();
                    return Ok(SearchReport::from_success(
                        path,
                        actions,
                        path_cost,
                        statistics,
                        all_visited,
                    ));
                }
                DepthLimitedOutcome::Exhausted { space } => {
                    all_visited.extend(space.visited_states());
                }
            }
        }

        Ok(SearchReport::from_failure(statistics, all_visited))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridEnvironment;
    use crate::search::heuristics::ZeroHeuristic;
    use crate::search::search_engines::Bfs;
    use crate::test_utils::*;

    #[test]
    fn matches_the_bfs_cost_on_uniform_step_costs() {
        let env = GridEnvironment::from_text(OPEN_MAZE_5X5_TEXT).unwrap();
        let ids_report = Ids::new(100)
            .search(&env, &mut ZeroHeuristic::new())
            .unwrap();
        let bfs_report = Bfs::new().search(&env, &mut ZeroHeuristic::new()).unwrap();
        assert!(ids_report.success);
        assert_eq!(ids_report.path_cost, bfs_report.path_cost);
    }

    #[test]
    fn expansions_accumulate_across_passes() {
        let env = GridEnvironment::from_text(OPEN_MAZE_5X5_TEXT).unwrap();
        let ids_report = Ids::new(100)
            .search(&env, &mut ZeroHeuristic::new())
            .unwrap();
        let bfs_report = Bfs::new().search(&env, &mut ZeroHeuristic::new()).unwrap();
        assert!(ids_report.nodes_expanded > bfs_report.nodes_expanded);
    }

    #[test]
    fn max_depth_bounds_the_deepest_pass() {
        let env = GridEnvironment::from_text(OPEN_MAZE_5X5_TEXT).unwrap();
        let report = Ids::new(3)
            .search(&env, &mut ZeroHeuristic::new())
            .unwrap();
        assert!(!report.success);
        assert!(report.nodes_expanded >= 4); // at least the root, every pass
    }
}
