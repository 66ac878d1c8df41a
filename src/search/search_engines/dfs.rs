//! Depth first search with a hard depth limit.

use crate::search::search_engines::SearchEngine;
use crate::search::{
    checked_successors, Environment, Heuristic, NodeId, SearchError, SearchReport, SearchSpace,
    SearchStatistics,
};

pub(super) enum DepthLimitedOutcome<E: Environment> {
    Found {
        space: SearchSpace<E::State, E::Action>,
        goal_id: NodeId,
    },
    Exhausted {
        space: SearchSpace<E::State, E::Action>,
    },
}

/// One depth-limited pass, shared between [`Dfs`] and
/// [`Ids`](crate::search::search_engines::Ids). Branches deeper than
/// `depth_limit` are abandoned, not treated as failure of the whole search;
/// the caller decides what an exhausted pass means. Statistics accumulate in
/// the caller's instance so iterative deepening sums its passes.
pub(super) fn depth_limited_search<E: Environment>(
    env: &E,
    depth_limit: u32,
    statistics: &mut SearchStatistics,
) -> Result<DepthLimitedOutcome<E>, SearchError> {
    let mut search_space = SearchSpace::new(env.initial_state());
    let root_id = search_space.root_id();
    search_space.node_mut(root_id).open(0.0, 0);
    statistics.increment_generated_nodes(1);
    let mut stack = vec![root_id];

    while let Some(node_id) = stack.pop() {
        if search_space.node(node_id).status().is_closed() {
            continue;
        }
        search_space.node_mut(node_id).close();
        statistics.increment_expanded_nodes();

        let state = search_space.state(node_id).clone();
        if env.is_goal(&state) {
            return Ok(DepthLimitedOutcome::Found {
                space: search_space,
                goal_id: node_id,
            });
        }

        let g = search_space.node(node_id).g();
        let depth = search_space.node(node_id).depth();
        if depth >= depth_limit {
            continue;
        }
        for transition in checked_successors(env, &state)? {
            statistics.increment_generated_nodes(1);
            let child_id = search_space.insert_or_get(transition.state, transition.action, node_id);
            let child = search_space.node_mut(child_id);
            if child.status().is_new() {
                child.open(g + transition.cost, depth + 1);
                stack.push(child_id);
            }
        }
    }

    Ok(DepthLimitedOutcome::Exhausted {
        space: search_space,
    })
}

/// LIFO frontier. Neither optimal nor complete beyond its depth limit; the
/// limit is what guarantees termination on state spaces with unbounded paths.
#[derive(Debug)]
pub struct Dfs {
    depth_limit: u32,
}

impl Dfs {
    pub fn new(depth_limit: u32) -> Self {
        Self { depth_limit }
    }
}

impl<E: Environment> SearchEngine<E> for Dfs {
    fn search(
        &mut self,
        env: &E,
        _heuristic: &mut dyn Heuristic<E>,
    ) -> Result<SearchReport<E::State, E::Action>, SearchError> {
        let mut statistics = SearchStatistics::new();
        match depth_limited_search(env, self.depth_limit, &mut statistics)? {
            DepthLimitedOutcome::Found { space, goal_id } => {
                let (path, actions) = space.extract_path(goal_id);
                let path_cost = space.node(goal_id).g();
                Ok(SearchReport::from_success(
                    path,
                    actions,
                    path_cost,
                    statistics,
                    space.visited_states(),
                ))
            }
            DepthLimitedOutcome::Exhausted { space } => {
                Ok(SearchReport::from_failure(statistics, space.visited_states()))
            }
        }
    }
}
