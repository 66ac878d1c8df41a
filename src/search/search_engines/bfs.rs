//! Breadth first search

use crate::search::{
    checked_successors, Environment, Heuristic, SearchError, SearchReport, SearchSpace,
    SearchStatistics,
};
use crate::search::search_engines::SearchEngine;
use std::collections::VecDeque;

/// FIFO frontier; expands states in order of discovery depth. Optimal only
/// when every step costs the same, which the grid environment guarantees.
#[derive(Debug)]
pub struct Bfs {}

impl Bfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for Bfs {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> SearchEngine<E> for Bfs {
    fn search(
        &mut self,
        env: &E,
        _heuristic: &mut dyn Heuristic<E>,
    ) -> Result<SearchReport<E::State, E::Action>, SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(env.initial_state());
        let mut queue = VecDeque::new();

        let root_id = search_space.root_id();
        search_space.node_mut(root_id).open(0.0, 0);
        statistics.increment_generated_nodes(1);
        queue.push_back(root_id);

        while let Some(node_id) = queue.pop_front() {
            if search_space.node(node_id).status().is_closed() {
                continue;
            }
            search_space.node_mut(node_id).close();
            statistics.increment_expanded_nodes();

            let state = search_space.state(node_id).clone();
            if env.is_goal(&state) {
                let (path, actions) = search_space.extract_path(node_id);
                let path_cost = search_space.node(node_id).g();
                let visited_states = search_space.visited_states();
                return Ok(SearchReport::from_success(
                    path,
                    actions,
                    path_cost,
                    statistics,
                    visited_states,
                ));
            }

            let g = search_space.node(node_id).g();
            let depth = search_space.node(node_id).depth();
            for transition in checked_successors(env, &state)? {
                statistics.increment_generated_nodes(1);
                let child_id =
                    search_space.insert_or_get(transition.state, transition.action, node_id);
                let child = search_space.node_mut(child_id);
                if child.status().is_new() {
                    child.open(g + transition.cost, depth + 1);
                    queue.push_back(child_id);
                }
            }
        }

        let visited_states = search_space.visited_states();
        Ok(SearchReport::from_failure(statistics, visited_states))
    }
}
