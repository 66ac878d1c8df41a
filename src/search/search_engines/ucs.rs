//! Uniform cost search.

use crate::search::search_engines::SearchEngine;
use crate::search::{
    checked_successors, Environment, Heuristic, SearchError, SearchReport, SearchSpace,
    SearchStatistics,
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Priority frontier ordered by cumulative path cost `g`. Optimal and
/// complete for any non-negative step costs. Re-pushing an id that is already
/// queued updates its priority in place, so a cheaper rediscovery is a
/// decrease-key; a cheaper path to an already closed state reopens it.
#[derive(Debug)]
pub struct Ucs {}

impl Ucs {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for Ucs {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> SearchEngine<E> for Ucs {
    fn search(
        &mut self,
        env: &E,
        _heuristic: &mut dyn Heuristic<E>,
    ) -> Result<SearchReport<E::State, E::Action>, SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(env.initial_state());
        let mut frontier = PriorityQueue::new();

        let root_id = search_space.root_id();
        search_space.node_mut(root_id).open(0.0, 0);
        statistics.increment_generated_nodes(1);
        frontier.push(root_id, Reverse(OrderedFloat(0.0)));

        while let Some((node_id, _)) = frontier.pop() {
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
                let new_g = g + transition.cost;
                let child_id =
                    search_space.insert_or_get(transition.state, transition.action.clone(), node_id);
                let child = search_space.node_mut(child_id);
                if child.status().is_new() {
                    child.open(new_g, depth + 1);
                    frontier.push(child_id, Reverse(OrderedFloat(new_g)));
                } else if new_g < child.g() {
                    child.open(new_g, depth + 1);
                    child.set_parent(node_id, transition.action);
                    statistics.increment_reopened_nodes();
                    frontier.push(child_id, Reverse(OrderedFloat(new_g)));
                }
            }
        }

        let visited_states = search_space.visited_states();
        Ok(SearchReport::from_failure(statistics, visited_states))
    }
}
