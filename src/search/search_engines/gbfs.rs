//! This module implements the greedy best-first search algorithm.

use crate::search::search_engines::SearchEngine;
use crate::search::{
    checked_successors, Environment, Heuristic, HeuristicValue, SearchError, SearchReport,
    SearchSpace, SearchStatistics,
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Priority frontier ordered purely by the heuristic, ignoring accumulated
/// cost. Not optimal; the closed set is what guarantees termination on a
/// finite space. A cheaper rediscovery still redirects the node's parent so
/// the reported cost matches the reported path.
#[derive(Debug)]
pub struct Gbfs {}

impl Gbfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for Gbfs {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_evaluate<E: Environment>(
    heuristic: &mut dyn Heuristic<E>,
    state: &E::State,
    env: &E,
    statistics: &mut SearchStatistics,
) -> Result<HeuristicValue, SearchError> {
    let value = heuristic.evaluate(state, env);
    statistics.increment_evaluated_nodes();
    if value.into_inner() < 0.0 {
        return Err(SearchError::NegativeHeuristic {
            value: value.into_inner(),
        });
    }
    Ok(value)
}

impl<E: Environment> SearchEngine<E> for Gbfs {
    fn search(
        &mut self,
        env: &E,
        heuristic: &mut dyn Heuristic<E>,
    ) -> Result<SearchReport<E::State, E::Action>, SearchError> {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(env.initial_state());
        let mut frontier = PriorityQueue::new();

        let root_id = search_space.root_id();
        let root_h = checked_evaluate(heuristic, search_space.state(root_id), env, &mut statistics)?;
        {
            let root = search_space.node_mut(root_id);
            root.open(0.0, 0);
            root.set_h(root_h.into_inner());
        }
        statistics.increment_generated_nodes(1);
        frontier.push(root_id, Reverse(root_h));

        while let Some((node_id, _)) = frontier.pop() {
            if search_space.node(node_id).status().is_closed() {
                continue;
            }
            search_space.node_mut(node_id).close();
            statistics.increment_expanded_nodes();

            let state = search_space.state(node_id).clone();
            if env.is_goal(&state) {
                let goal_h = search_space.node(node_id).h();
                if goal_h != 0.0 {
                    return Err(SearchError::GoalHeuristicNotZero { value: goal_h });
                }
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
                if search_space.node(child_id).status().is_new() {
                    let h = checked_evaluate(
                        heuristic,
                        search_space.state(child_id),
                        env,
                        &mut statistics,
                    )?;
                    let child = search_space.node_mut(child_id);
                    child.open(new_g, depth + 1);
                    child.set_h(h.into_inner());
                    frontier.push(child_id, Reverse(h));
                } else if new_g < search_space.node(child_id).g() {
                    let child = search_space.node_mut(child_id);
                    child.open(new_g, depth + 1);
                    child.set_parent(node_id, transition.action);
                    let h = OrderedFloat(child.h());
                    statistics.increment_reopened_nodes();
                    frontier.push(child_id, Reverse(h));
                }
            }
        }

        let visited_states = search_space.visited_states();
        Ok(SearchReport::from_failure(statistics, visited_states))
    }
}
