use crate::search::{NodeId, SearchNode};
use segvec::{Linear, SegVec};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Arena of every state discovered by one search invocation, with the node
/// bookkeeping attached to each. Ids are indices into the arena and are only
/// meaningful within the space that issued them.
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<A>, Linear>,
    states: SegVec<S, Linear>,
    registered_states: HashMap<S, NodeId>,
}

impl<S, A> Debug for SearchSpace<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSpace")
            .field("len", &self.nodes.len())
            .finish()
    }
}

impl<S, A> SearchSpace<S, A>
where
    S: Clone + Eq + Hash,
{
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_states = HashMap::new();

        let root_id = NodeId(0);
        nodes.push(SearchNode::new_without_parent());
        states.push(initial_state.clone());
        registered_states.insert(initial_state, root_id);

        Self {
            nodes,
            states,
            registered_states,
        }
    }

    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Register `state` if it has not been seen before; either way, return
    /// the id of its node. For an already registered state the given parent
    /// and action are discarded: redirecting an existing node is an explicit
    /// decision of the reopening strategies, not of discovery.
    pub fn insert_or_get(&mut self, state: S, action: A, parent: NodeId) -> NodeId {
        match self.registered_states.get(&state) {
            Some(&node_id) => node_id,
            None => {
                let node_id = NodeId(self.nodes.len());
                self.nodes.push(SearchNode::new_with_parent(parent, action));
                self.states.push(state.clone());
                self.registered_states.insert(state, node_id);
                node_id
            }
        }
    }

    pub fn node(&self, node_id: NodeId) -> &SearchNode<A> {
        self.nodes.get(node_id.0).expect("Invalid node id")
    }

    pub fn node_mut(&mut self, node_id: NodeId) -> &mut SearchNode<A> {
        self.nodes.get_mut(node_id.0).expect("Invalid node id")
    }

    pub fn state(&self, node_id: NodeId) -> &S {
        self.states.get(node_id.0).expect("Invalid node id")
    }

    /// Walk the parent chain from `goal_id` back to the root and reverse it.
    /// Returns the visited states (root first, goal last) and the actions
    /// between them.
    pub fn extract_path(&self, goal_id: NodeId) -> (Vec<S>, Vec<A>)
    where
        A: Clone,
    {
        let mut path = vec![self.state(goal_id).clone()];
        let mut actions = vec![];
        let mut current = self.node(goal_id);
        while let Some(parent_id) = current.parent() {
            actions.push(
                current
                    .action()
                    .expect("non-root node must carry an action")
                    .clone(),
            );
            path.push(self.state(parent_id).clone());
            current = self.node(parent_id);
        }
        path.reverse();
        actions.reverse();
        (path, actions)
    }

    /// Every state registered by this search, discovered or expanded. This is
    /// the diagnostic surface the external visualizer consumes.
    pub fn visited_states(&self) -> HashSet<S> {
        self.registered_states.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.registered_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered_states.is_empty()
    }
}
