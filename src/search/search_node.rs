use strum_macros::EnumIs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node is in the closed list
    Closed,
}

/// Bookkeeping attached to one registered state. Nodes live in the
/// [`SearchSpace`](crate::search::SearchSpace) arena and refer to their parent
/// by id; the parent chain is only ever walked to reconstruct the path.
#[derive(Debug, Clone)]
pub struct SearchNode<A> {
    /// Status of the node
    status: SearchNodeStatus,
    /// Cost of the cheapest known path to this node
    g: f64,
    /// Heuristic estimate of the remaining cost. Only informed strategies set
    /// this; everything else leaves it at infinity and ignores it.
    h: f64,
    /// Number of edges on the path that discovered this node
    depth: u32,
    /// Action that led to this node, `None` only for the root
    action: Option<A>,
    /// Parent node, `None` only for the root
    parent: Option<NodeId>,
}

impl<A> SearchNode<A> {
    pub fn new_without_parent() -> Self {
        Self {
            status: SearchNodeStatus::New,
            g: f64::INFINITY,
            h: f64::INFINITY,
            depth: 0,
            action: None,
            parent: None,
        }
    }

    pub fn new_with_parent(parent: NodeId, action: A) -> Self {
        Self {
            status: SearchNodeStatus::New,
            g: f64::INFINITY,
            h: f64::INFINITY,
            depth: 0,
            action: Some(action),
            parent: Some(parent),
        }
    }

    /// Move the node onto the open list with the given path cost and depth.
    /// Also used when a cheaper path reopens an already closed node.
    pub fn open(&mut self, g: f64, depth: u32) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.depth = depth;
    }

    /// Redirect the node onto a cheaper incoming path. The previous parent
    /// chain must not survive, or the extracted path would not match the
    /// reported cost.
    pub fn set_parent(&mut self, parent: NodeId, action: A) {
        self.parent = Some(parent);
        self.action = Some(action);
    }

    pub fn set_h(&mut self, h: f64) {
        self.h = h;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}
