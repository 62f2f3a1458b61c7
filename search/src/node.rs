//! Search nodes and the arena that owns them.
//!
//! Nodes form a tree reachable only backward (child → parent). Parents are
//! referenced by [`NodeId`], an index into the owning [`SearchTree`], so the
//! tree has no reference cycles and no lifetimes to manage.

/// Index of a node in its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable search node.
///
/// All fields are fixed at construction. A cheaper path to the same state is
/// a new node; nothing already in the tree changes.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    state: S,
    cost: f64,
    parent: Option<NodeId>,
    parent_action: Option<A>,
    depth: u32,
}

impl<S, A: Copy> SearchNode<S, A> {
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Cumulative path cost from the root (`g`).
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Parent node (`None` for the root).
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The action taken from the parent (`None` for the root).
    #[must_use]
    pub fn parent_action(&self) -> Option<A> {
        self.parent_action
    }

    /// Tree depth (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only arena of search nodes for a single search.
#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A: Copy> SearchTree<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a root node: cost 0, no parent, no action.
    pub fn add_root(&mut self, state: S) -> NodeId {
        self.insert(SearchNode {
            state,
            cost: 0.0,
            parent: None,
            parent_action: None,
            depth: 0,
        })
    }

    /// Add a child of `parent` reached by `action`, costing `step_cost` more
    /// than its parent.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree.
    pub fn add_child(&mut self, parent: NodeId, action: A, state: S, step_cost: f64) -> NodeId {
        let (cost, depth) = {
            let p = &self.nodes[parent.0];
            (p.cost + step_cost, p.depth + 1)
        };
        self.insert(SearchNode {
            state,
            cost,
            parent: Some(parent),
            parent_action: Some(action),
            depth,
        })
    }

    fn insert(&mut self, node: SearchNode<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S, A>> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S, A: Copy> Default for SearchTree<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// The frontier ordering key: `(priority, seq)`.
///
/// Lower priority first; ties go to the earlier insertion. Priorities are
/// compared with `f64::total_cmp`, so the order is total even for NaN.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub priority: f64,
    pub seq: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}
