//! Ladder tree arena
//!
//! Every word reached during a search becomes a node in a growable arena.
//! Nodes point back at their parent by index, which keeps the tree acyclic
//! and lets the whole structure drop in one go when the search ends.

/// Index of a node inside a [`LadderTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw arena index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One word instance reached during a search
#[derive(Debug, Clone)]
pub struct LadderNode {
    word: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl LadderNode {
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Node that produced this one; `None` only for the root
    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Nodes produced when this one was expanded, in discovery order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena of ladder nodes rooted at the start word
#[derive(Debug, Clone)]
pub struct LadderTree {
    nodes: Vec<LadderNode>,
}

impl LadderTree {
    /// Create a tree holding only the root node
    #[must_use]
    pub fn with_root(word: impl Into<String>) -> Self {
        Self {
            nodes: vec![LadderNode {
                word: word.into(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node id
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a node under `parent` and record it as one of its children
    ///
    /// # Panics
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, word: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(LadderNode {
            word: word.into(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Look up a node
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> &LadderNode {
        &self.nodes[id.0]
    }

    #[inline]
    #[must_use]
    pub fn word(&self, id: NodeId) -> &str {
        &self.nodes[id.0].word
    }

    #[inline]
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Number of nodes in the tree, root included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree is created with its root
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in creation order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Iterate over the ancestors of `id`, starting with `id` itself and
    /// ending at the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&current| self.nodes[current.0].parent)
    }

    /// Number of edges between `id` and the root
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count() - 1
    }

    /// Words from the root down to `id`
    ///
    /// Walks parent links up to and including the root, then reverses.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::solver::LadderTree;
    ///
    /// let mut tree = LadderTree::with_root("cat");
    /// let cot = tree.add_child(tree.root(), "cot");
    /// let cog = tree.add_child(cot, "cog");
    /// assert_eq!(tree.path_to(cog), vec!["cat", "cot", "cog"]);
    /// ```
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<String> {
        let mut path: Vec<String> = self
            .ancestors(id)
            .map(|ancestor| self.nodes[ancestor.0].word.clone())
            .collect();
        path.reverse();
        path
    }
}
