//! Immutable node trees describing a declarative UI composition.
//!
//! Trees are produced once per analyzed declaration by an external
//! syntax-tree builder and are read-only for the lifetime of an analysis
//! pass. Nodes live in an arena ([`Tree`]) and reference each other through
//! integer [`NodeId`]s; [`TreeBuilder`] only ever attaches freshly created
//! nodes, so the structure is a tree by construction and cycles cannot
//! occur.

/// Index of a node within its [`Tree`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Syntactic kind of a node.
///
/// Only the distinction between a type declaration and everything else is
/// needed at the rule-entry boundary ("is this a UI-view declaration");
/// nested composition elements are all invocation-shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A structure declaration (e.g. a view type).
    Structure,
    /// An invocation expression, possibly with a chain of modifiers.
    Call,
    /// Any other syntactic element (properties, accessors, closures).
    Other,
}

/// One immutable element of the analyzed tree.
///
/// For [`NodeKind::Call`] nodes, `name` holds the rendered invocation chain
/// as supplied by the tree builder, e.g.
/// `Text("Hello").onTapGesture { play() }`. The rendering may be partial
/// (an identifier without its argument list); the matcher degrades to
/// presence-only checks in that case.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    name: Option<String>,
    offset: Option<usize>,
    inherited_types: Vec<String>,
    children: Vec<NodeId>,
}

impl Node {
    fn with_kind(kind: NodeKind, name: Option<String>) -> Self {
        Self {
            kind,
            name,
            offset: None,
            inherited_types: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a structure declaration node.
    #[must_use]
    pub fn structure(name: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Structure, Some(name.into()))
    }

    /// Creates an invocation node from its rendered signature.
    #[must_use]
    pub fn call(signature: impl Into<String>) -> Self {
        Self::with_kind(NodeKind::Call, Some(signature.into()))
    }

    /// Creates a nameless node (e.g. a property wrapper or accessor).
    #[must_use]
    pub fn anonymous() -> Self {
        Self::with_kind(NodeKind::Other, None)
    }

    /// Sets the byte offset used for violation locations.
    ///
    /// Nodes without an offset never become report sites, but their
    /// children are still searched.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds an inherited type name (e.g. `View`).
    #[must_use]
    pub fn with_inherited(mut self, ty: impl Into<String>) -> Self {
        self.inherited_types.push(ty.into());
        self
    }

    /// Returns the node's syntactic kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the declared head text or rendered signature, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the byte offset, if the builder supplied one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Returns the inherited type names in declaration order.
    #[must_use]
    pub fn inherited_types(&self) -> &[String] {
        &self.inherited_types
    }

    /// Returns true if `ty` appears among the inherited types.
    #[must_use]
    pub fn inherits(&self, ty: &str) -> bool {
        self.inherited_types.iter().any(|t| t == ty)
    }

    /// Returns the children in left-to-right source order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns true if the node has any children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// An immutable tree of [`Node`]s rooted at one top-level declaration.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Returns the root node's id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this tree's builder.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Returns the number of nodes in the tree (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree holds no nodes; never the case for a tree
    /// produced by [`TreeBuilder`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Builder used by the syntax-tree adapter to assemble a [`Tree`].
///
/// # Example
///
/// ```
/// use viewlint_core::{Node, TreeBuilder};
///
/// let mut builder = TreeBuilder::new(
///     Node::structure("ContentView").with_offset(0).with_inherited("View"),
/// );
/// let stack = builder.push_child(builder.root(), Node::call("HStack").with_offset(42));
/// builder.push_child(stack, Node::call("Button(\"Go\")").with_offset(55));
/// let tree = builder.finish();
/// assert_eq!(tree.len(), 3);
/// ```
#[derive(Debug)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    /// Starts a tree with the given root node.
    #[must_use]
    pub fn new(root: Node) -> Self {
        Self { nodes: vec![root] }
    }

    /// Returns the root node's id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends `node` as the last child of `parent` and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` did not come from this builder.
    pub fn push_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes[parent.index()].children.push(id);
        self.nodes.push(node);
        id
    }

    /// Freezes the arena into an immutable [`Tree`].
    #[must_use]
    pub fn finish(self) -> Tree {
        Tree {
            nodes: self.nodes,
            root: NodeId(0),
        }
    }
}
