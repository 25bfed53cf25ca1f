//! Local AST model for the call-graph core.
//!
//! The front-end lowers libclang entities into this arena so the graph
//! builder and printer never touch the parser's types directly. Only the
//! node kinds the call-graph cares about are distinguished; everything else
//! collapses into `NodeKind::Other` but still participates in traversal and
//! name resolution.
use std::path::PathBuf;

/// Index of a node inside an [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// The subset of cursor kinds the explorer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    TranslationUnit,
    FunctionDecl,
    Method,
    Constructor,
    Destructor,
    FunctionTemplate,
    CallExpr,
    AnnotateAttr,
    Other,
}

impl NodeKind {
    /// Kinds that become the enclosing-function context during the walk.
    #[must_use]
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            NodeKind::FunctionDecl
                | NodeKind::Method
                | NodeKind::Constructor
                | NodeKind::FunctionTemplate
        )
    }

    /// Kinds that contribute call edges when their reference resolves.
    #[must_use]
    pub fn is_call_like(self) -> bool {
        matches!(self, NodeKind::CallExpr | NodeKind::Constructor | NodeKind::Destructor)
    }
}

/// File and line a node originates from. Nodes synthesized by the compiler
/// carry no location at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLoc {
    pub file: PathBuf,
    pub line: u32,
}

impl SourceLoc {
    pub fn new<P: Into<PathBuf>>(file: P, line: u32) -> Self {
        Self { file: file.into(), line }
    }
}

/// One node of the lowered syntax tree.
///
/// `parent` is the *semantic* parent (enclosing namespace/class/function),
/// which for out-of-line definitions differs from the lexical position the
/// node was discovered at. `referenced` is the resolution of a call-like
/// node to its target declaration; `None` means the call did not resolve.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub spelling: String,
    pub display_name: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub referenced: Option<NodeId>,
    pub location: Option<SourceLoc>,
    pub is_virtual: bool,
    pub is_pure_virtual: bool,
}

impl Node {
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            spelling: String::new(),
            display_name: String::new(),
            parent: None,
            children: Vec::new(),
            referenced: None,
            location: None,
            is_virtual: false,
            is_pure_virtual: false,
        }
    }

    /// Builder-style helper: sets both the plain spelling and the display
    /// name (most nodes have identical ones; overloaded functions differ).
    #[must_use]
    pub fn named(kind: NodeKind, spelling: &str, display_name: &str) -> Self {
        let mut n = Self::new(kind);
        n.spelling = spelling.to_string();
        n.display_name = display_name.to_string();
        n
    }

    #[must_use]
    pub fn at<P: Into<PathBuf>>(mut self, file: P, line: u32) -> Self {
        self.location = Some(SourceLoc::new(file, line));
        self
    }
}

/// Arena owning every lowered node across all parsed translation units.
///
/// Accumulates for the whole run: each translation unit contributes one
/// `TranslationUnit` root plus its subtree, and call edges may point at
/// nodes from any unit.
#[derive(Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
}

impl Ast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Push `node` wired under `parent`: sets its semantic parent and
    /// registers it in the parent's child list.
    pub fn add_child(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        node.parent = Some(parent);
        let id = self.push(node);
        self.nodes[parent.index()].children.push(id);
        id
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Display names of the node's attribute-annotation children, in order.
    pub fn annotations(&self, id: NodeId) -> impl Iterator<Item = &str> + '_ {
        self.node(id)
            .children
            .iter()
            .map(|c| self.node(*c))
            .filter(|n| n.kind == NodeKind::AnnotateAttr)
            .map(|n| n.display_name.as_str())
    }
}
