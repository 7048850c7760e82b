//! Dependency graph types.

use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Identity of a graph node. Value type, equality by content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeId {
    /// A single record, interface, or function, rendered `pkg.Name`.
    Decl { package: String, name: String },
    /// A whole package, rendered `package:name`.
    Pkg { name: String },
}

impl NodeId {
    pub fn decl(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Decl {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn pkg(name: impl Into<String>) -> Self {
        Self::Pkg { name: name.into() }
    }

    /// Package this node belongs to (the package itself for Pkg nodes).
    pub fn package(&self) -> &str {
        match self {
            Self::Decl { package, .. } => package,
            Self::Pkg { name } => name,
        }
    }

    pub fn is_decl(&self) -> bool {
        matches!(self, Self::Decl { .. })
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decl { package, name } => write!(f, "{}.{}", package, name),
            Self::Pkg { name } => write!(f, "package:{}", name),
        }
    }
}

/// What a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Record,
    Interface,
    Function,
    Package,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Record => "record",
            Self::Interface => "interface",
            Self::Function => "function",
            Self::Package => "package",
        };
        f.write_str(s)
    }
}

/// How a dependency was discovered. Not part of edge identity in the final
/// graph: the first edge registered for a `(from, to)` pair wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepKind {
    Field,
    Signature,
    BodyCall,
    CrossPackage,
    Package,
}

impl fmt::Display for DepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Field => "field",
            Self::Signature => "signature",
            Self::BodyCall => "body_call",
            Self::CrossPackage => "cross_package",
            Self::Package => "package",
        };
        f.write_str(s)
    }
}

/// A registered node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub display_name: String,
    pub package: String,
}

/// A resolved directed dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: DepKind,
}

/// Node/edge counts for logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub records: usize,
    pub interfaces: usize,
    pub functions: usize,
    pub packages: usize,
}

/// Directed dependency multigraph with `(from, to)` deduplication.
///
/// Nodes and edges keep insertion order (petgraph index order), which is what
/// downstream ordering guarantees build on.
#[derive(Debug, Default)]
pub struct DepGraph {
    graph: DiGraph<Node, DepKind>,
    index: FxHashMap<NodeId, NodeIndex>,
    edge_pairs: FxHashSet<(NodeIndex, NodeIndex)>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. The first registration of an id wins.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node.id) {
            return idx;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        idx
    }

    /// Insert an edge. Returns false when an endpoint is unregistered or the
    /// `(from, to)` pair already exists.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        let (Some(&from), Some(&to)) = (self.index.get(&edge.from), self.index.get(&edge.to))
        else {
            return false;
        };
        if !self.edge_pairs.insert((from, to)) {
            return false;
        }
        self.graph.add_edge(from, to, edge.kind);
        true
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Edges in insertion order as `(from, to, kind)` node references.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node, DepKind)> {
        use petgraph::visit::EdgeRef;
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()], *e.weight()))
    }

    pub fn out_degree(&self, id: &NodeId) -> usize {
        self.degree(id, petgraph::Direction::Outgoing)
    }

    pub fn in_degree(&self, id: &NodeId) -> usize {
        self.degree(id, petgraph::Direction::Incoming)
    }

    fn degree(&self, id: &NodeId, dir: petgraph::Direction) -> usize {
        match self.index.get(id) {
            Some(&idx) => self.graph.neighbors_directed(idx, dir).count(),
            None => 0,
        }
    }

    pub fn summary(&self) -> GraphSummary {
        let mut summary = GraphSummary {
            nodes: self.node_count(),
            edges: self.edge_count(),
            ..Default::default()
        };
        for node in self.nodes() {
            match node.kind {
                NodeKind::Record => summary.records += 1,
                NodeKind::Interface => summary.interfaces += 1,
                NodeKind::Function => summary.functions += 1,
                NodeKind::Package => summary.packages += 1,
            }
        }
        summary
    }
}
