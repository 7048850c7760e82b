//! Dependency graph — directed multigraph over declaration and package
//! nodes, deduplicated per `(from, to)` pair.

mod builder;
mod types;

pub use builder::{build, build_with_packages};
pub use types::{DepGraph, DepKind, Edge, GraphSummary, Node, NodeId, NodeKind};
