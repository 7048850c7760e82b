//! Graph construction from facts and resolved edges.
//!
//! Construction is total: missing facts yield an empty graph, never an error.

use rustc_hash::FxHashSet;

use crate::extractor::Facts;

use super::types::{DepGraph, Edge, Node, NodeId, NodeKind};

/// Build a graph with Decl nodes only.
pub fn build(facts: &Facts, edges: Vec<Edge>) -> DepGraph {
    build_inner(facts, edges, false)
}

/// Build a graph with Decl nodes plus one Package node per distinct package.
pub fn build_with_packages(facts: &Facts, edges: Vec<Edge>) -> DepGraph {
    build_inner(facts, edges, true)
}

fn build_inner(facts: &Facts, edges: Vec<Edge>, with_packages: bool) -> DepGraph {
    let mut graph = DepGraph::new();

    for record in &facts.records {
        graph.add_node(decl_node(&record.package, &record.name, NodeKind::Record));
    }
    for interface in &facts.interfaces {
        graph.add_node(decl_node(
            &interface.package,
            &interface.name,
            NodeKind::Interface,
        ));
    }
    for function in facts.all_functions() {
        graph.add_node(decl_node(
            &function.package,
            &function.name,
            NodeKind::Function,
        ));
    }

    if with_packages {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for package in &facts.packages {
            if !package.name.is_empty() && seen.insert(&package.name) {
                graph.add_node(Node {
                    id: NodeId::pkg(&package.name),
                    kind: NodeKind::Package,
                    display_name: package.name.clone(),
                    package: package.name.clone(),
                });
            }
        }
    }

    let mut dropped = 0usize;
    for edge in edges {
        if !graph.add_edge(edge) {
            dropped += 1;
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, "duplicate or dangling edges ignored");
    }

    graph
}

fn decl_node(package: &str, name: &str, kind: NodeKind) -> Node {
    let id = NodeId::decl(package, name);
    Node {
        display_name: id.to_string(),
        package: package.to_string(),
        id,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use crate::extractor::{Facts, FunctionDecl, PackageFacts, Position, RecordDecl};
    use crate::graph::{DepKind, NodeId};

    use super::*;

    fn record(pkg: &str, name: &str) -> RecordDecl {
        RecordDecl {
            name: name.to_string(),
            package: pkg.to_string(),
            file: format!("{}.go", pkg),
            position: Position::default(),
            fields: vec![],
            methods: vec![],
        }
    }

    fn function(pkg: &str, name: &str) -> FunctionDecl {
        FunctionDecl {
            name: name.to_string(),
            package: pkg.to_string(),
            file: format!("{}.go", pkg),
            position: Position::default(),
            receiver: String::new(),
            params: vec![],
            results: vec![],
            body_calls: vec![],
        }
    }

    #[test]
    fn empty_facts_build_empty_graph() {
        let graph = build(&Facts::default(), vec![]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn registers_decl_nodes_and_method_nodes() {
        let mut facts = Facts::default();
        let mut user = record("sample", "User");
        user.methods.push(function("sample", "Save"));
        facts.records.push(user);
        facts.functions.push(function("sample", "CreateUser"));

        let graph = build(&facts, vec![]);
        assert_eq!(graph.node_count(), 3);
        assert!(graph.contains(&NodeId::decl("sample", "Save")));
        assert!(graph.contains(&NodeId::decl("sample", "CreateUser")));
    }

    #[test]
    fn package_variant_adds_one_node_per_distinct_package() {
        let mut facts = Facts::default();
        facts.records.push(record("sample", "User"));
        for file in ["a.go", "b.go"] {
            facts.packages.push(PackageFacts {
                name: "sample".to_string(),
                file: file.to_string(),
                imports: vec![],
            });
        }

        let without = build(&facts, vec![]);
        assert_eq!(without.node_count(), 1);

        let with = build_with_packages(&facts, vec![]);
        assert_eq!(with.node_count(), 2);
        assert!(with.contains(&NodeId::pkg("sample")));
    }

    #[test]
    fn dangling_edges_are_dropped() {
        let mut facts = Facts::default();
        facts.records.push(record("sample", "User"));
        let graph = build(
            &facts,
            vec![Edge {
                from: NodeId::decl("sample", "User"),
                to: NodeId::decl("sample", "Missing"),
                kind: DepKind::Field,
            }],
        );
        assert_eq!(graph.edge_count(), 0);
    }
}
