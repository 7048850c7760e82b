//! Stability analysis — instability metrics and SDP violation detection.
//!
//! Total: an empty graph yields empty collections, never an error.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::{DepGraph, NodeId};

use super::types::{NodeStability, PackageStability, SdpViolation, StabilityReport};

/// Analyze the whole graph.
pub fn analyze(graph: &DepGraph) -> StabilityReport {
    let nodes = node_stability(graph);
    let packages = package_stability(graph);
    let violations = sdp_violations(graph, &nodes);

    tracing::debug!(
        nodes = nodes.len(),
        packages = packages.len(),
        violations = violations.len(),
        "stability analysis complete"
    );

    StabilityReport {
        nodes,
        packages,
        violations,
    }
}

fn instability(out_degree: usize, in_degree: usize) -> f64 {
    let total = out_degree + in_degree;
    if total > 0 {
        out_degree as f64 / total as f64
    } else {
        1.0
    }
}

/// Node metrics in node registration order.
fn node_stability(graph: &DepGraph) -> Vec<NodeStability> {
    graph
        .nodes()
        .map(|node| {
            let out_degree = graph.out_degree(&node.id);
            let in_degree = graph.in_degree(&node.id);
            NodeStability {
                id: node.id.clone(),
                out_degree,
                in_degree,
                instability: instability(out_degree, in_degree),
            }
        })
        .collect()
}

/// Package metrics. A package pair is counted once no matter how many edges
/// cross it: Decl-to-Decl edges between different packages and direct
/// Pkg-to-Pkg edges both contribute ordered pairs with set semantics.
fn package_stability(graph: &DepGraph) -> Vec<PackageStability> {
    let mut pairs: FxHashSet<(&str, &str)> = FxHashSet::default();
    for (from, to, _) in graph.edges() {
        let both_decl = from.id.is_decl() && to.id.is_decl();
        let both_pkg = !from.id.is_decl() && !to.id.is_decl();
        if (both_decl || both_pkg) && from.package != to.package {
            pairs.insert((&from.package, &to.package));
        }
    }

    // Packages in first-appearance order over the node list.
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut names: Vec<&str> = Vec::new();
    for node in graph.nodes() {
        if !node.package.is_empty() && seen.insert(&node.package) {
            names.push(&node.package);
        }
    }

    names
        .into_iter()
        .map(|name| {
            let out_degree = pairs.iter().filter(|(from, _)| *from == name).count();
            let in_degree = pairs.iter().filter(|(_, to)| *to == name).count();
            PackageStability {
                name: name.to_string(),
                out_degree,
                in_degree,
                instability: instability(out_degree, in_degree),
            }
        })
        .collect()
}

/// Violations in edge insertion order: every Decl-to-Decl edge whose source
/// is more stable than its target.
fn sdp_violations(graph: &DepGraph, nodes: &[NodeStability]) -> Vec<SdpViolation> {
    let index: FxHashMap<&NodeId, f64> = nodes.iter().map(|n| (&n.id, n.instability)).collect();

    let mut violations = Vec::new();
    for (from, to, _) in graph.edges() {
        if !from.id.is_decl() || !to.id.is_decl() {
            continue;
        }
        let (Some(&from_i), Some(&to_i)) = (index.get(&from.id), index.get(&to.id)) else {
            continue;
        };
        if from_i < to_i {
            violations.push(SdpViolation {
                from: from.id.clone(),
                to: to.id.clone(),
                from_instability: from_i,
                to_instability: to_i,
                severity: to_i - from_i,
            });
        }
    }
    violations
}
