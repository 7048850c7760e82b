//! Mermaid `graph TD` rendering of the dependency graph.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::{DepGraph, NodeId, NodeKind};
use crate::stability::StabilityReport;

use super::sanitize::{escape_label, sanitize_id};

/// Rendering switches, mirroring the analysis options that produced the graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidOptions {
    /// Group declaration nodes into one subgraph per package.
    pub group_by_package: bool,
    /// Paint edges that violate the Stable Dependencies Principle red.
    pub highlight_violations: bool,
}

/// Render the graph as a Mermaid `graph TD` document.
///
/// Package nodes and package-level edges are structural only and never
/// appear in the output. An empty graph renders as the header line alone.
pub fn render(graph: &DepGraph, stability: &StabilityReport, options: &MermaidOptions) -> String {
    let mut out = String::from("graph TD\n");

    let instability: FxHashMap<&NodeId, f64> = stability
        .nodes
        .iter()
        .map(|n| (&n.id, n.instability))
        .collect();
    let package_instability: FxHashMap<&str, f64> = stability
        .packages
        .iter()
        .map(|p| (p.name.as_str(), p.instability))
        .collect();

    if options.group_by_package {
        render_grouped(graph, &instability, &package_instability, &mut out);
    } else {
        for node in graph.nodes().filter(|n| n.kind != NodeKind::Package) {
            out.push_str(&node_line(node, &instability, "    "));
        }
    }

    let violating: FxHashSet<(&NodeId, &NodeId)> = stability
        .violations
        .iter()
        .map(|v| (&v.from, &v.to))
        .collect();

    let mut violating_indices = Vec::new();
    let mut rendered = 0usize;
    for (from, to, _kind) in graph.edges() {
        if !from.id.is_decl() || !to.id.is_decl() {
            continue;
        }
        out.push_str(&format!(
            "    {} --> {}\n",
            sanitize_id(&from.id.to_string()),
            sanitize_id(&to.id.to_string())
        ));
        if options.highlight_violations && violating.contains(&(&from.id, &to.id)) {
            violating_indices.push(rendered);
        }
        rendered += 1;
    }

    for index in violating_indices {
        out.push_str(&format!(
            "    linkStyle {index} stroke:#ff0000,stroke-width:2px\n"
        ));
    }

    out
}

fn render_grouped(
    graph: &DepGraph,
    instability: &FxHashMap<&NodeId, f64>,
    package_instability: &FxHashMap<&str, f64>,
    out: &mut String,
) {
    // Packages in first-appearance order of their declaration nodes.
    let mut order: Vec<&str> = Vec::new();
    let mut grouped: FxHashMap<&str, Vec<&crate::graph::Node>> = FxHashMap::default();
    for node in graph.nodes().filter(|n| n.kind != NodeKind::Package) {
        let package = node.package.as_str();
        if !grouped.contains_key(package) {
            order.push(package);
        }
        grouped.entry(package).or_default().push(node);
    }

    for package in order {
        let title = match package_instability.get(package) {
            Some(i) => format!("{} 不安定度:{:.2}", escape_label(package), i),
            None => escape_label(package),
        };
        out.push_str(&format!(
            "    subgraph {}[\"{}\"]\n",
            sanitize_id(package),
            title
        ));
        for node in &grouped[package] {
            out.push_str(&node_line(node, instability, "        "));
        }
        out.push_str("    end\n");
    }
}

fn node_line(
    node: &crate::graph::Node,
    instability: &FxHashMap<&NodeId, f64>,
    indent: &str,
) -> String {
    let id = sanitize_id(&node.id.to_string());
    let label = escape_label(&node.display_name);
    match instability.get(&node.id) {
        Some(i) => format!("{indent}{id}[\"{label}<br>不安定度:{i:.2}\"]\n"),
        None => format!("{indent}{id}[\"{label}\"]\n"),
    }
}
