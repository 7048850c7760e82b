//! Field extractor — record fields that name other local declarations.

use crate::extractor::Facts;
use crate::graph::{DepKind, Edge, NodeId};

use super::admit::admissible_local_name;
use super::{package_imports, DepExtractor, NodeSet};

pub struct FieldExtractor;

impl DepExtractor for FieldExtractor {
    fn name(&self) -> &'static str {
        "field"
    }

    fn extract(&self, facts: &Facts, nodes: &NodeSet) -> Vec<Edge> {
        let imports = package_imports(facts);
        let mut edges = Vec::new();

        for record in &facts.records {
            let aliases = imports.get(record.package.as_str());
            for field in &record.fields {
                let Some(target) =
                    admissible_local_name(&field.type_name, &record.package, aliases)
                else {
                    continue;
                };
                let to = NodeId::decl(&record.package, target);
                if !nodes.contains(&to) {
                    continue;
                }
                edges.push(Edge {
                    from: NodeId::decl(&record.package, &record.name),
                    to,
                    kind: DepKind::Field,
                });
            }
        }
        edges
    }
}
