//! Signature extractor — parameter/result types of functions and methods,
//! plus the method-to-receiver edge.

use crate::extractor::Facts;
use crate::graph::{DepKind, Edge, NodeId};

use super::admit::admissible_local_name;
use super::{package_imports, DepExtractor, NodeSet};

pub struct SignatureExtractor;

impl DepExtractor for SignatureExtractor {
    fn name(&self) -> &'static str {
        "signature"
    }

    fn extract(&self, facts: &Facts, nodes: &NodeSet) -> Vec<Edge> {
        let imports = package_imports(facts);
        let mut edges = Vec::new();

        for function in facts.all_functions() {
            let from = NodeId::decl(&function.package, &function.name);
            let aliases = imports.get(function.package.as_str());

            for field in function.params.iter().chain(function.results.iter()) {
                let Some(target) =
                    admissible_local_name(&field.type_name, &function.package, aliases)
                else {
                    continue;
                };
                let to = NodeId::decl(&function.package, target);
                if nodes.contains(&to) {
                    edges.push(Edge {
                        from: from.clone(),
                        to,
                        kind: DepKind::Signature,
                    });
                }
            }

            if function.is_method() {
                let to = NodeId::decl(&function.package, &function.receiver);
                if nodes.contains(&to) {
                    edges.push(Edge {
                        from: from.clone(),
                        to,
                        kind: DepKind::Signature,
                    });
                }
            }
        }
        edges
    }
}
