//! CrossPackage extractor — qualified body calls resolved through the
//! caller's import table into declarations of other local packages.

use crate::extractor::Facts;
use crate::graph::{DepKind, Edge, NodeId};
use crate::imports::{self, ImportClass};

use super::{package_imports, DepExtractor, NodeSet};

pub struct CrossPackageExtractor;

impl DepExtractor for CrossPackageExtractor {
    fn name(&self) -> &'static str {
        "cross_package"
    }

    fn extract(&self, facts: &Facts, nodes: &NodeSet) -> Vec<Edge> {
        let imports_by_package = package_imports(facts);
        let mut edges = Vec::new();

        for function in facts.all_functions() {
            let Some(aliases) = imports_by_package.get(function.package.as_str()) else {
                continue;
            };
            for call in &function.body_calls {
                let Some((qualifier, callee)) = call.split_once('.') else {
                    continue;
                };
                let Some(path) = aliases.get(qualifier) else {
                    continue;
                };
                if imports::classify(path) != ImportClass::Local {
                    continue;
                }
                let target_package = imports::extract_package_name(path);
                let to = NodeId::decl(target_package, callee);
                if !nodes.contains(&to) {
                    continue;
                }
                edges.push(Edge {
                    from: NodeId::decl(&function.package, &function.name),
                    to,
                    kind: DepKind::CrossPackage,
                });
            }
        }
        edges
    }
}
