//! Body-call extractor — unqualified calls inside function and method
//! bodies. Qualified calls are the CrossPackage extractor's concern.

use crate::extractor::Facts;
use crate::graph::{DepKind, Edge, NodeId};

use super::{DepExtractor, NodeSet};

pub struct BodyCallExtractor;

impl DepExtractor for BodyCallExtractor {
    fn name(&self) -> &'static str {
        "body_call"
    }

    fn extract(&self, facts: &Facts, nodes: &NodeSet) -> Vec<Edge> {
        let mut edges = Vec::new();
        for function in facts.all_functions() {
            for call in &function.body_calls {
                if call.contains('.') {
                    continue;
                }
                let to = NodeId::decl(&function.package, call);
                if nodes.contains(&to) {
                    edges.push(Edge {
                        from: NodeId::decl(&function.package, &function.name),
                        to,
                        kind: DepKind::BodyCall,
                    });
                }
            }
        }
        edges
    }
}
