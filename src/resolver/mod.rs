//! Dependency resolver — five independent edge extractors over `Facts`.
//!
//! Extractors run in a fixed order (Field, Signature, BodyCall, Package,
//! CrossPackage) and their results are unioned. Every extractor drops edges
//! whose target is not a registered node; deduplication by `(from, to)`
//! happens later in the graph builder.

mod admit;
mod body_call;
mod cross_package;
mod field;
mod node_set;
mod package;
mod signature;

pub use admit::strip_type_prefixes;
pub use body_call::BodyCallExtractor;
pub use cross_package::CrossPackageExtractor;
pub use field::FieldExtractor;
pub use node_set::NodeSet;
pub use package::PackageExtractor;
pub use signature::SignatureExtractor;

use rustc_hash::FxHashMap;

use crate::extractor::Facts;
use crate::graph::Edge;

/// An edge extractor. Implementations are stateless.
pub trait DepExtractor {
    fn name(&self) -> &'static str;
    fn extract(&self, facts: &Facts, nodes: &NodeSet) -> Vec<Edge>;
}

/// Run all extractors in the fixed composition order.
pub fn resolve(facts: &Facts, include_packages: bool) -> Vec<Edge> {
    let nodes = NodeSet::from_facts(facts, include_packages);
    let extractors: [&dyn DepExtractor; 5] = [
        &FieldExtractor,
        &SignatureExtractor,
        &BodyCallExtractor,
        &PackageExtractor,
        &CrossPackageExtractor,
    ];

    let mut edges = Vec::new();
    for extractor in extractors {
        let found = extractor.extract(facts, &nodes);
        tracing::debug!(extractor = extractor.name(), edges = found.len(), "resolved");
        edges.extend(found);
    }
    edges
}

/// Alias → import path per package, unioned across all files of the same
/// package. The first alias registration wins.
pub(crate) fn package_imports(facts: &Facts) -> FxHashMap<&str, FxHashMap<&str, &str>> {
    let mut map: FxHashMap<&str, FxHashMap<&str, &str>> = FxHashMap::default();
    for package in &facts.packages {
        let aliases = map.entry(package.name.as_str()).or_default();
        for import in &package.imports {
            aliases
                .entry(import.alias.as_str())
                .or_insert(import.path.as_str());
        }
    }
    map
}
