//! Package extractor — package-to-package edges from local imports.

use crate::extractor::Facts;
use crate::graph::{DepKind, Edge, NodeId};
use crate::imports::{self, ImportClass};

use super::{DepExtractor, NodeSet};

pub struct PackageExtractor;

impl DepExtractor for PackageExtractor {
    fn name(&self) -> &'static str {
        "package"
    }

    fn extract(&self, facts: &Facts, nodes: &NodeSet) -> Vec<Edge> {
        let mut edges = Vec::new();
        for package in &facts.packages {
            if package.name.is_empty() {
                continue;
            }
            for import in &package.imports {
                if imports::classify(&import.path) != ImportClass::Local {
                    continue;
                }
                let target = imports::extract_package_name(&import.path);
                // Only packages actually declared somewhere in the project.
                if !nodes.has_package(&target) {
                    continue;
                }
                edges.push(Edge {
                    from: NodeId::pkg(&package.name),
                    to: NodeId::pkg(target),
                    kind: DepKind::Package,
                });
            }
        }
        edges
    }
}

#[cfg(test)]
mod tests {
    use crate::extractor::{Facts, ImportEntry, PackageFacts};
    use crate::imports::fixture_std_manifest;

    use super::*;

    fn package(name: &str, file: &str, imports: Vec<(&str, &str)>) -> PackageFacts {
        PackageFacts {
            name: name.to_string(),
            file: file.to_string(),
            imports: imports
                .into_iter()
                .map(|(path, alias)| ImportEntry {
                    path: path.to_string(),
                    alias: alias.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn emits_edges_for_declared_local_packages_only() {
        fixture_std_manifest();

        let mut facts = Facts::default();
        facts.packages.push(package(
            "main",
            "main.go",
            vec![
                ("fmt", "fmt"),
                ("github.com/x/other", "other"),
                ("github.com/x/vendorlib", "vendorlib"),
            ],
        ));
        facts.packages.push(package("other", "other.go", vec![]));

        let nodes = NodeSet::from_facts(&facts, true);
        let edges = PackageExtractor.extract(&facts, &nodes);

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].from, NodeId::pkg("main"));
        assert_eq!(edges[0].to, NodeId::pkg("other"));
        assert_eq!(edges[0].kind, DepKind::Package);
    }

    #[test]
    fn no_edges_when_package_analysis_is_disabled() {
        fixture_std_manifest();

        let mut facts = Facts::default();
        facts.packages.push(package(
            "main",
            "main.go",
            vec![("github.com/x/other", "other")],
        ));
        facts.packages.push(package("other", "other.go", vec![]));

        let nodes = NodeSet::from_facts(&facts, false);
        assert!(PackageExtractor.extract(&facts, &nodes).is_empty());
    }
}
