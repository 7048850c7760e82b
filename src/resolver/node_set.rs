//! Node-existence snapshot shared by all extractors.

use rustc_hash::FxHashSet;

use crate::extractor::Facts;
use crate::graph::NodeId;

/// Snapshot of the nodes the graph builder will register: one Decl per
/// record/interface/function in `pkg.Name` form, plus one Pkg per distinct
/// package when package-level analysis is enabled. Edges whose target is
/// absent from the snapshot are dropped by their extractor.
#[derive(Debug)]
pub struct NodeSet {
    decls: FxHashSet<String>,
    packages: FxHashSet<String>,
    include_packages: bool,
}

impl NodeSet {
    pub fn from_facts(facts: &Facts, include_packages: bool) -> Self {
        let mut decls = FxHashSet::default();
        for record in &facts.records {
            decls.insert(decl_key(&record.package, &record.name));
        }
        for interface in &facts.interfaces {
            decls.insert(decl_key(&interface.package, &interface.name));
        }
        for function in facts.all_functions() {
            decls.insert(decl_key(&function.package, &function.name));
        }

        let mut packages = FxHashSet::default();
        for package in &facts.packages {
            if !package.name.is_empty() {
                packages.insert(package.name.clone());
            }
        }

        Self {
            decls,
            packages,
            include_packages,
        }
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        match id {
            NodeId::Decl { package, name } => self.decls.contains(&decl_key(package, name)),
            NodeId::Pkg { name } => self.include_packages && self.packages.contains(name),
        }
    }

    pub fn has_package(&self, name: &str) -> bool {
        self.include_packages && self.packages.contains(name)
    }
}

fn decl_key(package: &str, name: &str) -> String {
    format!("{}.{}", package, name)
}
