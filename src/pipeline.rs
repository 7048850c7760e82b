//! End-to-end pipeline: scan, parse, extract, resolve, measure, render.
//!
//! The pipeline is synchronous and single-pass. Per-file failures are
//! collected, never fatal; only a missing target directory or a parser
//! that fails to initialize aborts the run.

use std::path::Path;

use serde::Serialize;

use crate::errors::{AnalysisError, ErrorCollector, ParseError, ScanError};
use crate::extractor::{self, Facts};
use crate::graph::{self, DepGraph, GraphSummary};
use crate::parser::{first_error_line, GoParser};
use crate::render::{self, MermaidOptions};
use crate::resolver;
use crate::scanner::{ScanConfig, ScanStats, SourceFilter};
use crate::stability::{self, StabilityReport};

/// Analysis switches, one per CLI flag.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Add package nodes and package-level edges, and group the diagram
    /// by package.
    pub include_package_deps: bool,
    /// Paint Stable Dependencies Principle violations red in the diagram.
    pub highlight_sdp_violations: bool,
    /// Analyze only these declared package names. Empty means all.
    pub target_packages: Vec<String>,
    /// Declared package names to drop after parsing.
    pub exclude_packages: Vec<String>,
    /// Directory names skipped during the walk.
    pub exclude_dirs: Vec<String>,
}

/// Complete result of one run.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub facts: Facts,
    #[serde(skip)]
    pub graph: DepGraph,
    pub summary: GraphSummary,
    pub stability: StabilityReport,
    /// Mermaid `graph TD` document.
    pub mermaid: String,
    pub scan_stats: ScanStats,
    /// Non-fatal errors, rendered for reporting.
    pub errors: Vec<String>,
}

impl AnalysisReport {
    /// True when nothing was extracted and at least one file failed.
    pub fn failed_with_no_output(&self) -> bool {
        self.facts.is_empty() && !self.errors.is_empty()
    }
}

/// Run the full analysis over `dir`.
pub fn analyze(dir: &Path, options: &AnalysisOptions) -> Result<AnalysisReport, AnalysisError> {
    let dir = dir.canonicalize().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AnalysisError::MissingDirectory(dir.to_path_buf()),
        _ => AnalysisError::Io {
            path: dir.to_path_buf(),
            source: e,
        },
    })?;
    if !dir.is_dir() {
        return Err(AnalysisError::MissingDirectory(dir));
    }

    let mut errors = ErrorCollector::new();

    let filter = SourceFilter::new(ScanConfig {
        root: dir.clone(),
        exclude_dirs: options.exclude_dirs.clone(),
    });
    let scan = filter.scan(&mut errors)?;
    tracing::info!(
        files = scan.files.len(),
        skipped = scan.stats.files_skipped,
        "scan complete"
    );

    let mut parser = GoParser::new()?;
    let mut facts = Facts::default();

    for path in &scan.files {
        let file = path.to_string_lossy().into_owned();
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                errors.add_parse_error(ParseError::Encoding { file });
                continue;
            }
            Err(e) => {
                errors.add_scan_error(ScanError {
                    path: file,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let tree = match parser.parse(&source, &file) {
            Ok(tree) => tree,
            Err(e) => {
                errors.add_parse_error(e);
                continue;
            }
        };

        // tree-sitter recovers from syntax errors, but a malformed file is
        // skipped wholesale so partial declarations never enter the graph.
        if let Some(line) = first_error_line(&tree) {
            errors.add_parse_error(ParseError::Syntax { file, line });
            continue;
        }

        let file_facts = extractor::extract_file(&tree, &source, &file);
        if !package_selected(&file_facts.package.name, options) {
            tracing::debug!(file = %file, package = %file_facts.package.name, "package filtered out");
            continue;
        }
        facts.merge_file(file_facts);
    }

    let edges = resolver::resolve(&facts, options.include_package_deps);
    let dep_graph = if options.include_package_deps {
        graph::build_with_packages(&facts, edges)
    } else {
        graph::build(&facts, edges)
    };
    let summary = dep_graph.summary();
    tracing::info!(
        nodes = summary.nodes,
        edges = summary.edges,
        "graph built"
    );

    let report = stability::analyze(&dep_graph);
    let mermaid = render::render(
        &dep_graph,
        &report,
        &MermaidOptions {
            group_by_package: options.include_package_deps,
            highlight_violations: options.highlight_sdp_violations,
        },
    );

    let rendered_errors = errors
        .parse_errors()
        .iter()
        .map(|e| e.to_string())
        .chain(errors.scan_errors().iter().map(|e| e.to_string()))
        .collect();

    Ok(AnalysisReport {
        facts,
        graph: dep_graph,
        summary,
        stability: report,
        mermaid,
        scan_stats: scan.stats,
        errors: rendered_errors,
    })
}

/// Package allow/deny filter, applied to declared package names after parse.
fn package_selected(package: &str, options: &AnalysisOptions) -> bool {
    if !options.target_packages.is_empty()
        && !options.target_packages.iter().any(|p| p == package)
    {
        return false;
    }
    !options.exclude_packages.iter().any(|p| p == package)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> AnalysisOptions {
        AnalysisOptions::default()
    }

    #[test]
    fn missing_directory_is_fatal() {
        let result = analyze(Path::new("/nonexistent/depsee-target"), &options());
        assert!(matches!(result, Err(AnalysisError::MissingDirectory(_))));
    }

    #[test]
    fn package_filters() {
        let mut opts = options();
        opts.target_packages = vec!["web".to_string()];
        assert!(package_selected("web", &opts));
        assert!(!package_selected("db", &opts));

        opts.exclude_packages = vec!["web".to_string()];
        assert!(!package_selected("web", &opts));
    }
}
