//! depsee: Dependency analysis for Go source trees
//!
//! This crate turns a directory of Go source into a typed dependency graph
//! and stability report:
//! - Scanner: filesystem walk yielding non-test `.go` files
//! - Parser: native tree-sitter parsing of Go
//! - Extractor: declarations, imports, signatures, and body calls per file
//! - Resolver: dependency edges across five extraction strategies
//! - Graph: directed dependency graph with node/edge deduplication
//! - Stability: instability metrics and Stable Dependencies Principle checks
//! - Render: Mermaid `graph TD` output
//! - Pipeline: the synchronous end-to-end run

pub mod errors;
pub mod extractor;
pub mod graph;
pub mod imports;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod resolver;
pub mod scanner;
pub mod stability;

// Re-exports for convenience
pub use errors::{AnalysisError, ErrorCollector, ParseError, ScanError};
pub use extractor::{
    Facts, FieldDesc, FileFacts, FunctionDecl, ImportEntry, InterfaceDecl, PackageFacts, Position,
    RecordDecl,
};
pub use graph::{DepGraph, DepKind, Edge, GraphSummary, Node, NodeId, NodeKind};
pub use imports::ImportClass;
pub use pipeline::{analyze, AnalysisOptions, AnalysisReport};
pub use render::MermaidOptions;
pub use scanner::{ScanConfig, ScanResult, ScanStats, SourceFilter};
pub use stability::{NodeStability, PackageStability, SdpViolation, StabilityReport};
