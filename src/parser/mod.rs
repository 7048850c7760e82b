//! Tree-sitter parser subsystem.
//!
//! Thin wrapper around tree-sitter-go. The extractor consumes the raw syntax
//! tree; no richer type information is produced here.

mod go;

pub use go::{first_error_line, GoParser};
