//! Scanner subsystem — Go source discovery.
//!
//! Walks a directory, yields `.go` files, skips test files and excluded
//! directories. Per-entry walk errors are collected, not fatal; a missing
//! root directory is.

mod types;
mod walker;

pub use types::{ScanConfig, ScanResult, ScanStats};
pub use walker::SourceFilter;
