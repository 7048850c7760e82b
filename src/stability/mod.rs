//! Stability subsystem — instability metrics (Stable Dependencies
//! Principle) over the dependency graph.

mod analyzer;
mod types;

pub use analyzer::analyze;
pub use types::{NodeStability, PackageStability, SdpViolation, StabilityReport};
