//! Stability metrics types.

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// Per-node coupling metrics. `instability = out / (in + out)`, defaulting
/// to 1.0 for isolated nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeStability {
    pub id: NodeId,
    pub out_degree: usize,
    pub in_degree: usize,
    pub instability: f64,
}

/// Per-package coupling metrics, aggregated over distinct package pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageStability {
    pub name: String,
    pub out_degree: usize,
    pub in_degree: usize,
    pub instability: f64,
}

/// A dependency pointing from a more stable node to a less stable one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdpViolation {
    pub from: NodeId,
    pub to: NodeId,
    pub from_instability: f64,
    pub to_instability: f64,
    /// `to_instability - from_instability`; non-negative by construction.
    pub severity: f64,
}

/// Full stability analysis output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StabilityReport {
    pub nodes: Vec<NodeStability>,
    pub packages: Vec<PackageStability>,
    pub violations: Vec<SdpViolation>,
}
