//! Mermaid rendering of analysis results.

mod mermaid;
mod sanitize;

pub use mermaid::{render, MermaidOptions};
pub use sanitize::{escape_label, sanitize_id};
