//! Go parser using native tree-sitter.

use tree_sitter::{Node, Parser, Tree};

use crate::errors::{AnalysisError, ParseError};

/// Go parser. Owns a single tree-sitter parser instance and re-parses one
/// file at a time; the pipeline is synchronous so no pooling is needed.
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self, AnalysisError> {
        let mut parser = Parser::new();
        let language = tree_sitter_go::LANGUAGE;
        parser
            .set_language(&language.into())
            .map_err(|e| AnalysisError::ParserInit(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Parse one file. A tree is returned even when the source contains
    /// syntax errors; the caller decides whether to record those as
    /// recoverable `ParseError`s and keep going.
    pub fn parse(&mut self, source: &str, file: &str) -> Result<Tree, ParseError> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Unparseable {
                file: file.to_string(),
            })
    }
}

/// Line (1-based) of the first syntax error in the tree, if any.
pub fn first_error_line(tree: &Tree) -> Option<usize> {
    fn find(node: Node) -> Option<usize> {
        if node.is_error() || node.is_missing() {
            return Some(node.start_position().row + 1);
        }
        if !node.has_error() {
            return None;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(line) = find(child) {
                return Some(line);
            }
        }
        None
    }
    find(tree.root_node())
}
