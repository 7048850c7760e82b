//! Error handling for depsee.
//! One error enum per subsystem, `thiserror` only, zero `anyhow` in the library.

use std::path::PathBuf;

/// Fatal analysis errors. Anything that aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Analysis failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Target directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("Parser initialization failed: {0}")]
    ParserInit(String),
}

/// Per-file parse errors. Recoverable — collected, not fatal.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("{file}: failed to parse source")]
    Unparseable { file: String },

    #[error("{file}:{line}: syntax error")]
    Syntax { file: String, line: usize },

    #[error("{file}: not valid UTF-8")]
    Encoding { file: String },
}

/// Per-entry scan errors. Recoverable — the walk continues.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{path}: {message}")]
pub struct ScanError {
    pub path: String,
    pub message: String,
}

/// Accumulates non-fatal errors across a pipeline run.
/// Allows partial results to be returned even when some files fail.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    parse_errors: Vec<ParseError>,
    scan_errors: Vec<ScanError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_parse_error(&mut self, error: ParseError) {
        tracing::warn!(error = %error, "parse error");
        self.parse_errors.push(error);
    }

    pub fn add_scan_error(&mut self, error: ScanError) {
        tracing::warn!(error = %error, "scan error");
        self.scan_errors.push(error);
    }

    pub fn parse_errors(&self) -> &[ParseError] {
        &self.parse_errors
    }

    pub fn scan_errors(&self) -> &[ScanError] {
        &self.scan_errors
    }

    pub fn is_clean(&self) -> bool {
        self.parse_errors.is_empty() && self.scan_errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.parse_errors.len() + self.scan_errors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_accumulates_and_reports_counts() {
        let mut collector = ErrorCollector::new();
        assert!(collector.is_clean());

        collector.add_parse_error(ParseError::Unparseable {
            file: "broken.go".to_string(),
        });
        collector.add_scan_error(ScanError {
            path: "vendor".to_string(),
            message: "permission denied".to_string(),
        });

        assert!(!collector.is_clean());
        assert_eq!(collector.error_count(), 2);
        assert_eq!(collector.parse_errors().len(), 1);
        assert_eq!(collector.scan_errors().len(), 1);
    }
}
