//! Directory walk yielding Go source files.

use std::cell::Cell;
use std::path::Path;
use std::time::Instant;

use walkdir::WalkDir;

use crate::errors::{AnalysisError, ErrorCollector, ScanError};

use super::types::{ScanConfig, ScanResult, ScanStats};

/// Source filter: walks the configured root and yields files whose name
/// matches the target language and whose path survives the exclusion rules.
pub struct SourceFilter {
    config: ScanConfig,
}

impl SourceFilter {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Walk the root. Individual entry errors go to the collector and the
    /// walk continues; a nonexistent root is a hard failure.
    pub fn scan(&self, errors: &mut ErrorCollector) -> Result<ScanResult, AnalysisError> {
        let root = &self.config.root;
        if !root.is_dir() {
            return Err(AnalysisError::MissingDirectory(root.clone()));
        }

        let start = Instant::now();
        let mut files = Vec::new();
        let mut files_skipped = 0usize;
        let dirs_skipped = Cell::new(0usize);

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.file_type().is_dir() && self.is_excluded_dir(entry.path()) {
                    dirs_skipped.set(dirs_skipped.get() + 1);
                    return false;
                }
                true
            });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| root.display().to_string());
                    errors.add_scan_error(ScanError {
                        path,
                        message: e.to_string(),
                    });
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if is_go_source(entry.path()) {
                files.push(entry.into_path());
            } else {
                files_skipped += 1;
            }
        }

        let stats = ScanStats {
            files_found: files.len(),
            files_skipped,
            dirs_skipped: dirs_skipped.get(),
            duration: start.elapsed(),
        };
        tracing::debug!(
            files = stats.files_found,
            skipped = stats.files_skipped,
            dirs_skipped = stats.dirs_skipped,
            "scan complete"
        );

        Ok(ScanResult { files, stats })
    }

    fn is_excluded_dir(&self, path: &Path) -> bool {
        // The root itself is never excluded, even when its name matches.
        if path == self.config.root {
            return false;
        }
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => self.config.exclude_dirs.iter().any(|d| d == name),
            None => false,
        }
    }
}

/// `.go` files only, with in-language test suites skipped.
fn is_go_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go") && !name.ends_with("_test.go")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "package x\n").unwrap();
    }

    #[test]
    fn yields_go_files_and_skips_tests() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.go");
        touch(dir.path(), "a_test.go");
        touch(dir.path(), "readme.md");
        touch(dir.path(), "sub/b.go");

        let filter = SourceFilter::new(ScanConfig {
            root: dir.path().to_path_buf(),
            exclude_dirs: vec![],
        });
        let mut errors = ErrorCollector::new();
        let result = filter.scan(&mut errors).unwrap();

        let names: Vec<String> = result
            .files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.go", "b.go"]);
        assert_eq!(result.stats.files_skipped, 2);
        assert!(errors.is_clean());
    }

    #[test]
    fn excludes_directories_by_name() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "main.go");
        touch(dir.path(), "vendor/dep.go");
        touch(dir.path(), "nested/vendor/dep2.go");

        let filter = SourceFilter::new(ScanConfig {
            root: dir.path().to_path_buf(),
            exclude_dirs: vec!["vendor".to_string()],
        });
        let mut errors = ErrorCollector::new();
        let result = filter.scan(&mut errors).unwrap();

        assert_eq!(result.files.len(), 1);
        assert_eq!(result.stats.dirs_skipped, 2);
    }

    #[test]
    fn missing_root_is_a_hard_error() {
        let filter = SourceFilter::new(ScanConfig {
            root: Path::new("/definitely/not/here").to_path_buf(),
            exclude_dirs: vec![],
        });
        let mut errors = ErrorCollector::new();
        assert!(matches!(
            filter.scan(&mut errors),
            Err(AnalysisError::MissingDirectory(_))
        ));
    }
}
