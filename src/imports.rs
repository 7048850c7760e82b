//! Import path classification and alias extraction.
//!
//! Single source of truth for deciding whether an import is part of the Go
//! standard library or local to the analyzed project. Both the Package and
//! CrossPackage extractors go through this module so their notion of "local"
//! never diverges.

use std::process::Command;

use once_cell::sync::OnceCell;
use rustc_hash::FxHashSet;

/// Classification of an import path.
///
/// `External` is part of the classification contract but unreachable under
/// the current rule: any path not in the standard-library manifest is Local.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportClass {
    Standard,
    Local,
    External,
}

/// Process-wide standard-library manifest. Initialized lazily on first use
/// and never mutated afterwards.
static STD_MANIFEST: OnceCell<FxHashSet<String>> = OnceCell::new();

/// Core standard-library packages used when the Go toolchain is unavailable.
const FALLBACK_STD: &[&str] = &[
    "bufio",
    "bytes",
    "context",
    "crypto",
    "crypto/md5",
    "crypto/rand",
    "crypto/sha1",
    "crypto/sha256",
    "crypto/tls",
    "database/sql",
    "encoding",
    "encoding/base64",
    "encoding/csv",
    "encoding/json",
    "encoding/xml",
    "errors",
    "flag",
    "fmt",
    "io",
    "io/fs",
    "log",
    "log/slog",
    "math",
    "math/rand",
    "net",
    "net/http",
    "net/url",
    "os",
    "os/exec",
    "path",
    "path/filepath",
    "reflect",
    "regexp",
    "runtime",
    "slices",
    "sort",
    "strconv",
    "strings",
    "sync",
    "sync/atomic",
    "testing",
    "time",
    "unicode",
    "unicode/utf8",
];

/// Inject a fixture manifest. First write wins; calling this before any
/// classification keeps tests independent of the Go toolchain.
pub fn set_std_manifest<I, S>(packages: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let _ = STD_MANIFEST.set(packages.into_iter().map(Into::into).collect());
}

/// Manifest shared by every unit test in the crate. The cell is process-wide
/// and first-write-wins, so all test modules must inject the same set.
#[cfg(test)]
pub(crate) fn fixture_std_manifest() {
    set_std_manifest(["fmt", "strings", "net/http", "crypto/sha256"]);
}

fn std_manifest() -> &'static FxHashSet<String> {
    STD_MANIFEST.get_or_init(|| match load_std_from_toolchain() {
        Some(list) => {
            tracing::debug!(packages = list.len(), "loaded std manifest from go toolchain");
            list
        }
        None => {
            tracing::debug!("go toolchain unavailable, using fallback std manifest");
            FALLBACK_STD.iter().map(|s| s.to_string()).collect()
        }
    })
}

/// Ask the toolchain for the full standard-library package list.
/// Any failure (missing binary, non-zero exit, bad output) yields None and
/// the caller falls back to the constant list without surfacing an error.
fn load_std_from_toolchain() -> Option<FxHashSet<String>> {
    let output = Command::new("go").args(["list", "std"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    let set: FxHashSet<String> = stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();
    if set.is_empty() {
        return None;
    }
    Some(set)
}

/// Classify an import path. Relative paths and the empty path are Local by
/// definition; everything not in the standard-library manifest is Local.
pub fn classify(path: &str) -> ImportClass {
    if path.is_empty() || path.starts_with("./") || path.starts_with("../") {
        return ImportClass::Local;
    }
    if std_manifest().contains(path) {
        ImportClass::Standard
    } else {
        ImportClass::Local
    }
}

/// Effective package alias of an import: the declared alias verbatim when
/// present (including `.` and `_`), otherwise the last path segment.
pub fn extract_alias(path: &str, declared: &str) -> String {
    if !declared.is_empty() {
        return declared.to_string();
    }
    extract_package_name(path)
}

/// Last segment of an import path.
pub fn extract_package_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_standard_and_local() {
        fixture_std_manifest();
        assert_eq!(classify("fmt"), ImportClass::Standard);
        assert_eq!(classify("net/http"), ImportClass::Standard);
        assert_eq!(classify("github.com/x/other"), ImportClass::Local);
        assert_eq!(classify("myproject/internal/db"), ImportClass::Local);
    }

    #[test]
    fn classify_relative_and_empty_paths() {
        fixture_std_manifest();
        assert_eq!(classify(""), ImportClass::Local);
        assert_eq!(classify("./sibling"), ImportClass::Local);
        assert_eq!(classify("../parent"), ImportClass::Local);
    }

    #[test]
    fn alias_prefers_declared_name() {
        assert_eq!(extract_alias("github.com/x/other", "o"), "o");
        assert_eq!(extract_alias("github.com/x/other", "."), ".");
        assert_eq!(extract_alias("github.com/x/other", "_"), "_");
        assert_eq!(extract_alias("github.com/x/other", ""), "other");
    }

    #[test]
    fn package_name_is_last_segment() {
        assert_eq!(extract_package_name("github.com/x/other"), "other");
        assert_eq!(extract_package_name("fmt"), "fmt");
        assert_eq!(extract_package_name("a/b/c"), "c");
    }
}
