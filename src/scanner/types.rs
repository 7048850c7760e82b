//! Scanner types.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for source discovery.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Directory names excluded anywhere on the path.
    pub exclude_dirs: Vec<String>,
}

/// Statistics about one walk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Go source files yielded.
    pub files_found: usize,
    /// Files skipped (test files, non-Go files).
    pub files_skipped: usize,
    /// Directories skipped by the exclusion rules.
    pub dirs_skipped: usize,
    /// Walk duration.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

/// Result of a walk: files in walk order plus stats.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub stats: ScanStats,
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
