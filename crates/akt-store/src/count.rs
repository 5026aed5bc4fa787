//! Per-grade activity counting
//!
//! Walks a partition directory and reports, per grade file, the stored
//! `total_activities` against the number of records actually present.

use std::fs;
use std::path::Path;

use tracing::warn;

use akt_model::GradeCollection;

use crate::error::StoreError;

/// Count summary for one partition file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeCount {
    /// Grade display name from the file
    pub grade: String,
    /// The stored `total_activities` value
    pub stored: usize,
    /// The number of records actually present
    pub counted: usize,
}

impl GradeCount {
    /// True when the stored count agrees with the live count
    #[inline]
    #[must_use]
    pub fn matches(&self) -> bool {
        self.stored == self.counted
    }
}

/// Count activities across every partition file in a directory
///
/// Files are visited in name order. A stored count that disagrees with the
/// live count is reported in the result and logged as a warning. Backup
/// copies (`*.backup_*`) are skipped.
///
/// # Errors
/// Returns [`StoreError`] when the directory cannot be read or a partition
/// file is invalid JSON.
pub fn count_partitions(dir: &Path) -> Result<Vec<GradeCount>, StoreError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))? {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut counts = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
        let collection: GradeCollection =
            serde_json::from_str(&text).map_err(|e| StoreError::Decode {
                path: path.clone(),
                source: e,
            })?;

        let count = GradeCount {
            grade: collection.grade.clone(),
            stored: collection.total_activities,
            counted: collection.activities.len(),
        };
        if !count.matches() {
            warn!(
                path = %path.display(),
                stored = count.stored,
                counted = count.counted,
                "stored activity count disagrees with file contents"
            );
        }
        counts.push(count);
    }
    Ok(counts)
}
