//! Timestamped partition backups

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::error::StoreError;

/// Copy a partition file to `<path>.backup_<YYYYmmdd_HHMMSS>`
///
/// Called before an overwrite when the backup policy is enabled. Returns the
/// backup path.
///
/// # Errors
/// Returns [`StoreError::BackupSourceMissing`] when there is nothing to back
/// up, or an IO error when the copy fails.
pub fn backup_partition(path: &Path) -> Result<PathBuf, StoreError> {
    if !path.exists() {
        return Err(StoreError::BackupSourceMissing(path.to_path_buf()));
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let mut backup_name = path.as_os_str().to_os_string();
    backup_name.push(format!(".backup_{timestamp}"));
    let backup_path = PathBuf::from(backup_name);

    fs::copy(path, &backup_path).map_err(|e| StoreError::io(&backup_path, e))?;
    info!(from = %path.display(), to = %backup_path.display(), "backup created");
    Ok(backup_path)
}
