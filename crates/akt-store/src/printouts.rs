//! Printout-asset scanning
//!
//! Editors drop printable material for an activity into one flat directory.
//! Files are named `<activityId>_<descriptor>.<ext>` or `<activityId>.<ext>`;
//! the id segment links the file to its activity. The scan produces the
//! id → path map that `akt-sync` applies onto the `extra` content sections.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::StoreError;

/// File extensions recognized as printout assets
const ASSET_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "svg", "docx"];

/// Scan a printout directory into an id-keyed map of relative paths
///
/// Paths are recorded relative to the asset root's parent (the convention
/// the consuming web app expects, e.g. `printOuts/20502_bamse.png`). Lists
/// are sorted per id so repeated scans are deterministic regardless of
/// directory iteration order.
///
/// # Errors
/// Returns [`StoreError`] when the directory cannot be read.
pub fn scan_printouts(dir: &Path) -> Result<BTreeMap<String, Vec<String>>, StoreError> {
    let prefix = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut mapping: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for entry in fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))? {
        let entry = entry.map_err(|e| StoreError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !ASSET_EXTENSIONS.contains(&extension.to_lowercase().as_str()) {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        // Id segment: before the first underscore, or the whole stem.
        let activity_id = match file_name.split_once('_') {
            Some((id, _)) => id,
            None => stem,
        };
        if activity_id.is_empty() {
            continue;
        }

        mapping
            .entry(activity_id.to_string())
            .or_default()
            .push(format!("{prefix}/{file_name}"));
    }

    for paths in mapping.values_mut() {
        paths.sort();
    }
    debug!(dir = %dir.display(), activities = mapping.len(), "printout scan complete");
    Ok(mapping)
}
