//! Partition load and save
//!
//! One JSON document per grade:
//! `{ "grade": ..., "total_activities": N, "activities": [...] }`,
//! two-space indented. Consumers read these files directly, so the shape is
//! load-bearing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use akt_model::GradeCollection;

use crate::error::StoreError;
use crate::grades::partition_filename;

/// The file a grade's partition lives in
#[inline]
#[must_use]
pub fn partition_path(dir: &Path, grade: &str) -> PathBuf {
    dir.join(partition_filename(grade))
}

/// Load one grade partition
///
/// A missing file is an empty partition, enabling first-time creation. A
/// stored `total_activities` that disagrees with the live count is corrected
/// in memory and logged as a warning; it is a data-quality signal, not an
/// error.
///
/// # Errors
/// Returns [`StoreError`] when the file exists but cannot be read or
/// decoded.
pub fn load_partition(dir: &Path, grade: &str) -> Result<GradeCollection, StoreError> {
    let path = partition_path(dir, grade);
    if !path.exists() {
        debug!(path = %path.display(), grade, "no partition file, starting empty");
        return Ok(GradeCollection::new(grade));
    }
    load_partition_file(&path)
}

/// Load a partition from an explicit file path
///
/// Unlike [`load_partition`], the file must exist.
///
/// # Errors
/// Returns [`StoreError`] when the file cannot be read or decoded.
pub fn load_partition_file(path: &Path) -> Result<GradeCollection, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    let mut collection: GradeCollection =
        serde_json::from_str(&text).map_err(|e| StoreError::Decode {
            path: path.to_path_buf(),
            source: e,
        })?;

    if !collection.count_matches() {
        warn!(
            path = %path.display(),
            stored = collection.total_activities,
            counted = collection.activities.len(),
            "stored activity count disagrees with file contents"
        );
        collection.recount();
    }
    Ok(collection)
}

/// Save one grade partition
///
/// The count is recomputed before writing; parent directories are created as
/// needed. Returns the path written.
///
/// # Errors
/// Returns [`StoreError`] when the directory cannot be created, the
/// collection cannot be serialized, or the write fails.
pub fn save_partition(dir: &Path, collection: &GradeCollection) -> Result<PathBuf, StoreError> {
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    let path = partition_path(dir, &collection.grade);
    save_partition_file(&path, collection)?;
    Ok(path)
}

/// Save a partition to an explicit file path
///
/// # Errors
/// Returns [`StoreError`] when the collection cannot be serialized or the
/// write fails.
pub fn save_partition_file(path: &Path, collection: &GradeCollection) -> Result<(), StoreError> {
    let mut output = collection.clone();
    output.recount();

    let text = serde_json::to_string_pretty(&output).map_err(StoreError::Encode)?;
    fs::write(path, text).map_err(|e| StoreError::io(path, e))?;
    debug!(path = %path.display(), activities = output.total_activities, "partition saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use akt_model::Activity;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_loads_as_empty_partition() {
        let dir = tempfile::tempdir().unwrap();
        let collection = load_partition(dir.path(), "Andre årstrinn").unwrap();
        assert_eq!(collection.grade, "Andre årstrinn");
        assert!(collection.is_empty());
        assert_eq!(collection.total_activities, 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let collection = GradeCollection::from_activities(
            "Tredje årstrinn",
            vec![Activity::new("30101", "Klokka")],
        );

        let path = save_partition(dir.path(), &collection).unwrap();
        assert_eq!(path.file_name().unwrap(), "3.grade.json");

        let loaded = load_partition(dir.path(), "Tredje årstrinn").unwrap();
        assert_eq!(loaded, collection);
    }

    #[test]
    fn save_writes_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let collection = GradeCollection::from_activities(
            "Andre årstrinn",
            vec![Activity::new("20101", "Tallinja")],
        );
        let path = save_partition(dir.path(), &collection).unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with("{\n  \"grade\": \"Andre årstrinn\",\n  \"total_activities\": 1,"));
    }

    #[test]
    fn save_corrects_a_stale_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut collection = GradeCollection::from_activities(
            "Fjerde årstrinn",
            vec![Activity::new("40101", "Måling")],
        );
        collection.total_activities = 12;

        save_partition(dir.path(), &collection).unwrap();
        let loaded = load_partition(dir.path(), "Fjerde årstrinn").unwrap();
        assert_eq!(loaded.total_activities, 1);
    }

    #[test]
    fn load_corrects_and_keeps_going_on_count_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("5.grade.json");
        fs::write(
            &path,
            r#"{"grade": "Femte årstrinn", "total_activities": 9, "activities": []}"#,
        )
        .unwrap();

        let loaded = load_partition(dir.path(), "Femte årstrinn").unwrap();
        assert_eq!(loaded.total_activities, 0);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("2.grade.json"), "not json").unwrap();

        let result = load_partition(dir.path(), "Andre årstrinn");
        assert!(matches!(result, Err(StoreError::Decode { .. })));
    }

    #[test]
    fn unknown_grade_gets_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let collection = GradeCollection::new("Generelt");
        let path = save_partition(dir.path(), &collection).unwrap();
        assert_eq!(path.file_name().unwrap(), "generelt.json");
    }
}
