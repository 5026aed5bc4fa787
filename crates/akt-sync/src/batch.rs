//! Per-grade batching
//!
//! Source files mix grades freely; [`SyncBatch`] buckets decoded records by
//! partition key so each grade can be reconciled independently. Grade order
//! follows first appearance, record order within a grade follows the source.

use indexmap::IndexMap;

use akt_model::Activity;

/// Incoming records grouped per grade partition
#[derive(Debug, Clone, Default)]
pub struct SyncBatch {
    groups: IndexMap<String, Vec<Activity>>,
}

impl SyncBatch {
    /// Create an empty batch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record to its grade bucket
    pub fn push(&mut self, grade: impl Into<String>, activity: Activity) {
        self.groups.entry(grade.into()).or_default().push(activity);
    }

    /// Number of grade buckets
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no records were batched
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of batched records across all grades
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// The records batched for one grade
    #[inline]
    #[must_use]
    pub fn get(&self, grade: &str) -> Option<&[Activity]> {
        self.groups.get(grade).map(Vec::as_slice)
    }

    /// Iterate grade buckets in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Activity])> {
        self.groups
            .iter()
            .map(|(grade, activities)| (grade.as_str(), activities.as_slice()))
    }
}

impl IntoIterator for SyncBatch {
    type Item = (String, Vec<Activity>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<Activity>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
