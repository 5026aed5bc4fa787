//! Change reports

use serde::Serialize;

/// Ids touched by one reconciliation, in classification order
///
/// The report is produced in full on every run, including dry runs, so the
/// caller can always decide about backups and logging from complete
/// information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeReport {
    /// Ids added to the partition
    pub added: Vec<String>,
    /// Ids whose record was updated
    pub updated: Vec<String>,
    /// Ids removed by the deletion pass
    pub deleted: Vec<String>,
}

impl ChangeReport {
    /// Create an empty report
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the reconciliation changed nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }

    /// Total number of changed ids
    #[inline]
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.added.len() + self.updated.len() + self.deleted.len()
    }

    /// One-line human summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} added, {} updated, {} deleted",
            self.added.len(),
            self.updated.len(),
            self.deleted.len()
        )
    }
}
