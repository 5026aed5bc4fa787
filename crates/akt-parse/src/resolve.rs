//! Grade resolution
//!
//! Decides which grade partition a record belongs to. Resolution order:
//!
//! 1. a force-grade override, when configured
//! 2. the dedicated grade column, when non-empty
//! 3. the activity-id prefix heuristic (`A`-prefixed ids are grade 2 stock)
//! 4. keyword scan of the learning goal
//! 5. fallback to grade 2
//!
//! The resolved value is a display-name string, not a [`GradeLevel`]: a
//! forced or column-supplied grade may name a partition outside the known
//! set (e.g. "Generelt"), which the store slugs into its own file.

use akt_model::GradeLevel;

use crate::fields::FieldKey;
use crate::record::RawRecord;

/// Resolves the partition key for decoded records
#[derive(Debug, Clone, Default)]
pub struct GradeResolver {
    force: Option<String>,
}

impl GradeResolver {
    /// Create a resolver with no override
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force every record into the given grade
    #[inline]
    #[must_use]
    pub fn with_force(grade: impl Into<String>) -> Self {
        Self {
            force: Some(grade.into()),
        }
    }

    /// The configured override, if any
    #[inline]
    #[must_use]
    pub fn forced(&self) -> Option<&str> {
        self.force.as_deref()
    }

    /// Resolve the grade display name for one record
    #[must_use]
    pub fn resolve(&self, record: &RawRecord) -> String {
        if let Some(force) = &self.force {
            return force.clone();
        }

        let column = record.get(FieldKey::Grade);
        if !column.is_empty() {
            return column.to_string();
        }

        let id = record.get(FieldKey::Id);
        if id.starts_with('A') && id.len() >= 5 {
            return GradeLevel::Second.display_name().to_string();
        }

        if let Some(level) = GradeLevel::find_in(record.get(FieldKey::LearningGoal)) {
            return level.display_name().to_string();
        }

        GradeLevel::Second.display_name().to_string()
    }
}
