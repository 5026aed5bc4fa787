//! Grade partition collections
//!
//! [`GradeCollection`] is the persisted unit: one JSON document per grade.

use serde::{Deserialize, Serialize};

use crate::activity::Activity;

/// The persisted collection for one grade partition
///
/// `total_activities` is a redundant cache for consumers. It is always
/// recomputed from `activities.len()` before persisting and never trusted
/// from storage; a stored mismatch is a data-quality warning, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeCollection {
    /// Grade display name (the partition key)
    pub grade: String,
    /// Cached activity count, recomputed on every write
    pub total_activities: usize,
    /// Ordered activity records
    pub activities: Vec<Activity>,
}

impl GradeCollection {
    /// Create an empty collection for a grade
    #[inline]
    #[must_use]
    pub fn new(grade: impl Into<String>) -> Self {
        Self {
            grade: grade.into(),
            total_activities: 0,
            activities: Vec::new(),
        }
    }

    /// Create a collection from activities, with the count derived
    #[must_use]
    pub fn from_activities(grade: impl Into<String>, activities: Vec<Activity>) -> Self {
        let mut collection = Self {
            grade: grade.into(),
            total_activities: 0,
            activities,
        };
        collection.recount();
        collection
    }

    /// Number of activities actually present
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// True when the partition holds no activities
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// True when the cached count agrees with the live count
    #[inline]
    #[must_use]
    pub fn count_matches(&self) -> bool {
        self.total_activities == self.activities.len()
    }

    /// Recompute the cached count from the live activities
    #[inline]
    pub fn recount(&mut self) {
        self.total_activities = self.activities.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn from_activities_derives_count() {
        let collection = GradeCollection::from_activities(
            "Andre årstrinn",
            vec![Activity::new("A1", "En"), Activity::new("A2", "To")],
        );
        assert_eq!(collection.total_activities, 2);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn recount_overrides_stale_value() {
        let mut collection = GradeCollection::new("Tredje årstrinn");
        collection.total_activities = 99;
        assert!(!collection.count_matches());
        collection.recount();
        assert!(collection.count_matches());
        assert_eq!(collection.total_activities, 0);
    }

    #[test]
    fn persisted_shape() {
        let collection = GradeCollection::from_activities(
            "Andre årstrinn",
            vec![Activity::new("20101", "Tallinja på gulvet")],
        );
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(
            value,
            json!({
                "grade": "Andre årstrinn",
                "total_activities": 1,
                "activities": [{
                    "id": "20101",
                    "title": "Tallinja på gulvet",
                    "time": "",
                    "location": "",
                    "tools": "",
                    "groupsize": "",
                    "learning_goal": "",
                    "content": {
                        "introduction": [],
                        "main": [],
                        "examples": [],
                        "reflection": [],
                        "tips": [],
                        "extra": []
                    }
                }]
            })
        );
    }

    #[test]
    fn load_keeps_stored_count_until_recount() {
        // A stale stored count must survive deserialization so callers can
        // detect and warn about the mismatch.
        let value = json!({
            "grade": "Femte årstrinn",
            "total_activities": 7,
            "activities": []
        });
        let collection: GradeCollection = serde_json::from_value(value).unwrap();
        assert_eq!(collection.total_activities, 7);
        assert!(!collection.count_matches());
    }
}
