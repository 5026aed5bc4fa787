//! The reconciliation engine
//!
//! [`Synchronizer::reconcile`] merges an incoming batch into an existing
//! partition:
//!
//! 1. existing records indexed by id, last occurrence winning
//! 2. incoming records deduplicated by id, later rows winning at the first
//!    row's position
//! 3. incoming ids present in the partition classify as updates, the rest as
//!    adds; an update whose merged record equals the existing one is treated
//!    as unchanged and left out of the report
//! 4. with deletion enabled, existing ids absent from the batch are dropped
//! 5. output preserves the existing order, substitutes updates in place,
//!    and appends adds in batch order
//!
//! The engine is pure: no I/O, no input mutation, total on well-formed
//! input. Callers must filter out records with empty ids or titles before
//! invoking it.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use tracing::debug;

use akt_model::{Activity, GradeCollection, Section};

use crate::policy::{MergeMode, SyncPolicy};
use crate::report::ChangeReport;

/// Result of reconciling one partition
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    /// The reconciled collection, count recomputed
    pub collection: GradeCollection,
    /// Ids added, updated, and deleted
    pub report: ChangeReport,
}

/// Reconciles incoming batches against persisted partitions
#[derive(Debug, Clone, Copy, Default)]
pub struct Synchronizer {
    policy: SyncPolicy,
}

impl Synchronizer {
    /// Create a synchronizer with the given policy
    #[inline]
    #[must_use]
    pub fn new(policy: SyncPolicy) -> Self {
        Self { policy }
    }

    /// The active policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> SyncPolicy {
        self.policy
    }

    /// Reconcile one partition
    ///
    /// `existing` is the partition as loaded from storage, `incoming` the
    /// batch built from the source files, both in their original order.
    #[must_use]
    pub fn reconcile(
        &self,
        grade: &str,
        existing: &[Activity],
        incoming: &[Activity],
    ) -> SyncOutcome {
        // Incoming dedup: later rows win, first-seen position is kept.
        let mut batch: IndexMap<&str, &Activity> = IndexMap::new();
        for activity in incoming {
            batch.insert(activity.id.as_str(), activity);
        }

        // Storage dedup: last occurrence wins.
        let mut existing_by_id: HashMap<&str, &Activity> = HashMap::new();
        for activity in existing {
            existing_by_id.insert(activity.id.as_str(), activity);
        }

        let mut report = ChangeReport::new();
        let mut updates: HashMap<&str, Activity> = HashMap::new();
        let mut adds: Vec<Activity> = Vec::new();

        for (&id, &candidate) in &batch {
            match existing_by_id.get(id) {
                Some(&current) => {
                    let merged = merge_update(current, candidate, self.policy.merge);
                    if merged != *current {
                        report.updated.push(id.to_string());
                        updates.insert(id, merged);
                    }
                }
                None => {
                    report.added.push(id.to_string());
                    adds.push(candidate.clone());
                }
            }
        }

        let mut reconciled: Vec<Activity> = Vec::with_capacity(existing.len() + adds.len());
        let mut emitted: HashSet<&str> = HashSet::new();
        for activity in existing {
            let id = activity.id.as_str();
            if !emitted.insert(id) {
                continue;
            }
            if let Some(updated) = updates.remove(id) {
                reconciled.push(updated);
            } else if batch.contains_key(id) || !self.policy.delete_missing {
                // Unchanged, or retained because deletion is disabled.
                reconciled.push(existing_by_id[id].clone());
            } else {
                report.deleted.push(id.to_string());
            }
        }
        reconciled.extend(adds);

        debug!(
            grade,
            added = report.added.len(),
            updated = report.updated.len(),
            deleted = report.deleted.len(),
            total = reconciled.len(),
            "partition reconciled"
        );

        SyncOutcome {
            collection: GradeCollection::from_activities(grade, reconciled),
            report,
        }
    }
}

/// Merge one incoming record over its existing counterpart
fn merge_update(existing: &Activity, incoming: &Activity, mode: MergeMode) -> Activity {
    match mode {
        MergeMode::Replace => incoming.clone(),
        MergeMode::PatchNonEmpty => {
            let mut merged = incoming.clone();
            patch_scalar(&mut merged.time, &existing.time);
            patch_scalar(&mut merged.location, &existing.location);
            patch_scalar(&mut merged.tools, &existing.tools);
            patch_scalar(&mut merged.groupsize, &existing.groupsize);
            patch_scalar(&mut merged.learning_goal, &existing.learning_goal);
            if merged.image.is_none() {
                merged.image = existing.image.clone();
            }
            if merged.learning_goals.is_none() {
                merged.learning_goals = existing.learning_goals.clone();
            }
            for section in Section::ALL {
                if merged.content.section(section).is_empty() {
                    *merged.content.section_mut(section) =
                        existing.content.section(section).to_vec();
                }
            }
            merged
        }
    }
}

fn patch_scalar(target: &mut String, fallback: &str) {
    if target.is_empty() {
        *target = fallback.to_string();
    }
}
