//! Asset-link application
//!
//! An external scanner maps activity ids to lists of relative asset paths
//! ("printouts"). Applying the map overwrites the `extra` content section of
//! each matching activity wholesale; activities without assets keep their
//! section untouched.

use std::collections::BTreeMap;

use tracing::debug;

use akt_model::GradeCollection;

/// Overwrite `extra` sections from an asset map
///
/// Returns the ids that were updated, in partition order. Ids present in
/// the map but absent from the collection are ignored; they may belong to a
/// different grade.
pub fn apply_asset_links(
    collection: &mut GradeCollection,
    links: &BTreeMap<String, Vec<String>>,
) -> Vec<String> {
    let mut updated = Vec::new();
    for activity in &mut collection.activities {
        if let Some(paths) = links.get(&activity.id) {
            if activity.content.extra != *paths {
                activity.content.extra = paths.clone();
                updated.push(activity.id.clone());
            }
        }
    }
    if !updated.is_empty() {
        debug!(
            grade = %collection.grade,
            count = updated.len(),
            "asset links applied"
        );
    }
    updated
}
