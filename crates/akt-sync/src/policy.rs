//! Synchronization policies

/// How an update is applied to an existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// The incoming record replaces the existing one wholesale
    #[default]
    Replace,
    /// Empty incoming scalar fields, empty content sections, and absent
    /// optional fields keep the existing record's values
    PatchNonEmpty,
}

/// Policy parameters for one synchronization run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPolicy {
    /// Remove existing activities whose id is absent from the incoming batch
    pub delete_missing: bool,
    /// How updates are applied
    pub merge: MergeMode,
}

impl SyncPolicy {
    /// Create the default policy (deletion enabled, full replacement)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With the deletion pass enabled or disabled
    #[inline]
    #[must_use]
    pub fn with_delete_missing(mut self, delete_missing: bool) -> Self {
        self.delete_missing = delete_missing;
        self
    }

    /// With the given merge mode
    #[inline]
    #[must_use]
    pub fn with_merge(mut self, merge: MergeMode) -> Self {
        self.merge = merge;
        self
    }
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self {
            delete_missing: true,
            merge: MergeMode::Replace,
        }
    }
}
