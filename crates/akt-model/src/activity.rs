//! Activity records
//!
//! Defines [`Activity`] and its [`ActivityContent`] sections. Field order on
//! the structs matches the persisted JSON layout; consumers depend on that
//! shape byte-for-byte.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::section::Section;

/// The six ordered content sections of an activity
///
/// Every section is an ordered list of text lines. Order within a section is
/// presentation order and must survive a load/save round trip. An empty
/// section serializes as an empty array, never as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityContent {
    /// Opening text
    #[serde(default)]
    pub introduction: Vec<String>,
    /// Main body
    #[serde(default)]
    pub main: Vec<String>,
    /// Worked examples
    #[serde(default)]
    pub examples: Vec<String>,
    /// Reflection prompts
    #[serde(default)]
    pub reflection: Vec<String>,
    /// Teacher tips
    #[serde(default)]
    pub tips: Vec<String>,
    /// Extra material and linked assets
    #[serde(default)]
    pub extra: Vec<String>,
}

impl ActivityContent {
    /// Borrow one section's lines
    #[inline]
    #[must_use]
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Introduction => &self.introduction,
            Section::Main => &self.main,
            Section::Examples => &self.examples,
            Section::Reflection => &self.reflection,
            Section::Tips => &self.tips,
            Section::Extra => &self.extra,
        }
    }

    /// Mutably borrow one section's lines
    #[inline]
    pub fn section_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::Introduction => &mut self.introduction,
            Section::Main => &mut self.main,
            Section::Examples => &mut self.examples,
            Section::Reflection => &mut self.reflection,
            Section::Tips => &mut self.tips,
            Section::Extra => &mut self.extra,
        }
    }

    /// True when every section is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.section(*s).is_empty())
    }
}

/// One educational unit
///
/// # Invariants
/// - `id` and `title` are non-empty (enforced by [`Activity::validate`],
///   called by the record builder before a record enters a collection)
/// - `id` is unique within one grade partition; the synchronizer enforces
///   last-write-wins when source batches repeat an id
///
/// The optional fields serialize only when present: an absent `image` is a
/// missing key, which is distinct from an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique id within the grade partition
    pub id: String,
    /// Display title
    pub title: String,
    /// Expected duration, free text (e.g. "45 minutter")
    #[serde(default)]
    pub time: String,
    /// Where the activity takes place
    #[serde(default)]
    pub location: String,
    /// Required tools and materials
    #[serde(default)]
    pub tools: String,
    /// Recommended group size
    #[serde(default)]
    pub groupsize: String,
    /// Curriculum learning goal, free text
    #[serde(default)]
    pub learning_goal: String,
    /// Illustration path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Additional learning goals, when the source provides several
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_goals: Option<Vec<String>>,
    /// Ordered content sections
    #[serde(default)]
    pub content: ActivityContent,
}

impl Activity {
    /// Create a minimal activity with empty descriptive fields
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            time: String::new(),
            location: String::new(),
            tools: String::new(),
            groupsize: String::new(),
            learning_goal: String::new(),
            image: None,
            learning_goals: None,
            content: ActivityContent::default(),
        }
    }

    /// Check the record invariants
    ///
    /// # Errors
    /// Returns [`ModelError::EmptyId`] or [`ModelError::EmptyTitle`] when the
    /// required fields are blank.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.id.trim().is_empty() {
            return Err(ModelError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(ModelError::EmptyTitle {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}
