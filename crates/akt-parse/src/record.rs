//! Row decoding and record construction
//!
//! [`RawRecord`] is one decoded source row keyed by canonical column;
//! [`RecordBuilder`] turns it into a validated [`Activity`]. Rows that lack
//! an id or title are rejected here, before any record reaches a collection,
//! so the synchronizer can assume its inputs are well-formed.

use std::collections::HashMap;

use akt_model::{Activity, ActivityContent};

use crate::content::ContentParser;
use crate::error::RecordError;
use crate::fields::FieldKey;

/// One decoded source row
///
/// Values are stored trimmed, keyed by resolved [`FieldKey`]. Columns whose
/// header did not resolve are dropped at construction. When a file repeats a
/// header, the last column wins.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    fields: HashMap<FieldKey, String>,
}

impl RawRecord {
    /// Build a record from raw `(header, value)` pairs
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut fields = HashMap::new();
        for (header, value) in pairs {
            if let Some(key) = FieldKey::from_header(header.as_ref()) {
                fields.insert(key, value.as_ref().trim().to_string());
            }
        }
        Self { fields }
    }

    /// Build a record from already-resolved columns
    #[must_use]
    pub fn from_fields<I, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (FieldKey, V)>,
        V: AsRef<str>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(key, value)| (key, value.as_ref().trim().to_string()))
                .collect(),
        }
    }

    /// The trimmed value of a column, empty string when absent
    #[inline]
    #[must_use]
    pub fn get(&self, key: FieldKey) -> &str {
        self.fields.get(&key).map_or("", String::as_str)
    }

    /// True when every stored value is empty
    ///
    /// Spreadsheet exports often end in fully blank rows; callers skip these
    /// silently rather than warning about a missing id.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|v| v.is_empty())
    }
}

/// Builds validated activities from decoded rows
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordBuilder;

impl RecordBuilder {
    /// Construct an [`Activity`] from one decoded row
    ///
    /// Scalar columns are carried over trimmed; content columns run through
    /// [`ContentParser`].
    ///
    /// # Errors
    /// Returns [`RecordError::MissingField`] when the id or title column is
    /// blank. Callers report this as a skipped-row warning and continue.
    pub fn build(record: &RawRecord) -> Result<Activity, RecordError> {
        let id = record.get(FieldKey::Id);
        if id.is_empty() {
            return Err(RecordError::MissingField {
                field: FieldKey::Id,
            });
        }

        let title = record.get(FieldKey::Title);
        if title.is_empty() {
            return Err(RecordError::MissingField {
                field: FieldKey::Title,
            });
        }

        let mut activity = Activity::new(id, title);
        activity.time = record.get(FieldKey::Time).to_string();
        activity.location = record.get(FieldKey::Location).to_string();
        activity.tools = record.get(FieldKey::Tools).to_string();
        activity.groupsize = record.get(FieldKey::Groupsize).to_string();
        activity.learning_goal = record.get(FieldKey::LearningGoal).to_string();
        activity.content = ActivityContent {
            introduction: ContentParser::parse_items(record.get(FieldKey::Introduction)),
            main: ContentParser::parse_items(record.get(FieldKey::Main)),
            examples: ContentParser::parse_items(record.get(FieldKey::Examples)),
            reflection: ContentParser::parse_items(record.get(FieldKey::Reflection)),
            tips: ContentParser::parse_items(record.get(FieldKey::Tips)),
            extra: ContentParser::parse_items(record.get(FieldKey::Extra)),
        };

        debug_assert!(activity.validate().is_ok());
        Ok(activity)
    }
}
