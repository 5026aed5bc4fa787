//! Canonical source columns
//!
//! Source files are maintained by hand, so headers arrive with varying case,
//! stray whitespace, and a mix of English and Norwegian names. [`FieldKey`]
//! is the canonical column set; [`FieldKey::from_header`] resolves a raw
//! header into it. Unrecognized columns are simply ignored by the caller.

use std::fmt;

/// Canonical column of an activity source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// Activity id
    Id,
    /// Activity title
    Title,
    /// Duration
    Time,
    /// Location
    Location,
    /// Tools and materials
    Tools,
    /// Group size
    Groupsize,
    /// Learning goal
    LearningGoal,
    /// Dedicated grade column
    Grade,
    /// Introduction content
    Introduction,
    /// Main content
    Main,
    /// Examples content
    Examples,
    /// Reflection content
    Reflection,
    /// Tips content
    Tips,
    /// Extra content
    Extra,
}

impl FieldKey {
    /// Resolve a raw header into a canonical column
    ///
    /// Matching is case-insensitive on the trimmed header. Both the English
    /// column names of the spreadsheet template and their Norwegian
    /// equivalents are accepted.
    #[must_use]
    pub fn from_header(raw: &str) -> Option<FieldKey> {
        let header = raw.trim().to_lowercase();
        let key = match header.as_str() {
            "id" => FieldKey::Id,
            "title" | "tittel" => FieldKey::Title,
            "time" | "tid" => FieldKey::Time,
            "location" | "sted" => FieldKey::Location,
            "tools" | "verktøy" | "utstyr" => FieldKey::Tools,
            "groupsize" | "group size" | "gruppestørrelse" => FieldKey::Groupsize,
            "learning goal" | "learning_goal" | "læringsmål" => FieldKey::LearningGoal,
            "grade" | "trinn" | "årstrinn" => FieldKey::Grade,
            "introduction" | "introduksjon" => FieldKey::Introduction,
            "main" | "hoveddel" => FieldKey::Main,
            "examples" | "eksempler" => FieldKey::Examples,
            "reflection" | "refleksjon" => FieldKey::Reflection,
            "tips" => FieldKey::Tips,
            "extra" | "ekstra" => FieldKey::Extra,
            _ => return None,
        };
        Some(key)
    }

    /// The canonical header name, as printed in diagnostics
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Id => "ID",
            FieldKey::Title => "Title",
            FieldKey::Time => "Time",
            FieldKey::Location => "Location",
            FieldKey::Tools => "Tools",
            FieldKey::Groupsize => "Groupsize",
            FieldKey::LearningGoal => "Learning goal",
            FieldKey::Grade => "Grade",
            FieldKey::Introduction => "Introduction",
            FieldKey::Main => "Main",
            FieldKey::Examples => "Examples",
            FieldKey::Reflection => "Reflection",
            FieldKey::Tips => "Tips",
            FieldKey::Extra => "Extra",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
