//! Content section names
//!
//! Each activity carries six named content slots, always serialized in the
//! same order.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Named content slot within an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Opening text shown before the main body
    Introduction,
    /// The main body of the activity
    Main,
    /// Worked examples
    Examples,
    /// Reflection prompts for after the activity
    Reflection,
    /// Practical tips for the teacher
    Tips,
    /// Extra material, including linked printout assets
    Extra,
}

impl Section {
    /// All sections in serialization order
    pub const ALL: [Section; 6] = [
        Section::Introduction,
        Section::Main,
        Section::Examples,
        Section::Reflection,
        Section::Tips,
        Section::Extra,
    ];

    /// Canonical lowercase name, as used in the persisted JSON
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Introduction => "introduction",
            Section::Main => "main",
            Section::Examples => "examples",
            Section::Reflection => "reflection",
            Section::Tips => "tips",
            Section::Extra => "extra",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "introduction" => Ok(Section::Introduction),
            "main" => Ok(Section::Main),
            "examples" => Ok(Section::Examples),
            "reflection" => Ok(Section::Reflection),
            "tips" => Ok(Section::Tips),
            "extra" => Ok(Section::Extra),
            other => Err(ModelError::UnknownSection(other.to_string())),
        }
    }
}
