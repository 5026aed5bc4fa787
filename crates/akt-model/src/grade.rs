//! Known grade levels
//!
//! The dataset covers the Norwegian primary-school grades 2 through 7. Each
//! level carries its display name (the partition key used in the persisted
//! files), its canonical file stem, and the keyword patterns used to detect
//! it inside free-text learning goals.

use std::fmt;

/// A known grade level (årstrinn 2–7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GradeLevel {
    /// Andre årstrinn (grade 2)
    Second,
    /// Tredje årstrinn (grade 3)
    Third,
    /// Fjerde årstrinn (grade 4)
    Fourth,
    /// Femte årstrinn (grade 5)
    Fifth,
    /// Sjette årstrinn (grade 6)
    Sixth,
    /// Syvende årstrinn (grade 7)
    Seventh,
}

impl GradeLevel {
    /// All levels in ascending order
    pub const ALL: [GradeLevel; 6] = [
        GradeLevel::Second,
        GradeLevel::Third,
        GradeLevel::Fourth,
        GradeLevel::Fifth,
        GradeLevel::Sixth,
        GradeLevel::Seventh,
    ];

    /// Numeric grade (2–7)
    #[inline]
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            GradeLevel::Second => 2,
            GradeLevel::Third => 3,
            GradeLevel::Fourth => 4,
            GradeLevel::Fifth => 5,
            GradeLevel::Sixth => 6,
            GradeLevel::Seventh => 7,
        }
    }

    /// Display name used as the partition key
    #[inline]
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            GradeLevel::Second => "Andre årstrinn",
            GradeLevel::Third => "Tredje årstrinn",
            GradeLevel::Fourth => "Fjerde årstrinn",
            GradeLevel::Fifth => "Femte årstrinn",
            GradeLevel::Sixth => "Sjette årstrinn",
            GradeLevel::Seventh => "Syvende årstrinn",
        }
    }

    /// Ordinal keyword found in learning-goal text
    #[inline]
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            GradeLevel::Second => "andre",
            GradeLevel::Third => "tredje",
            GradeLevel::Fourth => "fjerde",
            GradeLevel::Fifth => "femte",
            GradeLevel::Sixth => "sjette",
            GradeLevel::Seventh => "syvende",
        }
    }

    /// File stem of the partition file (`2.grade` … `7.grade`)
    #[inline]
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            GradeLevel::Second => "2.grade",
            GradeLevel::Third => "3.grade",
            GradeLevel::Fourth => "4.grade",
            GradeLevel::Fifth => "5.grade",
            GradeLevel::Sixth => "6.grade",
            GradeLevel::Seventh => "7.grade",
        }
    }

    /// Look up a level by its exact display name
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<GradeLevel> {
        Self::ALL.into_iter().find(|g| g.display_name() == name)
    }

    /// Scan free text for a grade reference
    ///
    /// Ordinal keywords are tried for every level first, then bare digits.
    /// Matching is case-insensitive substring containment, which means a
    /// digit inside a larger number can match; the source data keeps grade
    /// references short enough that this has not been a problem in practice.
    #[must_use]
    pub fn find_in(text: &str) -> Option<GradeLevel> {
        let lowered = text.to_lowercase();
        for level in Self::ALL {
            if lowered.contains(level.keyword()) {
                return Some(level);
            }
        }
        for level in Self::ALL {
            if lowered.contains(&level.number().to_string()) {
                return Some(level);
            }
        }
        None
    }
}

impl fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
