//! Free-text content parser
//!
//! Editors write content cells as loose prose, dash-separated bullets, or
//! numbered steps ("1. Gjør dette 2. Gjør det"). [`ContentParser`] turns one
//! such cell into an ordered list of trimmed, non-empty lines by evaluating a
//! fixed-priority rule chain:
//!
//! 1. blank text → empty list
//! 2. a `<digits>. ` pattern anywhere → numbered list (takes priority)
//! 3. a literal hyphen anywhere → bulleted list
//! 4. otherwise → single-item list
//!
//! The parser is pure and total: no input fails, garbled text degrades to an
//! empty or single-item list.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches one numbered-item marker: an integer, a period, then whitespace
static NUMBERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\s+").expect("numbered-marker pattern compiles"));

/// Which rule produced the parsed list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Blank input
    Empty,
    /// Split on `<digits>. ` markers
    Numbered,
    /// Split on hyphens
    Bulleted,
    /// The trimmed text as a single item
    Single,
}

/// Tagged result of parsing one text cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedText {
    /// The rule that fired
    pub kind: ListKind,
    /// Ordered, trimmed, non-empty lines
    pub items: Vec<String>,
}

impl ParsedText {
    /// Consume into the ordered item list
    #[inline]
    #[must_use]
    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}

/// Free-text → ordered list parser
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentParser;

impl ContentParser {
    /// Parse one text cell into a tagged list
    #[must_use]
    pub fn parse(text: &str) -> ParsedText {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ParsedText {
                kind: ListKind::Empty,
                items: Vec::new(),
            };
        }

        if NUMBERED_MARKER.is_match(trimmed) {
            // Splitting discards the marker itself; the segment before the
            // first marker is dropped with the other empties.
            let items = Self::collect(NUMBERED_MARKER.split(trimmed));
            return ParsedText {
                kind: ListKind::Numbered,
                items,
            };
        }

        if trimmed.contains('-') {
            let items = Self::collect(trimmed.split('-'));
            return ParsedText {
                kind: ListKind::Bulleted,
                items,
            };
        }

        ParsedText {
            kind: ListKind::Single,
            items: vec![trimmed.to_string()],
        }
    }

    /// Convenience: parse and keep only the items
    #[inline]
    #[must_use]
    pub fn parse_items(text: &str) -> Vec<String> {
        Self::parse(text).into_items()
    }

    fn collect<'a>(segments: impl Iterator<Item = &'a str>) -> Vec<String> {
        segments
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
