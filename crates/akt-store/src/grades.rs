//! Grade → partition filename mapping
//!
//! Known grades map onto the canonical `N.grade.json` files the web app
//! consumes. Any other partition key (forced grades, editorial buckets like
//! "Generelt") gets its own slugged file instead of being folded into an
//! existing grade.

use akt_model::GradeLevel;

/// The partition filename for a grade display name
#[must_use]
pub fn partition_filename(grade: &str) -> String {
    match GradeLevel::from_display_name(grade) {
        Some(level) => format!("{}.json", level.file_stem()),
        None => format!("{}.json", slugify(grade)),
    }
}

/// Lowercase filesystem-safe slug for unknown partition keys
fn slugify(grade: &str) -> String {
    let mut slug = String::with_capacity(grade.len());
    for ch in grade.to_lowercase().chars() {
        match ch {
            'å' => slug.push_str("aa"),
            'ø' => slug.push_str("oe"),
            'æ' => slug.push_str("ae"),
            ' ' => slug.push('_'),
            c if c.is_alphanumeric() || c == '_' || c == '-' || c == '.' => slug.push(c),
            _ => {}
        }
    }
    if slug.is_empty() {
        slug.push_str("unnamed");
    }
    slug
}
