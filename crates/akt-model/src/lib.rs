//! Activity Data Model
//!
//! Typed records for grade-partitioned educational activity datasets.
//!
//! # Core Concepts
//!
//! - [`Activity`]: one educational unit (id, title, descriptive fields, content)
//! - [`ActivityContent`]: the six ordered content sections of an activity
//! - [`Section`]: names of the content sections
//! - [`GradeCollection`]: the persisted unit for one grade partition
//! - [`GradeLevel`]: the known grade levels with display names and file stems
//!
//! # Example
//!
//! ```rust,ignore
//! use akt_model::{Activity, GradeCollection, Section};
//!
//! let activity = Activity::new("20101", "Tallinja på gulvet");
//! let collection = GradeCollection::from_activities("Andre årstrinn", vec![activity]);
//! assert_eq!(collection.total_activities, 1);
//! ```

#![warn(unreachable_pub)]

// Core modules
mod activity;
mod collection;
mod error;
mod grade;
mod section;

// Re-exports
pub use activity::{Activity, ActivityContent};
pub use collection::GradeCollection;
pub use error::ModelError;
pub use grade::GradeLevel;
pub use section::Section;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
