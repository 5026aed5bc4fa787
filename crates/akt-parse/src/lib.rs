//! Activity Source Parsing
//!
//! Turns editor-maintained spreadsheet exports into validated activity
//! records.
//!
//! # Core Concepts
//!
//! - [`ContentParser`]: free-text field → ordered list of content lines
//! - [`FieldKey`]: canonical column names with alias resolution
//! - [`RawRecord`] / [`RecordBuilder`]: decoded row → validated [`Activity`]
//! - [`GradeResolver`]: decides which grade partition a record belongs to
//! - [`TableReader`]: delimiter-sniffing CSV/TSV decoding
//!
//! # Example
//!
//! ```rust,ignore
//! use akt_parse::{ContentParser, RecordBuilder, TableReader};
//!
//! let rows = TableReader::new().read_path("aktiviteter.csv".as_ref())?;
//! for row in &rows {
//!     match RecordBuilder::build(row) {
//!         Ok(activity) => println!("{}", activity.title),
//!         Err(err) => tracing::warn!("skipping row: {err}"),
//!     }
//! }
//! ```

#![warn(unreachable_pub)]

// Core modules
mod content;
mod error;
mod fields;
mod record;
mod resolve;
mod table;

// Re-exports
pub use content::{ContentParser, ListKind, ParsedText};
pub use error::{RecordError, TableError};
pub use fields::FieldKey;
pub use record::{RawRecord, RecordBuilder};
pub use resolve::GradeResolver;
pub use table::{sniff_delimiter, TableReader};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
