//! Activity Synchronization
//!
//! Reconciles an authoritative incoming batch of activity records against a
//! persisted grade collection, computing additions, updates, and deletions
//! while preserving untouched data.
//!
//! # Core Concepts
//!
//! - [`Synchronizer`]: the pure reconciliation engine
//! - [`SyncPolicy`]: deletion flag and merge mode
//! - [`ChangeReport`]: ids added / updated / deleted by one reconciliation
//! - [`SyncBatch`]: incoming records grouped per grade partition
//! - [`apply_asset_links`]: overwrite `extra` sections from an asset scan
//!
//! # Example
//!
//! ```rust,ignore
//! use akt_sync::{SyncPolicy, Synchronizer};
//!
//! let synchronizer = Synchronizer::new(SyncPolicy::default());
//! let outcome = synchronizer.reconcile("Andre årstrinn", &existing, &incoming);
//! println!("{}", outcome.report.summary());
//! ```
//!
//! The engine performs no I/O and never mutates its inputs; loading and
//! persisting collections is the caller's concern, strictly before and after
//! the reconciliation. Partitions are independent, so callers may reconcile
//! several grades in parallel as long as each partition has a single writer.

#![warn(unreachable_pub)]

// Core modules
mod assets;
mod batch;
mod policy;
mod report;
mod synchronizer;

// Re-exports
pub use assets::apply_asset_links;
pub use batch::SyncBatch;
pub use policy::{MergeMode, SyncPolicy};
pub use report::ChangeReport;
pub use synchronizer::{SyncOutcome, Synchronizer};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
