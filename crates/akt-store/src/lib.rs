//! Activity Partition Storage
//!
//! Filesystem side of the dataset: one JSON document per grade partition,
//! timestamped backups, printout-asset scanning, and per-grade counting.
//!
//! # Core Concepts
//!
//! - [`partition_filename`] / [`partition_path`]: grade → file mapping
//! - [`load_partition`] / [`save_partition`]: JSON I/O with the exact
//!   persisted shape; a missing file loads as an empty partition
//! - [`backup_partition`]: timestamped copy before overwrite
//! - [`scan_printouts`]: asset directory → id-keyed path lists
//! - [`count_partitions`]: per-grade counts with stored-total verification
//!
//! All functions here do blocking I/O; the reconciliation engine they bracket
//! is pure and lives in `akt-sync`.

#![warn(unreachable_pub)]

// Core modules
mod backup;
mod count;
mod error;
mod grades;
mod partition;
mod printouts;

// Re-exports
pub use backup::backup_partition;
pub use count::{count_partitions, GradeCount};
pub use error::StoreError;
pub use grades::partition_filename;
pub use partition::{
    load_partition, load_partition_file, partition_path, save_partition, save_partition_file,
};
pub use printouts::scan_printouts;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
