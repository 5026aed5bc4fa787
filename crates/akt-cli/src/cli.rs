//! Argument definitions for the `akt` binary

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default partition directory, matching the consuming web app's layout
pub const DEFAULT_OUTPUT_DIR: &str = "./public/activityData/grades";

/// Maintain grade-partitioned activity datasets
#[derive(Debug, Parser)]
#[command(name = "akt", version, about = "Grade-partitioned activity dataset toolkit")]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reconcile CSV/TSV source files into the grade JSON files
    Sync(SyncArgs),
    /// Link printable assets into the activities' extra sections
    Printouts(PrintoutsArgs),
    /// Count activities per grade and verify stored totals
    Count(CountArgs),
}

/// Arguments for `akt sync`
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Source file(s) to process
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Directory containing the grade JSON files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Force all activities into this grade level (e.g. "Andre årstrinn")
    #[arg(long, value_name = "NAME")]
    pub grade: Option<String>,

    /// Create timestamped backup files before overwriting
    #[arg(long)]
    pub backup: bool,

    /// Compute and report changes without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Keep existing activities that are absent from the source files
    #[arg(long)]
    pub no_delete: bool,

    /// Patch updates field by field instead of replacing records wholesale
    #[arg(long)]
    pub patch: bool,

    /// Delimiter override: a single character, or "tab"
    #[arg(long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Printout directory to link into the extra sections after reconciling
    #[arg(long, value_name = "DIR")]
    pub printouts: Option<PathBuf>,
}

/// Arguments for `akt printouts`
#[derive(Debug, Args)]
pub struct PrintoutsArgs {
    /// Directory containing the grade JSON files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Printout asset directory to scan
    #[arg(long, value_name = "DIR", default_value = "./public/printOuts")]
    pub printouts: PathBuf,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `akt count`
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Directory containing the grade JSON files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}
