//! Command-line driver for the activity dataset toolkit
//!
//! Wires the library crates into the `akt` binary:
//!
//! - `akt sync` — reconcile source files into the grade partitions
//! - `akt printouts` — link printable assets into `content.extra`
//! - `akt count` — per-grade activity counts with stored-total checks
//!
//! Subcommand logic lives in [`commands`] and takes plain argument structs,
//! so integration tests drive it without spawning the binary.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};

/// Dispatch a parsed command line
///
/// # Errors
/// Propagates command failures; the binary maps these onto a non-zero exit.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Sync(args) => {
            let summary = commands::run_sync(&args)?;
            for partition in &summary.partitions {
                println!(
                    "{}: {} ({} activities)",
                    partition.grade,
                    partition.report.summary(),
                    partition.total
                );
            }
            if args.dry_run {
                println!(
                    "[dry-run] {} grade file(s) left untouched",
                    summary.partitions.len()
                );
            } else {
                println!(
                    "Synchronized {} grade(s) from {} file(s), {} row(s) skipped",
                    summary.partitions.len(),
                    summary.files_processed,
                    summary.rows_skipped
                );
            }
        }
        Command::Printouts(args) => {
            let summary = commands::run_printouts(&args)?;
            println!(
                "Linked printouts for {} activities across {} grade file(s)",
                summary.activities_updated, summary.files_touched
            );
            if args.dry_run {
                println!("[dry-run] no files were modified");
            }
        }
        Command::Count(args) => {
            let counts = commands::run_count(&args)?;
            let mut total = 0;
            for count in &counts {
                println!("{}: {} activities", count.grade, count.counted);
                if !count.matches() {
                    println!(
                        "  warning: file states {} activities, counted {}",
                        count.stored, count.counted
                    );
                }
                total += count.counted;
            }
            println!("Total: {total} activities in {} grade(s)", counts.len());
        }
    }
    Ok(())
}
