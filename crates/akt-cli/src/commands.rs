//! Subcommand implementations
//!
//! Each command brackets the pure reconciliation core with the store's
//! blocking I/O: read sources and partitions first, compute, then persist.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{error, info, warn};

use akt_parse::{GradeResolver, RecordBuilder, TableReader};
use akt_store::GradeCount;
use akt_sync::{
    apply_asset_links, ChangeReport, MergeMode, SyncBatch, SyncPolicy, Synchronizer,
};

use crate::cli::{CountArgs, PrintoutsArgs, SyncArgs};

/// Outcome of reconciling one grade partition
#[derive(Debug, Clone)]
pub struct PartitionSummary {
    /// Grade display name
    pub grade: String,
    /// Ids added / updated / deleted
    pub report: ChangeReport,
    /// Activity count after reconciliation
    pub total: usize,
}

/// Outcome of one `akt sync` run
#[derive(Debug, Clone, Default)]
pub struct SyncSummary {
    /// Source files decoded successfully
    pub files_processed: usize,
    /// Source files that failed to decode
    pub files_failed: usize,
    /// Rows skipped for missing id or title
    pub rows_skipped: usize,
    /// Per-grade outcomes, in first-appearance order
    pub partitions: Vec<PartitionSummary>,
}

/// Outcome of one `akt printouts` run
#[derive(Debug, Clone, Default)]
pub struct PrintoutsSummary {
    /// Grade files whose activities changed
    pub files_touched: usize,
    /// Activities whose extra section was overwritten
    pub activities_updated: usize,
}

/// Run `akt sync`
///
/// # Errors
/// Fails when no source file could be processed, a partition cannot be
/// loaded, or a write fails. Individual undecodable source files and
/// malformed rows are logged and skipped.
pub fn run_sync(args: &SyncArgs) -> anyhow::Result<SyncSummary> {
    let reader = match &args.delimiter {
        Some(raw) => TableReader::with_delimiter(parse_delimiter(raw)?),
        None => TableReader::new(),
    };
    let resolver = match &args.grade {
        Some(grade) => GradeResolver::with_force(grade.clone()),
        None => GradeResolver::new(),
    };

    let mut summary = SyncSummary::default();
    let mut batch = SyncBatch::new();
    for file in &args.files {
        let rows = match reader.read_path(file) {
            Ok(rows) => rows,
            Err(err) => {
                error!(path = %file.display(), %err, "source file failed to decode");
                summary.files_failed += 1;
                continue;
            }
        };
        info!(path = %file.display(), rows = rows.len(), "decoded source file");
        for row in &rows {
            if row.is_blank() {
                continue;
            }
            match RecordBuilder::build(row) {
                Ok(activity) => batch.push(resolver.resolve(row), activity),
                Err(err) => {
                    warn!(path = %file.display(), %err, "skipping row");
                    summary.rows_skipped += 1;
                }
            }
        }
        summary.files_processed += 1;
    }
    if summary.files_processed == 0 {
        bail!("no source file could be processed");
    }

    let links = match &args.printouts {
        Some(dir) => Some(
            akt_store::scan_printouts(dir)
                .with_context(|| format!("scanning printouts in {}", dir.display()))?,
        ),
        None => None,
    };

    let policy = SyncPolicy::new()
        .with_delete_missing(!args.no_delete)
        .with_merge(if args.patch {
            MergeMode::PatchNonEmpty
        } else {
            MergeMode::Replace
        });
    let synchronizer = Synchronizer::new(policy);

    for (grade, incoming) in batch {
        let existing = akt_store::load_partition(&args.output_dir, &grade)
            .with_context(|| format!("loading partition for '{grade}'"))?;
        let mut outcome = synchronizer.reconcile(&grade, &existing.activities, &incoming);
        if let Some(links) = &links {
            apply_asset_links(&mut outcome.collection, links);
        }
        info!(grade = %grade, summary = %outcome.report.summary(), "partition reconciled");

        let path = akt_store::partition_path(&args.output_dir, &grade);
        if args.dry_run {
            info!(path = %path.display(), "[dry-run] skipping write");
        } else {
            if args.backup && path.exists() {
                akt_store::backup_partition(&path)
                    .with_context(|| format!("backing up {}", path.display()))?;
            }
            akt_store::save_partition(&args.output_dir, &outcome.collection)
                .with_context(|| format!("saving partition for '{grade}'"))?;
        }

        summary.partitions.push(PartitionSummary {
            grade,
            total: outcome.collection.total_activities,
            report: outcome.report,
        });
    }
    Ok(summary)
}

/// Run `akt printouts`
///
/// # Errors
/// Fails when the asset directory or a partition file cannot be read, or a
/// write fails.
pub fn run_printouts(args: &PrintoutsArgs) -> anyhow::Result<PrintoutsSummary> {
    let links = akt_store::scan_printouts(&args.printouts)
        .with_context(|| format!("scanning printouts in {}", args.printouts.display()))?;
    info!(activities = links.len(), "printout scan complete");

    let mut summary = PrintoutsSummary::default();
    for path in partition_files(&args.output_dir)? {
        let mut collection = akt_store::load_partition_file(&path)
            .with_context(|| format!("loading {}", path.display()))?;
        let updated = apply_asset_links(&mut collection, &links);
        if updated.is_empty() {
            continue;
        }
        info!(path = %path.display(), updated = updated.len(), "extra sections overwritten");
        if !args.dry_run {
            akt_store::save_partition_file(&path, &collection)
                .with_context(|| format!("saving {}", path.display()))?;
        }
        summary.files_touched += 1;
        summary.activities_updated += updated.len();
    }
    Ok(summary)
}

/// Run `akt count`
///
/// # Errors
/// Fails when the partition directory cannot be read or a file is invalid.
pub fn run_count(args: &CountArgs) -> anyhow::Result<Vec<GradeCount>> {
    akt_store::count_partitions(&args.output_dir)
        .with_context(|| format!("counting partitions in {}", args.output_dir.display()))
}

/// Partition files in a directory, in name order
fn partition_files(dir: &std::path::Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("reading directory {}", dir.display()))?
            .path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Parse the `--delimiter` override
fn parse_delimiter(raw: &str) -> anyhow::Result<u8> {
    match raw {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        s if s.chars().count() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        other => bail!("invalid delimiter '{other}': expected a single character or \"tab\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_parsing() {
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter(",").unwrap(), b',');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert!(parse_delimiter("ab").is_err());
        assert!(parse_delimiter("").is_err());
    }
}
