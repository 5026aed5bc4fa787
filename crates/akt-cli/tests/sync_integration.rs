//! End-to-end pipeline tests: source files in, grade JSON files out.

use std::fs;
use std::path::{Path, PathBuf};

use akt_cli::cli::{CountArgs, PrintoutsArgs, SyncArgs};
use akt_cli::commands::{run_count, run_printouts, run_sync};

const SOURCE: &str = "\
ID,Title,Time,Location,Tools,Groupsize,Learning goal,Grade,Introduction,Main,Examples,Reflection,Tips,Extra
20101,Tallinja på gulvet,30 minutter,Klasserom,Teip,2-4,Plassere tall på tallinja,Andre årstrinn,Vi utforsker tallinja,1. Tegn ei tallinje 2. Hopp til tallet,,Hva lærte vi?,Bruk teip - store tall,
30101,Klokka,20 minutter,Ute,Kritt,Hele klassen,Lese klokka,Tredje årstrinn,,Tegn ei klokke i skolegården,,,,
";

fn sync_args(files: Vec<PathBuf>, output_dir: &Path) -> SyncArgs {
    SyncArgs {
        files,
        output_dir: output_dir.to_path_buf(),
        grade: None,
        backup: false,
        dry_run: false,
        no_delete: false,
        patch: false,
        delimiter: None,
        printouts: None,
    }
}

fn write_source(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn load_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn first_run_creates_grade_files() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let source = write_source(root.path(), "aktiviteter.csv", SOURCE);

    let summary = run_sync(&sync_args(vec![source], &output)).unwrap();
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.rows_skipped, 0);
    assert_eq!(summary.partitions.len(), 2);
    assert_eq!(summary.partitions[0].report.added, vec!["20101"]);
    assert_eq!(summary.partitions[1].report.added, vec!["30101"]);

    let second = load_json(&output.join("2.grade.json"));
    assert_eq!(second["grade"], "Andre årstrinn");
    assert_eq!(second["total_activities"], 1);
    assert_eq!(
        second["activities"][0]["content"]["main"],
        serde_json::json!(["Tegn ei tallinje", "Hopp til tallet"])
    );
    assert_eq!(
        second["activities"][0]["content"]["tips"],
        serde_json::json!(["Bruk teip", "store tall"])
    );

    let third = load_json(&output.join("3.grade.json"));
    assert_eq!(third["total_activities"], 1);
    assert_eq!(third["activities"][0]["id"], "30101");
}

#[test]
fn second_run_reports_no_changes() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let source = write_source(root.path(), "aktiviteter.csv", SOURCE);

    run_sync(&sync_args(vec![source.clone()], &output)).unwrap();
    let before = fs::read_to_string(output.join("2.grade.json")).unwrap();

    let summary = run_sync(&sync_args(vec![source], &output)).unwrap();
    for partition in &summary.partitions {
        assert!(partition.report.is_empty(), "unexpected changes for {}", partition.grade);
    }
    let after = fs::read_to_string(output.join("2.grade.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn update_and_delete_flow() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let source = write_source(root.path(), "v1.csv", SOURCE);
    run_sync(&sync_args(vec![source], &output)).unwrap();

    // Second edition touches only grade 2: the number line gets a new title
    // and a shop activity joins. Grade 3 is not in the batch and stays as-is.
    let revised = "\
ID,Title,Grade\n\
20101,Tallinja i gymsalen,Andre årstrinn\n\
20202,Butikklek,Andre årstrinn\n";
    let source = write_source(root.path(), "v2.csv", revised);
    let summary = run_sync(&sync_args(vec![source], &output)).unwrap();

    let partition = &summary.partitions[0];
    assert_eq!(partition.grade, "Andre årstrinn");
    assert_eq!(partition.report.updated, vec!["20101"]);
    assert_eq!(partition.report.added, vec!["20202"]);
    assert!(partition.report.deleted.is_empty());

    let second = load_json(&output.join("2.grade.json"));
    assert_eq!(second["total_activities"], 2);
    assert_eq!(second["activities"][0]["title"], "Tallinja i gymsalen");
    // Full replacement: the revised source had no Time column.
    assert_eq!(second["activities"][0]["time"], "");
}

#[test]
fn deletion_applies_within_a_grade() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let two_rows = "\
ID,Title,Grade\n\
20101,En,Andre årstrinn\n\
20102,To,Andre årstrinn\n";
    let source = write_source(root.path(), "v1.csv", two_rows);
    run_sync(&sync_args(vec![source], &output)).unwrap();

    let one_row = "ID,Title,Grade\n20101,En,Andre årstrinn\n";
    let source = write_source(root.path(), "v2.csv", one_row);
    let summary = run_sync(&sync_args(vec![source.clone()], &output)).unwrap();
    assert_eq!(summary.partitions[0].report.deleted, vec!["20102"]);

    let second = load_json(&output.join("2.grade.json"));
    assert_eq!(second["total_activities"], 1);

    // With --no-delete the removed row would have survived.
    let restore = "\
ID,Title,Grade\n\
20101,En,Andre årstrinn\n\
20102,To,Andre årstrinn\n";
    let source_restore = write_source(root.path(), "v3.csv", restore);
    run_sync(&sync_args(vec![source_restore], &output)).unwrap();
    let mut args = sync_args(vec![source], &output);
    args.no_delete = true;
    let summary = run_sync(&args).unwrap();
    assert!(summary.partitions[0].report.deleted.is_empty());
    let second = load_json(&output.join("2.grade.json"));
    assert_eq!(second["total_activities"], 2);
}

#[test]
fn dry_run_writes_nothing() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let source = write_source(root.path(), "aktiviteter.csv", SOURCE);

    let mut args = sync_args(vec![source], &output);
    args.dry_run = true;
    let summary = run_sync(&args).unwrap();

    // The report is complete even though nothing was persisted.
    assert_eq!(summary.partitions.len(), 2);
    assert!(!summary.partitions[0].report.is_empty());
    assert!(!output.exists());
}

#[test]
fn backup_copies_the_previous_edition() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let source = write_source(root.path(), "aktiviteter.csv", SOURCE);
    run_sync(&sync_args(vec![source], &output)).unwrap();

    let revised = "ID,Title,Grade\n20101,Nytt navn,Andre årstrinn\n";
    let source = write_source(root.path(), "v2.csv", revised);
    let mut args = sync_args(vec![source], &output);
    args.backup = true;
    run_sync(&args).unwrap();

    let backups: Vec<_> = fs::read_dir(&output)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("2.grade.json.backup_")
        })
        .collect();
    assert_eq!(backups.len(), 1);

    let backup = load_json(&backups[0].path());
    assert_eq!(backup["activities"][0]["title"], "Tallinja på gulvet");
}

#[test]
fn undecodable_file_fails_alone() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let good = write_source(root.path(), "good.csv", SOURCE);
    let bad = write_source(root.path(), "bad.csv", "Foo,Bar\n1,2\n");

    let summary = run_sync(&sync_args(vec![bad, good], &output)).unwrap();
    assert_eq!(summary.files_failed, 1);
    assert_eq!(summary.files_processed, 1);
    assert!(output.join("2.grade.json").exists());
}

#[test]
fn run_fails_when_nothing_decodes() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let bad = write_source(root.path(), "bad.csv", "Foo,Bar\n1,2\n");

    assert!(run_sync(&sync_args(vec![bad], &output)).is_err());
    assert!(!output.exists());
}

#[test]
fn rows_missing_required_fields_are_skipped() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let source = write_source(
        root.path(),
        "aktiviteter.csv",
        "ID,Title,Grade\n20101,En,Andre årstrinn\n,Uten id,Andre årstrinn\n20103,,Andre årstrinn\n",
    );

    let summary = run_sync(&sync_args(vec![source], &output)).unwrap();
    assert_eq!(summary.rows_skipped, 2);
    let second = load_json(&output.join("2.grade.json"));
    assert_eq!(second["total_activities"], 1);
}

#[test]
fn forced_grade_overrides_the_source() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let source = write_source(root.path(), "aktiviteter.csv", SOURCE);

    let mut args = sync_args(vec![source], &output);
    args.grade = Some("Femte årstrinn".to_string());
    let summary = run_sync(&args).unwrap();

    assert_eq!(summary.partitions.len(), 1);
    assert_eq!(summary.partitions[0].grade, "Femte årstrinn");
    let fifth = load_json(&output.join("5.grade.json"));
    assert_eq!(fifth["total_activities"], 2);
}

#[test]
fn printouts_link_into_extra_sections() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let source = write_source(root.path(), "aktiviteter.csv", SOURCE);
    run_sync(&sync_args(vec![source], &output)).unwrap();

    let printouts = root.path().join("printOuts");
    fs::create_dir(&printouts).unwrap();
    fs::write(printouts.join("20101_tallinje.png"), b"png").unwrap();
    fs::write(printouts.join("20101.docx"), b"docx").unwrap();
    fs::write(printouts.join("99999_annet.png"), b"png").unwrap();

    let summary = run_printouts(&PrintoutsArgs {
        output_dir: output.clone(),
        printouts,
        dry_run: false,
    })
    .unwrap();
    assert_eq!(summary.files_touched, 1);
    assert_eq!(summary.activities_updated, 1);

    let second = load_json(&output.join("2.grade.json"));
    assert_eq!(
        second["activities"][0]["content"]["extra"],
        serde_json::json!(["printOuts/20101.docx", "printOuts/20101_tallinje.png"])
    );
}

#[test]
fn count_reports_per_grade_totals() {
    let root = tempfile::tempdir().unwrap();
    let output = root.path().join("grades");
    let source = write_source(root.path(), "aktiviteter.csv", SOURCE);
    run_sync(&sync_args(vec![source], &output)).unwrap();

    let counts = run_count(&CountArgs {
        output_dir: output.clone(),
    })
    .unwrap();
    assert_eq!(counts.len(), 2);
    assert!(counts.iter().all(|c| c.matches()));

    // Doctor one file to hold a stale total.
    let path = output.join("2.grade.json");
    let mut value = load_json(&path);
    value["total_activities"] = serde_json::json!(42);
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();

    let counts = run_count(&CountArgs { output_dir: output }).unwrap();
    let stale = counts.iter().find(|c| c.grade == "Andre årstrinn").unwrap();
    assert_eq!(stale.stored, 42);
    assert_eq!(stale.counted, 1);
    assert!(!stale.matches());
}
