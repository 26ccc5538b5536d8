//! Integration tests for the dcmfilter binary
//!
//! Runs the built binary against temporary folders and checks exactly what
//! reaches stdout.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn run_dcmfilter(args: &[&str], cwd: &Path) -> Result<(String, String, Option<i32>), String> {
    let output = Command::new(env!("CARGO_BIN_EXE_dcmfilter"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| format!("Failed to run dcmfilter: {}", e))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    Ok((stdout, stderr, output.status.code()))
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(path).unwrap();
    write!(f, "{}", content).unwrap();
}

#[test]
fn test_prints_only_matching_file() {
    let root = tempdir().unwrap();
    write_file(
        &root.path().join("x/foo.json"),
        r#"{"Modality": {"Value": ["CT"]}}"#,
    );
    write_file(
        &root.path().join("x/bar.json"),
        r#"{"Modality": {"Value": ["MR"]}}"#,
    );

    let (stdout, stderr, code) = run_dcmfilter(
        &["--keys", "Modality", "--values", "CT", "x"],
        root.path(),
    )
    .unwrap();

    assert_eq!(stdout, "x/foo.json\n");
    assert!(stderr.is_empty(), "No diagnostics expected: {}", stderr);
    assert_eq!(code, Some(0));
}

#[test]
fn test_nested_directories_and_multiple_criteria() {
    let root = tempdir().unwrap();
    write_file(
        &root.path().join("scans/study1/series1/img1.json"),
        r#"{"Modality": {"Value": ["CT"]}, "BodyPartExamined": {"Value": ["HEAD"]}}"#,
    );
    write_file(
        &root.path().join("scans/study2/img2.json"),
        r#"{"Modality": {"Value": ["CT"]}, "BodyPartExamined": {"Value": ["CHEST"]}}"#,
    );
    write_file(&root.path().join("scans/notes.txt"), "Modality CT HEAD");

    let (stdout, _, code) = run_dcmfilter(
        &[
            "--keys",
            "Modality, BodyPartExamined",
            "--values",
            "CT, HEAD",
            "scans",
        ],
        root.path(),
    )
    .unwrap();

    assert_eq!(stdout, "scans/study1/series1/img1.json\n");
    assert_eq!(code, Some(0));
}

#[test]
fn test_missing_folder_reports_error_and_exits_normally() {
    let root = tempdir().unwrap();

    let (stdout, _, code) = run_dcmfilter(
        &["--keys", "Modality", "--values", "CT", "missing"],
        root.path(),
    )
    .unwrap();

    assert_eq!(stdout, "Error: 'missing' directory doesn't exist.\n");
    assert_eq!(code, Some(0));
}

#[test]
fn test_folder_without_json_reports_error() {
    let root = tempdir().unwrap();
    write_file(&root.path().join("empty/readme.txt"), "nothing here");

    let (stdout, _, code) = run_dcmfilter(
        &["--keys", "Modality", "--values", "CT", "empty"],
        root.path(),
    )
    .unwrap();

    assert_eq!(stdout, "Error: No json file found under 'empty'.\n");
    assert_eq!(code, Some(0));
}

#[test]
fn test_length_mismatch_reports_error() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join("x")).unwrap();

    let (stdout, _, _) = run_dcmfilter(
        &["--keys", "Modality,Rows", "--values", "CT", "x"],
        root.path(),
    )
    .unwrap();

    assert_eq!(stdout, "Error: Keys and values length don't match.\n");
}

#[test]
fn test_strict_mode_exits_non_zero() {
    let root = tempdir().unwrap();

    let (stdout, _, code) = run_dcmfilter(
        &["--keys", "Modality", "--values", "CT", "--strict", "missing"],
        root.path(),
    )
    .unwrap();

    assert_eq!(stdout, "Error: 'missing' directory doesn't exist.\n");
    assert_eq!(code, Some(1));
}

#[test]
fn test_invalid_json_is_silently_skipped() {
    let root = tempdir().unwrap();
    write_file(&root.path().join("x/bad.json"), "{ Modality: CT ");
    write_file(
        &root.path().join("x/good.json"),
        r#"{"Modality": {"Value": ["CT"]}}"#,
    );

    let (stdout, stderr, code) = run_dcmfilter(
        &["--keys", "Modality", "--values", "CT", "x"],
        root.path(),
    )
    .unwrap();

    assert_eq!(stdout, "x/good.json\n");
    assert!(stderr.is_empty(), "Bad files must not be reported: {}", stderr);
    assert_eq!(code, Some(0));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let root = tempdir().unwrap();
    write_file(
        &root.path().join("x/foo.json"),
        r#"{"Modality": {"Value": ["CT"]}}"#,
    );

    let (stdout, stderr, _) = run_dcmfilter(
        &["--keys", "Modality", "--values", "CT", "--verbose", "x"],
        root.path(),
    )
    .unwrap();

    assert_eq!(stdout, "x/foo.json\n");
    assert!(!stderr.is_empty(), "Verbose mode should log to stderr");
}

#[test]
fn test_missing_required_flag_fails() {
    let root = tempdir().unwrap();

    let (stdout, stderr, code) =
        run_dcmfilter(&["--keys", "Modality", "x"], root.path()).unwrap();

    assert!(stdout.is_empty());
    assert!(stderr.contains("--values"), "Usage error expected: {}", stderr);
    assert_ne!(code, Some(0));
}

#[cfg(unix)]
#[test]
fn test_follow_links_flag_descends_symlinked_directories() {
    let root = tempdir().unwrap();
    write_file(
        &root.path().join("store/ct.json"),
        r#"{"Modality": {"Value": ["CT"]}}"#,
    );
    write_file(&root.path().join("x/mr.json"), r#"{"Modality": {"Value": ["MR"]}}"#);
    std::os::unix::fs::symlink(root.path().join("store"), root.path().join("x/store")).unwrap();

    let (stdout, _, _) = run_dcmfilter(
        &["--keys", "Modality", "--values", "CT", "x"],
        root.path(),
    )
    .unwrap();
    assert!(stdout.is_empty(), "Links are not followed by default: {}", stdout);

    let (stdout, _, _) = run_dcmfilter(
        &["--keys", "Modality", "--values", "CT", "--follow-links", "x"],
        root.path(),
    )
    .unwrap();
    assert_eq!(stdout, "x/store/ct.json\n");
}
