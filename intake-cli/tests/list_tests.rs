use std::fs;
use tempfile::tempdir;

use intake_cli::{commands::list, OutputFormat};
use intake_core::IntakeLimits;

fn write_file<P: AsRef<std::path::Path>>(p: P, s: &str) {
    fs::write(p, s.as_bytes()).unwrap();
}

#[test]
fn list_normalizes_entries() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.txt");
    let out_path = td.path().join("out.txt");

    write_file(&in_path, "  LAP-01\r\n\nLAP-02  \nLAP-07\n");

    list::execute(
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        OutputFormat::Lines,
        &IntakeLimits::default(),
    )
    .unwrap();

    let content = fs::read_to_string(&out_path).unwrap();
    assert_eq!(content, "LAP-01\nLAP-02\nLAP-07");
}

#[test]
fn list_rejects_duplicates() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("dup.txt");
    write_file(&in_path, "A1\nB1\nA1\n");

    let result = list::execute(
        in_path.to_str().unwrap(),
        None,
        OutputFormat::Lines,
        &IntakeLimits::default(),
    );
    assert!(result.unwrap_err().to_string().contains("duplicate serial in list: A1"));
}

#[test]
fn list_rejects_empty_input() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("empty.txt");
    write_file(&in_path, "\n\n");

    let result = list::execute(
        in_path.to_str().unwrap(),
        None,
        OutputFormat::Json,
        &IntakeLimits::default(),
    );
    assert!(result.is_err());
}

#[test]
fn list_missing_file_is_error() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("nope.txt");

    let result = list::execute(
        in_path.to_str().unwrap(),
        None,
        OutputFormat::Lines,
        &IntakeLimits::default(),
    );
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to read input file"));
}
