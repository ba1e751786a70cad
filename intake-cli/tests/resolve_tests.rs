use std::fs;
use tempfile::tempdir;

use intake_cli::commands::{check, resolve};
use intake_core::IntakeLimits;
use serde_json::Value;

fn resolve_to_value(request: &str, limits: &IntakeLimits) -> Value {
    let td = tempdir().unwrap();
    let req_path = td.path().join("request.json");
    let out_path = td.path().join("result.json");
    fs::write(&req_path, request).unwrap();

    resolve::execute(
        req_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        limits,
    )
    .unwrap();

    serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap()
}

#[test]
fn resolve_range_request() {
    let value = resolve_to_value(
        r#"{"mode": "range", "start": "X5", "end": "X5"}"#,
        &IntakeLimits::default(),
    );
    assert_eq!(value["ok"], true);
    assert_eq!(value["serials"], serde_json::json!(["X5"]));
}

#[test]
fn resolve_failure_is_reported_in_result() {
    let value = resolve_to_value(
        r#"{"mode": "range", "start": "A-1-Z", "end": "B-2-Z"}"#,
        &IntakeLimits::default(),
    );
    assert_eq!(value["ok"], false);
    assert!(value["reason"]
        .as_str()
        .unwrap()
        .starts_with("non-numeric parts of the two serials differ"));
}

#[test]
fn resolve_request_can_tighten_cap() {
    let value = resolve_to_value(
        r#"{"mode": "scan", "first": "B1\n", "second": "B5\n", "max_items": 4}"#,
        &IntakeLimits::default(),
    );
    assert_eq!(value["ok"], false);
    assert!(value["reason"].as_str().unwrap().contains("maximum of 4 items"));
}

#[test]
fn resolve_request_cannot_raise_cap() {
    let value = resolve_to_value(
        r#"{"mode": "list", "text": "A\nB\nC", "max_items": 100}"#,
        &IntakeLimits::new(2),
    );
    assert_eq!(value["ok"], false);
}

#[test]
fn resolve_malformed_request_is_error() {
    let td = tempdir().unwrap();
    let req_path = td.path().join("bad.json");
    fs::write(&req_path, r#"{"mode": "teleport"}"#).unwrap();

    let result = resolve::execute(req_path.to_str().unwrap(), None, &IntakeLimits::default());
    assert!(result.is_err());
}

#[test]
fn check_reports_existing_stock() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("candidates.txt");
    let stock_path = td.path().join("stock.txt");
    fs::write(&in_path, "CAM-1\nCAM-2\nCAM-3\n").unwrap();
    fs::write(&stock_path, "CAM-2\nCAM-9\n").unwrap();

    let result = check::execute(
        in_path.to_str().unwrap(),
        stock_path.to_str().unwrap(),
        &IntakeLimits::default(),
    );
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("1 of 3 serials already exist in stock"));
}

#[test]
fn check_passes_new_serials() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("candidates.txt");
    let stock_path = td.path().join("stock.txt");
    fs::write(&in_path, "CAM-1\nCAM-2\n").unwrap();
    fs::write(&stock_path, "cam-1\n\n").unwrap();

    let cleared = check::execute(
        in_path.to_str().unwrap(),
        stock_path.to_str().unwrap(),
        &IntakeLimits::default(),
    )
    .unwrap();
    assert_eq!(cleared, 2);
}
