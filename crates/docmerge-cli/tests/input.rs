//! Integration tests for the input module.

use std::path::Path;

use serde_json::json;

use docmerge_cli::input::{InputKind, file_name_of, load_records};
use docmerge_ingest::TableFormat;
use docmerge_model::CellValue;

#[test]
fn tabular_files_are_detected_by_extension() {
    assert_eq!(
        InputKind::from_path(Path::new("roster.csv")).unwrap(),
        InputKind::Tabular(TableFormat::Csv)
    );
    assert_eq!(
        InputKind::from_path(Path::new("data/Roster.XLSX")).unwrap(),
        InputKind::Tabular(TableFormat::Spreadsheet)
    );
    assert_eq!(
        InputKind::from_path(Path::new("legacy.xls")).unwrap(),
        InputKind::Tabular(TableFormat::Spreadsheet)
    );
}

#[test]
fn json_payloads_are_detected() {
    assert_eq!(
        InputKind::from_path(Path::new("payload.json")).unwrap(),
        InputKind::Records
    );
    assert_eq!(
        InputKind::from_path(Path::new("EXPORT.JSON")).unwrap(),
        InputKind::Records
    );
}

#[test]
fn unknown_extensions_are_rejected() {
    assert!(InputKind::from_path(Path::new("notes.txt")).is_err());
    assert!(InputKind::from_path(Path::new("roster")).is_err());
}

#[test]
fn records_payload_loads_as_table() {
    let payload = json!([
        {"Name": "Jane", "Age": 30},
        {"Name": "John", "Age": null}
    ]);
    let bytes = serde_json::to_vec(&payload).unwrap();

    let table = load_records(&bytes).unwrap();

    assert_eq!(table.columns, vec!["Name".to_string(), "Age".to_string()]);
    assert_eq!(table.rows[0].get("Age"), &CellValue::Number(30.0));
    assert!(table.rows[1].get("Age").is_missing());
}

#[test]
fn malformed_payloads_error() {
    assert!(load_records(b"not json at all").is_err());

    let not_an_array = serde_json::to_vec(&json!({"Name": "Jane"})).unwrap();
    assert!(load_records(&not_an_array).is_err());
}

#[test]
fn file_name_requires_a_final_component() {
    assert_eq!(file_name_of(Path::new("out/roster.csv")).unwrap(), "roster.csv");
    assert!(file_name_of(Path::new("/")).is_err());
}
