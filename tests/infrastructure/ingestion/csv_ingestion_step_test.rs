use std::path::Path;

use serde_json::json;

use textops::application::ports::{IngestionError, IngestionStep};
use textops::domain::IngestedRecord;
use textops::infrastructure::ingestion::CsvIngestionStep;

use super::fixtures::write_file;

fn rows(records: Vec<IngestedRecord>) -> Vec<serde_json::Value> {
    records
        .into_iter()
        .map(|r| serde_json::to_value(r).unwrap())
        .collect()
}

#[test]
fn given_csv_with_mixed_cells_when_reading_then_values_typed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "people.csv",
        b"name,age,score,active,note\nAda,36,9.5,true,\nBob,41,7,FALSE,NaN\n",
    );

    let records = CsvIngestionStep.run(&path).unwrap();

    assert_eq!(
        rows(records),
        vec![
            json!({"name": "Ada", "age": 36, "score": 9.5, "active": true, "note": null}),
            json!({"name": "Bob", "age": 41, "score": 7.0, "active": false, "note": null}),
        ]
    );
}

#[test]
fn given_blank_and_repeated_headers_when_reading_then_columns_disambiguated() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "dupes.csv", b"a,,a\n1,2,3\n");

    let records = CsvIngestionStep.run(&path).unwrap();

    assert_eq!(
        rows(records),
        vec![json!({"a": 1, "Unnamed: 1": 2, "a.1": 3})]
    );
}

#[test]
fn given_header_only_csv_when_reading_then_no_records() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "empty.csv", b"a,b\n");

    assert!(CsvIngestionStep.run(&path).unwrap().is_empty());
}

#[test]
fn given_mixed_column_when_reading_then_column_kept_as_text() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "codes.csv", b"code,qty\n007,1\nabc,\n");

    let records = CsvIngestionStep.run(&path).unwrap();

    assert_eq!(
        rows(records),
        vec![
            json!({"code": "007", "qty": 1}),
            json!({"code": "abc", "qty": null}),
        ]
    );
}

#[test]
fn given_short_row_when_reading_then_missing_cells_null() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "short.csv", b"a,b\n1,2\n3\n");

    let records = CsvIngestionStep.run(&path).unwrap();

    assert_eq!(
        rows(records),
        vec![json!({"a": 1, "b": 2}), json!({"a": 3, "b": null})]
    );
}

#[test]
fn given_row_with_extra_fields_when_reading_then_returns_conversion_failed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_file(dir.path(), "ragged.csv", b"a,b\n1,2\n3,4,5\n");

    let result = CsvIngestionStep.run(&path);

    assert!(matches!(
        result,
        Err(IngestionError::ConversionFailed { errors, .. }) if errors.len() == 1
    ));
}

#[test]
fn given_missing_file_when_reading_then_returns_file_not_found() {
    let result = CsvIngestionStep.run(Path::new("/definitely/not/here.csv"));

    assert!(matches!(result, Err(IngestionError::FileNotFound(_))));
}

#[test]
fn given_empty_path_when_reading_then_returns_invalid_input() {
    let result = CsvIngestionStep.run(Path::new(""));

    assert!(matches!(result, Err(IngestionError::InvalidInput(_))));
}
