use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::application::ports::{IngestionError, IngestionStep};
use crate::domain::IngestedRecord;

const MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "#N/A",
    "<NA>",
];

/// Reads a headed CSV file into one JSON object per row with cell types inferred
/// per column.
#[derive(Debug, Default)]
pub struct CsvIngestionStep;

impl IngestionStep for CsvIngestionStep {
    fn name(&self) -> &'static str {
        "csv"
    }

    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    fn read_file(&self, path: &Path) -> Result<Vec<IngestedRecord>, IngestionError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| IngestionError::conversion_failed(path, e))?;

        let headers = column_names(
            reader
                .headers()
                .map_err(|e| IngestionError::conversion_failed(path, e))?,
        );

        let mut rows = Vec::new();
        let mut errors = Vec::new();

        // Short rows are padded with nulls; only extra fields are rejected.
        for (index, row) in reader.records().enumerate() {
            match row {
                Ok(row) if row.len() > headers.len() => errors.push(format!(
                    "row {}: expected at most {} fields, found {}",
                    index + 1,
                    headers.len(),
                    row.len()
                )),
                Ok(row) => rows.push(row),
                Err(e) => errors.push(format!("row {}: {e}", index + 1)),
            }
        }

        if !errors.is_empty() {
            return Err(IngestionError::ConversionFailed {
                path: path.to_path_buf(),
                errors,
            });
        }

        let column_types: Vec<ColumnType> = (0..headers.len())
            .map(|column| ColumnType::infer(rows.iter().filter_map(|row| row.get(column))))
            .collect();

        let records: Vec<IngestedRecord> = rows
            .iter()
            .map(|row| {
                let fields: Map<String, Value> = headers
                    .iter()
                    .zip(&column_types)
                    .enumerate()
                    .map(|(column, (name, column_type))| {
                        let value = row
                            .get(column)
                            .map_or(Value::Null, |raw| column_type.convert(raw));
                        (name.clone(), value)
                    })
                    .collect();
                IngestedRecord::Row(fields)
            })
            .collect();

        tracing::info!(
            row_count = records.len(),
            column_count = headers.len(),
            "CSV conversion complete"
        );
        Ok(records)
    }
}

/// Blank headers become `Unnamed: <index>`; repeated headers get a `.<n>` suffix.
fn column_names(headers: &csv::StringRecord) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());
    for (index, header) in headers.iter().enumerate() {
        let base = match header.trim() {
            "" => format!("Unnamed: {index}"),
            trimmed => trimmed.to_string(),
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while names.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }
        names.push(candidate);
    }
    names
}

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell.trim())
}

fn is_boolean(cell: &str) -> bool {
    cell.eq_ignore_ascii_case("true") || cell.eq_ignore_ascii_case("false")
}

fn parse_finite(cell: &str) -> Option<Number> {
    cell.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Type shared by every non-missing cell of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnType {
    Integer,
    Float,
    Boolean,
    Text,
}

impl ColumnType {
    fn infer<'a>(cells: impl Iterator<Item = &'a str>) -> Self {
        let present: Vec<&str> = cells
            .filter(|cell| !is_missing(cell))
            .map(str::trim)
            .collect();

        if present.iter().all(|cell| cell.parse::<i64>().is_ok()) {
            Self::Integer
        } else if present.iter().all(|cell| parse_finite(cell).is_some()) {
            Self::Float
        } else if present.iter().all(|cell| is_boolean(cell)) {
            Self::Boolean
        } else {
            Self::Text
        }
    }

    fn convert(self, raw: &str) -> Value {
        if is_missing(raw) {
            return Value::Null;
        }

        let trimmed = raw.trim();
        match self {
            Self::Integer => trimmed
                .parse::<i64>()
                .map_or_else(|_| Value::String(raw.to_string()), |int| Value::Number(int.into())),
            Self::Float => parse_finite(trimmed)
                .map_or_else(|| Value::String(raw.to_string()), Value::Number),
            Self::Boolean => Value::Bool(trimmed.eq_ignore_ascii_case("true")),
            Self::Text => Value::String(raw.to_string()),
        }
    }
}
