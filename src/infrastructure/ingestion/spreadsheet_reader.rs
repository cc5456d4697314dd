use std::path::Path;

use calamine::{Data, Reader};

use crate::application::ports::IngestionError;
use crate::domain::DocItemLabel;

use super::document_reader::{DocumentReader, TextSpan};

/// One `section_header` span per sheet followed by a `table` span per non-empty row.
#[derive(Debug, Default)]
pub struct SpreadsheetReader;

impl DocumentReader for SpreadsheetReader {
    fn read(&self, path: &Path) -> Result<Vec<TextSpan>, IngestionError> {
        let mut workbook = calamine::open_workbook_auto(path).map_err(|e| {
            IngestionError::conversion_failed(path, format!("failed to open workbook: {e}"))
        })?;

        let mut spans = Vec::new();
        let mut errors = Vec::new();

        for sheet_name in workbook.sheet_names().to_vec() {
            let range = match workbook.worksheet_range(&sheet_name) {
                Ok(range) => range,
                Err(e) => {
                    errors.push(format!("sheet {sheet_name}: {e}"));
                    continue;
                }
            };

            spans.push(TextSpan::new(DocItemLabel::SectionHeader, sheet_name.clone()));

            for row in range.rows() {
                let cells: Vec<String> = row.iter().map(cell_text).collect();
                if cells.iter().all(|c| c.is_empty()) {
                    continue;
                }
                spans.push(TextSpan::new(DocItemLabel::Table, cells.join(" | ")));
            }
        }

        if !errors.is_empty() {
            return Err(IngestionError::ConversionFailed {
                path: path.to_path_buf(),
                errors,
            });
        }

        Ok(spans)
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        _ => String::new(),
    }
}
