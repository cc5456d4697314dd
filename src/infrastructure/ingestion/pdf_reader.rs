use std::path::Path;
use std::sync::LazyLock;

use pdf_oxide::PdfDocument;
use regex::Regex;

use crate::application::ports::IngestionError;
use crate::domain::DocItemLabel;

use super::document_reader::{DocumentReader, TextSpan};

static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\r?\n").unwrap());

/// Extracts page text and splits it into paragraphs on blank lines.
#[derive(Debug, Default)]
pub struct PdfReader;

impl DocumentReader for PdfReader {
    fn read(&self, path: &Path) -> Result<Vec<TextSpan>, IngestionError> {
        let mut doc = PdfDocument::open(path).map_err(|e| {
            IngestionError::conversion_failed(path, format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            IngestionError::conversion_failed(path, format!("failed to read page count: {e}"))
        })?;

        let mut spans = Vec::new();
        let mut errors = Vec::new();

        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) => spans.extend(
                    split_paragraphs(&text)
                        .into_iter()
                        .map(|paragraph| TextSpan::new(DocItemLabel::Text, paragraph)),
                ),
                Err(e) => errors.push(format!("page {}: {e}", page_index + 1)),
            }
        }

        if !errors.is_empty() {
            return Err(IngestionError::ConversionFailed {
                path: path.to_path_buf(),
                errors,
            });
        }

        tracing::debug!(page_count, span_count = spans.len(), "PDF pages extracted");
        Ok(spans)
    }
}

/// Splits extracted page text on blank lines, dropping whitespace-only paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    BLANK_LINE
        .split(text)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .collect()
}
