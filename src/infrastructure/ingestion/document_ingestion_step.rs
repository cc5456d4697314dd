use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{IngestionError, IngestionStep};
use crate::domain::{DocumentFormat, IngestedRecord};
use crate::infrastructure::text_processing::normalize_text_span;

use super::document_reader::DocumentReader;
use super::docx_reader::DocxReader;
use super::pdf_reader::PdfReader;
use super::presentation_reader::PresentationReader;
use super::spreadsheet_reader::SpreadsheetReader;

/// Converts rich documents into `{label, text}` records, picking the reader from the
/// file extension.
pub struct DocumentIngestionStep {
    readers: HashMap<DocumentFormat, Arc<dyn DocumentReader>>,
}

impl DocumentIngestionStep {
    pub fn new(readers: Vec<(DocumentFormat, Arc<dyn DocumentReader>)>) -> Self {
        Self {
            readers: readers.into_iter().collect(),
        }
    }
}

impl Default for DocumentIngestionStep {
    fn default() -> Self {
        let pdf: Arc<dyn DocumentReader> = Arc::new(PdfReader);
        let docx: Arc<dyn DocumentReader> = Arc::new(DocxReader);
        let spreadsheet: Arc<dyn DocumentReader> = Arc::new(SpreadsheetReader);
        let presentation: Arc<dyn DocumentReader> = Arc::new(PresentationReader);

        Self::new(vec![
            (DocumentFormat::Pdf, pdf),
            (DocumentFormat::Docx, Arc::clone(&docx)),
            (DocumentFormat::Doc, docx),
            (DocumentFormat::Xlsx, Arc::clone(&spreadsheet)),
            (DocumentFormat::Xls, spreadsheet),
            (DocumentFormat::Pptx, Arc::clone(&presentation)),
            (DocumentFormat::Ppt, presentation),
        ])
    }
}

impl IngestionStep for DocumentIngestionStep {
    fn name(&self) -> &'static str {
        "document"
    }

    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    fn read_file(&self, path: &Path) -> Result<Vec<IngestedRecord>, IngestionError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        let reader = DocumentFormat::from_extension(extension)
            .and_then(|format| self.readers.get(&format))
            .ok_or_else(|| IngestionError::UnsupportedFileType(extension.to_string()))?;

        let records: Vec<IngestedRecord> = reader
            .read(path)?
            .into_iter()
            .filter_map(|span| {
                let text = normalize_text_span(&span.text);
                (!text.is_empty()).then(|| IngestedRecord::document(span.label, text))
            })
            .collect();

        if records.is_empty() {
            return Err(IngestionError::conversion_failed(
                path,
                "no text content found",
            ));
        }

        tracing::info!(record_count = records.len(), "Document conversion complete");
        Ok(records)
    }
}
