use std::sync::Arc;

use crate::application::ports::{IngestionError, IngestionStep, IngestionStepResolver};
use crate::domain::FileKind;

use super::csv_ingestion_step::CsvIngestionStep;
use super::document_ingestion_step::DocumentIngestionStep;

/// Picks the ingestion step for a file extension. A fresh step is built per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngestionStepFactory;

impl IngestionStepResolver for IngestionStepFactory {
    fn select(&self, extension: &str) -> Result<Arc<dyn IngestionStep>, IngestionError> {
        match FileKind::from_extension(extension) {
            Some(FileKind::Csv) => Ok(Arc::new(CsvIngestionStep)),
            Some(FileKind::Document(_)) => Ok(Arc::new(DocumentIngestionStep::default())),
            None => {
                tracing::warn!(extension, "No ingestion step for file type");
                Err(IngestionError::UnsupportedFileType(extension.to_string()))
            }
        }
    }
}
