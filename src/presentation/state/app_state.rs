use std::sync::Arc;

use crate::application::services::{
    ExtractionService, FileIngestionService, OperationRegistry, SimilarityService,
};

#[derive(Clone)]
pub struct AppState {
    pub operation_registry: Arc<OperationRegistry>,
    pub similarity_service: Arc<SimilarityService>,
    pub extraction_service: Arc<ExtractionService>,
    pub file_ingestion_service: Arc<FileIngestionService>,
}
