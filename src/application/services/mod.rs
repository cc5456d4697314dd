mod extraction_service;
mod file_ingestion_service;
mod operation_registry;
mod pipeline;
mod prompt_catalog;
mod similarity_service;
mod token_counter;

pub use extraction_service::{ExtractionError, ExtractionService};
pub use file_ingestion_service::{FileIngestionError, FileIngestionService, IngestionOutcome};
pub use operation_registry::{OperationDescriptor, OperationRegistry, RegistryError};
pub use pipeline::Pipeline;
pub use prompt_catalog::{JOB_DESCRIPTION_PROMPT_ID, PromptCatalog};
pub use similarity_service::{SimilarityError, SimilarityService};
pub use token_counter::count_tokens;
