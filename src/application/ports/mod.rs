mod embedder;
mod ingestion_step;
mod llm_client;
mod text_operation;
mod text_transform;
mod upload_store;

pub use embedder::{Embedder, EmbedderError};
pub use ingestion_step::{IngestionError, IngestionStep, IngestionStepResolver};
pub use llm_client::{LlmClient, LlmClientError};
pub use text_operation::{TextOperation, TextOperationError};
pub use text_transform::TextTransform;
pub use upload_store::{UploadStore, UploadStoreError};
