mod embedding;
mod file_kind;
mod ingested_record;
mod operation_result;
mod prompt_template;
mod storage_path;
mod upload_id;

pub use embedding::{DegenerateEmbedding, Embedding};
pub use file_kind::{DocumentFormat, FileKind};
pub use ingested_record::{DocItemLabel, IngestedRecord};
pub use operation_result::OperationResult;
pub use prompt_template::PromptTemplate;
pub use storage_path::StoragePath;
pub use upload_id::UploadId;
