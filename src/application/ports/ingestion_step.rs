use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::IngestedRecord;

/// Reads a file on disk into normalized records.
pub trait IngestionStep: Send + Sync {
    fn name(&self) -> &'static str;

    fn read_file(&self, path: &Path) -> Result<Vec<IngestedRecord>, IngestionError>;

    fn run(&self, path: &Path) -> Result<Vec<IngestedRecord>, IngestionError> {
        if path.as_os_str().is_empty() {
            return Err(IngestionError::InvalidInput(
                "file path cannot be empty".to_string(),
            ));
        }

        if !path.exists() {
            return Err(IngestionError::FileNotFound(path.to_path_buf()));
        }

        self.read_file(path)
    }
}

/// Chooses the ingestion step able to read a given file extension.
pub trait IngestionStepResolver: Send + Sync {
    fn select(&self, extension: &str) -> Result<Arc<dyn IngestionStep>, IngestionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to convert {}: {}", path.display(), errors.join("; "))]
    ConversionFailed { path: PathBuf, errors: Vec<String> },
}

impl IngestionError {
    pub fn conversion_failed(path: &Path, error: impl ToString) -> Self {
        Self::ConversionFailed {
            path: path.to_path_buf(),
            errors: vec![error.to_string()],
        }
    }
}
