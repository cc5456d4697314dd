use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::application::ports::{
    IngestionError, IngestionStepResolver, UploadStore, UploadStoreError,
};
use crate::domain::{IngestedRecord, StoragePath, UploadId};

/// Stores an uploaded file under its own upload directory and converts it to records.
pub struct FileIngestionService {
    resolver: Arc<dyn IngestionStepResolver>,
    upload_store: Arc<dyn UploadStore>,
    max_file_size: u64,
    ingestion_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct IngestionOutcome {
    pub upload_id: UploadId,
    pub file_path: PathBuf,
    pub records: Vec<IngestedRecord>,
}

impl FileIngestionService {
    pub fn new(
        resolver: Arc<dyn IngestionStepResolver>,
        upload_store: Arc<dyn UploadStore>,
        max_file_size: u64,
        ingestion_timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            upload_store,
            max_file_size,
            ingestion_timeout,
        }
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn ingest(
        &self,
        filename: &str,
        data: Bytes,
    ) -> Result<IngestionOutcome, FileIngestionError> {
        let filename = base_filename(filename).ok_or_else(|| {
            FileIngestionError::InvalidInput("a file name is required".to_string())
        })?;

        let extension = Path::new(&filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let step = self.resolver.select(extension)?;

        let size = data.len() as u64;
        if size > self.max_file_size {
            return Err(FileIngestionError::FileTooLarge {
                size,
                limit: self.max_file_size,
            });
        }

        let upload_id = UploadId::new();
        let storage_path = StoragePath::new(&upload_id, &filename);
        let file_path = self.upload_store.store(&storage_path, data).await?;
        tracing::info!(path = %file_path.display(), step = step.name(), "Upload stored");

        let run_path = file_path.clone();
        // A blocking parse cannot be cancelled: on timeout it runs to completion on the
        // blocking pool and its result is discarded.
        let records = tokio::time::timeout(
            self.ingestion_timeout,
            tokio::task::spawn_blocking(move || step.run(&run_path)),
        )
        .await
        .map_err(|_| FileIngestionError::Timeout(self.ingestion_timeout))?
        .map_err(|e| FileIngestionError::TaskFailed(e.to_string()))??;

        tracing::info!(records = records.len(), "File ingestion complete");

        Ok(IngestionOutcome {
            upload_id,
            file_path,
            records,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FileIngestionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("file of {size} bytes exceeds the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },
    #[error(transparent)]
    Ingestion(#[from] IngestionError),
    #[error("storage: {0}")]
    Storage(#[from] UploadStoreError),
    #[error("ingestion timed out after {0:?}")]
    Timeout(Duration),
    #[error("ingestion task failed: {0}")]
    TaskFailed(String),
}

// Final path component only.
fn base_filename(raw: &str) -> Option<String> {
    let name = raw.rsplit(['/', '\\']).next()?.trim();
    if name.is_empty() || name == "." || name == ".." {
        return None;
    }
    Some(name.to_string())
}
