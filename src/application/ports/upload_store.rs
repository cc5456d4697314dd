use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::StoragePath;

#[async_trait]
pub trait UploadStore: Send + Sync {
    /// Persists `data` and returns the filesystem path it was written to.
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<PathBuf, UploadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("upload failed: {0}")]
    UploadFailed(String),
}
