use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::StoragePath;

/// Writes uploads under a local root directory, creating it on construction.
pub struct LocalUploadStore {
    inner: Arc<LocalFileSystem>,
    root: PathBuf,
}

impl LocalUploadStore {
    pub fn new(root: PathBuf) -> Result<Self, UploadStoreError> {
        std::fs::create_dir_all(&root)?;
        let root = root.canonicalize()?;
        let fs = LocalFileSystem::new_with_prefix(&root)
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            root,
        })
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[async_trait::async_trait]
impl UploadStore for LocalUploadStore {
    async fn store(&self, path: &StoragePath, data: Bytes) -> Result<PathBuf, UploadStoreError> {
        let store_path = StorePath::from(path.as_str());
        let size = data.len();

        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;

        let file_path = self
            .inner
            .path_to_filesystem(&store_path)
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(path = %file_path.display(), size, "Upload stored");
        Ok(file_path)
    }
}
