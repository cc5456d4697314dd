use async_trait::async_trait;

use crate::domain::Embedding;

#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EmbedderError {
    #[error("embedding request failed: {0}")]
    RequestFailed(String),
    #[error("embedding upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("invalid embedding response: {0}")]
    InvalidResponse(String),
}
