use std::sync::Arc;

use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::DegenerateEmbedding;

const MIN_TEXTS: usize = 2;

pub struct SimilarityService {
    embedder: Arc<dyn Embedder>,
}

impl SimilarityService {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Cosine similarity between the embeddings of the first two texts.
    #[tracing::instrument(skip(self, texts), fields(text_count = texts.len()))]
    pub async fn compute_similarity(&self, texts: &[String]) -> Result<f64, SimilarityError> {
        if texts.len() < MIN_TEXTS {
            return Err(SimilarityError::InvalidInput(format!(
                "at least {MIN_TEXTS} texts are required for similarity computation, got {}",
                texts.len()
            )));
        }

        if texts.len() > MIN_TEXTS {
            tracing::debug!(
                ignored = texts.len() - MIN_TEXTS,
                "Only the first two texts are scored"
            );
        }

        let (first, second) = tokio::try_join!(
            self.embedder.embed(&texts[0]),
            self.embedder.embed(&texts[1]),
        )?;

        let score = first.cosine_similarity(&second)?;
        tracing::debug!(score, dimensions = first.dimensions(), "Similarity computed");

        Ok(score)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SimilarityError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("degenerate input: {0}")]
    DegenerateInput(#[from] DegenerateEmbedding),
}
