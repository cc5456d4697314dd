use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{Embedder, LlmClient};
use crate::infrastructure::llm::OllamaClient;
use crate::presentation::config::{LlmProvider, LlmSettings};

pub struct LlmClientFactory;

/// Completion and embedding handles backed by the same provider.
#[derive(Clone)]
pub struct LlmBackend {
    pub llm_client: Arc<dyn LlmClient>,
    pub embedder: Arc<dyn Embedder>,
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("llm client initialization failed: {0}")]
    InitializationFailed(String),
}

impl LlmClientFactory {
    pub fn create(settings: &LlmSettings) -> Result<LlmBackend, LlmClientFactoryError> {
        match settings.provider {
            LlmProvider::Ollama => {
                tracing::info!(
                    base_url = %settings.base_url,
                    model = %settings.model,
                    embedding_model = settings.embedding_model.as_deref().unwrap_or(&settings.model),
                    "Creating Ollama client"
                );
                let client = OllamaClient::new(
                    settings.base_url.clone(),
                    settings.model.clone(),
                    settings.embedding_model.clone(),
                    Duration::from_secs(settings.timeout_secs),
                )
                .map_err(|e| LlmClientFactoryError::InitializationFailed(e.to_string()))?;

                let client = Arc::new(client);
                Ok(LlmBackend {
                    llm_client: client.clone(),
                    embedder: client,
                })
            }
        }
    }
}
