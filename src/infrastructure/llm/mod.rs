mod llm_client_factory;
mod ollama_client;

pub use llm_client_factory::{LlmBackend, LlmClientFactory, LlmClientFactoryError};
pub use ollama_client::OllamaClient;
