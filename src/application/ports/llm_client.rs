use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the raw completion text. When `response_schema` is given the backend is
    /// asked to answer with JSON conforming to it.
    async fn generate_completion(
        &self,
        prompt: &str,
        response_schema: Option<&Value>,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("llm request failed: {0}")]
    RequestFailed(String),
    #[error("llm upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("invalid llm response: {0}")]
    InvalidResponse(String),
}
