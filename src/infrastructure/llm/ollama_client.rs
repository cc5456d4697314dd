use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{Embedder, EmbedderError, LlmClient, LlmClientError};
use crate::domain::Embedding;

/// Talks to an Ollama-compatible `/generate` and `/embed` API.
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    embedding_model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'a Value>,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

enum Failure {
    Request(String),
    Upstream { status: u16, body: String },
    Decode(String),
}

impl From<Failure> for LlmClientError {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::Request(msg) => Self::RequestFailed(msg),
            Failure::Upstream { status, body } => Self::Upstream { status, body },
            Failure::Decode(msg) => Self::InvalidResponse(msg),
        }
    }
}

impl From<Failure> for EmbedderError {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::Request(msg) => Self::RequestFailed(msg),
            Failure::Upstream { status, body } => Self::Upstream { status, body },
            Failure::Decode(msg) => Self::InvalidResponse(msg),
        }
    }
}

impl OllamaClient {
    /// `embedding_model` falls back to `model` when not set.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        embedding_model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let model = model.into();
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            embedding_model: embedding_model.unwrap_or_else(|| model.clone()),
            model,
        })
    }

    async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, Failure>
    where
        B: Serialize + ?Sized,
        R: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Failure::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "LLM backend returned an error");
            return Err(Failure::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| Failure::Decode(e.to_string()))
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    #[tracing::instrument(skip(self, prompt, response_schema), fields(model = %self.model))]
    async fn generate_completion(
        &self,
        prompt: &str,
        response_schema: Option<&Value>,
    ) -> Result<String, LlmClientError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            format: response_schema,
            stream: false,
        };

        let response: GenerateResponse = self.post("generate", &request).await?;
        Ok(response.response)
    }
}

#[async_trait]
impl Embedder for OllamaClient {
    #[tracing::instrument(skip(self, text), fields(model = %self.embedding_model))]
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError> {
        let request = EmbedRequest {
            model: &self.embedding_model,
            input: text,
        };

        let response: EmbedResponse = self.post("embed", &request).await?;

        let mut rows = response.embeddings.into_iter();
        match (rows.next(), rows.next()) {
            (Some(values), None) if !values.is_empty() => Ok(Embedding::new(values)),
            _ => Err(EmbedderError::InvalidResponse(
                "expected exactly one embedding vector".to_string(),
            )),
        }
    }
}
