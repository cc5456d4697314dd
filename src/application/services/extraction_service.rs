use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::application::services::PromptCatalog;

pub struct ExtractionService {
    llm_client: Arc<dyn LlmClient>,
    prompts: PromptCatalog,
}

impl ExtractionService {
    pub fn new(llm_client: Arc<dyn LlmClient>, prompts: PromptCatalog) -> Self {
        Self {
            llm_client,
            prompts,
        }
    }

    /// Renders the prompt, asks the LLM for schema-shaped JSON and parses the answer.
    #[tracing::instrument(skip(self, input_text))]
    pub async fn generate_text(
        &self,
        prompt_id: &str,
        input_text: &str,
    ) -> Result<Value, ExtractionError> {
        let prompt = self
            .prompts
            .get(prompt_id)
            .ok_or_else(|| ExtractionError::UnknownPrompt(prompt_id.to_string()))?;

        let rendered = prompt.render(input_text);
        let raw = self
            .llm_client
            .generate_completion(&rendered, Some(&prompt.response_schema))
            .await?;

        let parsed: Value = serde_json::from_str(&raw)
            .map_err(|e| ExtractionError::MalformedResponse(format!("not valid JSON: {e}")))?;

        check_required_fields(&prompt.response_schema, &parsed, "$")
            .map_err(ExtractionError::MalformedResponse)?;

        tracing::info!(prompt_id, "Structured extraction complete");
        Ok(parsed)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unknown prompt: {0}")]
    UnknownPrompt(String),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

// Walks object schemas and checks that every `required` property is present.
fn check_required_fields(schema: &Value, value: &Value, at: &str) -> Result<(), String> {
    if schema.get("type").and_then(Value::as_str) != Some("object") {
        return Ok(());
    }

    let object = value
        .as_object()
        .ok_or_else(|| format!("expected an object at {at}"))?;

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for field in required.iter().filter_map(Value::as_str) {
            if !object.contains_key(field) {
                return Err(format!("missing required field {at}.{field}"));
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (name, property_schema) in properties {
            if let Some(child) = object.get(name) {
                check_required_fields(property_schema, child, &format!("{at}.{name}"))?;
            }
        }
    }

    Ok(())
}
