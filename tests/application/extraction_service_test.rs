use std::sync::Arc;

use serde_json::json;

use textops::application::services::{
    ExtractionError, ExtractionService, JOB_DESCRIPTION_PROMPT_ID, PromptCatalog,
};

use super::mocks::MockLlmClient;

const VALID_RESPONSE: &str = r#"{
    "company": "Acme",
    "role": "Backend Engineer",
    "skills": { "technical": ["Rust", "SQL"], "soft": ["communication"] },
    "education": ["BSc Computer Science"]
}"#;

#[tokio::test]
async fn given_valid_json_response_when_extracting_then_parsed_value_returned() {
    let llm = Arc::new(MockLlmClient::replying(VALID_RESPONSE));
    let service = ExtractionService::new(llm.clone(), PromptCatalog::default());

    let extracted = service
        .generate_text(JOB_DESCRIPTION_PROMPT_ID, "We are hiring a Rust engineer")
        .await
        .unwrap();

    assert_eq!(extracted["company"], "Acme");
    assert_eq!(extracted["skills"]["technical"], json!(["Rust", "SQL"]));
}

#[tokio::test]
async fn given_extraction_when_prompting_then_rendered_prompt_and_schema_sent() {
    let llm = Arc::new(MockLlmClient::replying(VALID_RESPONSE));
    let service = ExtractionService::new(llm.clone(), PromptCatalog::default());

    service
        .generate_text(JOB_DESCRIPTION_PROMPT_ID, "Hiring: platform engineer")
        .await
        .unwrap();

    let prompts = llm.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    let (prompt, schema) = &prompts[0];
    assert!(prompt.contains("Hiring: platform engineer"));
    assert_eq!(
        schema.as_ref().unwrap()["required"],
        json!(["company", "role", "skills"])
    );
}

#[tokio::test]
async fn given_non_json_response_when_extracting_then_returns_malformed_response() {
    let llm = Arc::new(MockLlmClient::replying("Sure! Here are the skills: Rust"));
    let service = ExtractionService::new(llm, PromptCatalog::default());

    let result = service
        .generate_text(JOB_DESCRIPTION_PROMPT_ID, "anything")
        .await;

    assert!(matches!(result, Err(ExtractionError::MalformedResponse(_))));
}

#[tokio::test]
async fn given_response_missing_required_field_when_extracting_then_returns_malformed_response() {
    let llm = Arc::new(MockLlmClient::replying(
        r#"{"company": "Acme", "skills": {"technical": [], "soft": []}}"#,
    ));
    let service = ExtractionService::new(llm, PromptCatalog::default());

    let result = service
        .generate_text(JOB_DESCRIPTION_PROMPT_ID, "anything")
        .await;

    assert!(matches!(result, Err(ExtractionError::MalformedResponse(msg)) if msg.contains("role")));
}

#[tokio::test]
async fn given_response_missing_nested_field_when_extracting_then_returns_malformed_response() {
    let llm = Arc::new(MockLlmClient::replying(
        r#"{"company": "Acme", "role": "Dev", "skills": {"technical": ["Go"]}}"#,
    ));
    let service = ExtractionService::new(llm, PromptCatalog::default());

    let result = service
        .generate_text(JOB_DESCRIPTION_PROMPT_ID, "anything")
        .await;

    assert!(
        matches!(result, Err(ExtractionError::MalformedResponse(msg)) if msg.contains("skills.soft"))
    );
}

#[tokio::test]
async fn given_unknown_prompt_id_when_extracting_then_returns_unknown_prompt() {
    let llm = Arc::new(MockLlmClient::replying(VALID_RESPONSE));
    let service = ExtractionService::new(llm.clone(), PromptCatalog::default());

    let result = service.generate_text("cover-letter", "anything").await;

    assert!(matches!(result, Err(ExtractionError::UnknownPrompt(id)) if id == "cover-letter"));
    assert!(llm.prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_upstream_failure_when_extracting_then_returns_completion_error() {
    let service = ExtractionService::new(
        Arc::new(MockLlmClient::failing(503)),
        PromptCatalog::default(),
    );

    let result = service
        .generate_text(JOB_DESCRIPTION_PROMPT_ID, "anything")
        .await;

    assert!(matches!(result, Err(ExtractionError::Completion(_))));
}
