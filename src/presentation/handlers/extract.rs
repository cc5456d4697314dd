use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    pub prompt_id: String,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub extracted_information: Value,
}

#[tracing::instrument(skip(state, payload))]
pub async fn extract_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Json<ExtractResponse>, ApiError> {
    let Json(request) = payload?;

    tracing::info!(
        prompt_id = %request.prompt_id,
        input = %sanitize_prompt(&request.text),
        "Extraction requested"
    );

    let extracted_information = state
        .extraction_service
        .generate_text(&request.prompt_id, &request.text)
        .await?;

    Ok(Json(ExtractResponse {
        extracted_information,
    }))
}
