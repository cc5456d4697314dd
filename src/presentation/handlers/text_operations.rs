use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::infrastructure::observability::RequestId;
use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct AvailableOperationsResponse {
    pub available_operations: Vec<&'static str>,
}

#[derive(Deserialize)]
pub struct TextOperationRequest {
    #[serde(default)]
    pub request_id: Option<String>,
    pub text_content: String,
}

#[derive(Serialize)]
pub struct TextOperationResponse {
    pub request_id: String,
    pub operation: String,
    pub duration_ms: f64,
    pub result: Map<String, Value>,
}

pub async fn list_operations_handler(
    State(state): State<AppState>,
) -> Json<AvailableOperationsResponse> {
    Json(AvailableOperationsResponse {
        available_operations: state.operation_registry.list_operations(),
    })
}

#[tracing::instrument(skip(state, request_id, payload))]
pub async fn execute_operation_handler(
    State(state): State<AppState>,
    Path(operation_name): Path<String>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<TextOperationRequest>, JsonRejection>,
) -> Result<Json<TextOperationResponse>, ApiError> {
    let Json(request) = payload?;
    let operation = state.operation_registry.resolve(&operation_name)?;

    let outcome = operation.execute(&request.text_content)?;

    tracing::info!(
        operation = operation.name(),
        duration_ms = outcome.execution_time_ms(),
        text_chars = request.text_content.chars().count(),
        "Text operation executed"
    );

    Ok(Json(TextOperationResponse {
        request_id: request.request_id.unwrap_or(request_id.0),
        operation: operation.name().to_string(),
        duration_ms: outcome.execution_time_ms(),
        result: outcome.into_results(),
    }))
}
