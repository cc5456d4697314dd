use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::domain::IngestedRecord;
use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Serialize)]
pub struct UploadResponse {
    pub request_id: String,
    pub file_path: String,
    pub file_content: Vec<IngestedRecord>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;

        tracing::debug!(filename = %filename, size = data.len(), "Processing file upload");

        let outcome = state.file_ingestion_service.ingest(&filename, data).await?;

        return Ok(Json(UploadResponse {
            request_id: outcome.upload_id.as_uuid().to_string(),
            file_path: outcome.file_path.display().to_string(),
            file_content: outcome.records,
        }));
    }

    Err(ApiError::bad_request("No file uploaded"))
}
