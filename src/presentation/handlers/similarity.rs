use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::presentation::handlers::ApiError;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SimilarityRequest {
    pub text: Vec<String>,
}

#[derive(Serialize)]
pub struct SimilarityResponse {
    pub similarity_score: f64,
}

#[tracing::instrument(skip(state, payload))]
pub async fn similarity_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimilarityRequest>, JsonRejection>,
) -> Result<Json<SimilarityResponse>, ApiError> {
    let Json(request) = payload?;

    let similarity_score = state
        .similarity_service
        .compute_similarity(&request.text)
        .await?;

    tracing::info!(similarity_score, "Similarity computed");
    Ok(Json(SimilarityResponse { similarity_score }))
}
