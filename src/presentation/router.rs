use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    execute_operation_handler, extract_handler, health_handler, list_operations_handler,
    similarity_handler, upload_handler,
};
use crate::presentation::state::AppState;

const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let upload_limit = usize::try_from(state.file_ingestion_service.max_file_size())
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health_handler))
        .route("/text", get(list_operations_handler))
        .route("/text-operations", get(list_operations_handler))
        .route("/text/similarity-score", post(similarity_handler))
        .route("/text/extract", post(extract_handler))
        .route("/text/{operation_name}", post(execute_operation_handler))
        .route(
            "/text-operations/{operation_name}",
            post(execute_operation_handler),
        )
        .route(
            "/files/upload",
            post(upload_handler).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
