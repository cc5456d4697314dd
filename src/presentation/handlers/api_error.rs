use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{
    EmbedderError, IngestionError, LlmClientError, TextOperationError,
};
use crate::application::services::{
    ExtractionError, FileIngestionError, RegistryError, SimilarityError,
};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error surfaced at the HTTP boundary as `{"error": message}` with a mapped status.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), error = %self.message, "Request failed");
        } else {
            tracing::warn!(status = self.status.as_u16(), error = %self.message, "Request rejected");
        }

        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        Self::bad_request(format!("failed to read multipart body: {error}"))
    }
}

impl From<RegistryError> for ApiError {
    fn from(error: RegistryError) -> Self {
        let status = match error {
            RegistryError::UnknownOperation(_) => StatusCode::NOT_FOUND,
            RegistryError::DuplicateOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, error.to_string())
    }
}

impl From<TextOperationError> for ApiError {
    fn from(error: TextOperationError) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
    }
}

impl From<EmbedderError> for ApiError {
    fn from(error: EmbedderError) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, error.to_string())
    }
}

impl From<LlmClientError> for ApiError {
    fn from(error: LlmClientError) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, error.to_string())
    }
}

impl From<SimilarityError> for ApiError {
    fn from(error: SimilarityError) -> Self {
        match error {
            SimilarityError::InvalidInput(_) => Self::bad_request(error.to_string()),
            SimilarityError::Embedding(inner) => inner.into(),
            SimilarityError::DegenerateInput(_) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, error.to_string())
            }
        }
    }
}

impl From<ExtractionError> for ApiError {
    fn from(error: ExtractionError) -> Self {
        match error {
            ExtractionError::UnknownPrompt(_) => Self::new(StatusCode::NOT_FOUND, error.to_string()),
            ExtractionError::Completion(inner) => inner.into(),
            ExtractionError::MalformedResponse(_) => {
                Self::new(StatusCode::BAD_GATEWAY, error.to_string())
            }
        }
    }
}

impl From<IngestionError> for ApiError {
    fn from(error: IngestionError) -> Self {
        let status = match error {
            IngestionError::InvalidInput(_) | IngestionError::UnsupportedFileType(_) => {
                StatusCode::BAD_REQUEST
            }
            IngestionError::ConversionFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            IngestionError::FileNotFound(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, error.to_string())
    }
}

impl From<FileIngestionError> for ApiError {
    fn from(error: FileIngestionError) -> Self {
        match error {
            FileIngestionError::Ingestion(inner) => inner.into(),
            FileIngestionError::InvalidInput(_) | FileIngestionError::FileTooLarge { .. } => {
                Self::bad_request(error.to_string())
            }
            FileIngestionError::Timeout(_) => {
                Self::new(StatusCode::GATEWAY_TIMEOUT, error.to_string())
            }
            FileIngestionError::Storage(_) | FileIngestionError::TaskFailed(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
            }
        }
    }
}
