//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::store::StoreError;
use crate::vocabulary::SYMPTOM_TYPES;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
    /// Subset of submitted symptom names outside the vocabulary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_symptoms: Option<Vec<String>>,
    /// The full recognized vocabulary, echoed so the client can
    /// correct the submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_symptoms: Option<Vec<&'static str>>,
}

/// API-level errors with HTTP status mapping. All are terminal for
/// the request — nothing is retried internally.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Some symptoms are not recognized")]
    UnrecognizedSymptoms { invalid: Vec<String> },
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut invalid_symptoms = None;
        let mut valid_symptoms = None;

        let (status, code, message) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail),
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail),
            ApiError::Conflict(detail) => (StatusCode::CONFLICT, "CONFLICT", detail),
            ApiError::UnrecognizedSymptoms { invalid } => {
                invalid_symptoms = Some(invalid);
                valid_symptoms = Some(SYMPTOM_TYPES.to_vec());
                (
                    StatusCode::BAD_REQUEST,
                    "UNRECOGNIZED_SYMPTOMS",
                    "Some symptoms are not recognized".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code,
                message,
                invalid_symptoms,
                valid_symptoms,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UserNotFound => ApiError::NotFound("User not found".to_string()),
            StoreError::DuplicateEmail | StoreError::EmailTaken => {
                ApiError::Conflict(err.to_string())
            }
            StoreError::UnrecognizedSymptoms { invalid } => {
                ApiError::UnrecognizedSymptoms { invalid }
            }
            StoreError::LockPoisoned => ApiError::Internal("lock poisoned".to_string()),
        }
    }
}
