use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::analysis::extractor::ExtractionError;
use crate::analysis::validation::SchemaViolation;

pub const UNREADABLE_PDF_MESSAGE: &str = "Could not extract text from the PDF. Please ensure the file contains text content and is not password-protected.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Model-call failures have no variant: they are absorbed by the heuristic
/// fallback and never reach a caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Wrong media type, oversize upload, missing file, malformed form.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    SchemaViolation(#[from] SchemaViolation),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::Validation("File size exceeds 5MB limit".to_string());
        }
        AppError::Validation(e.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details): (StatusCode, &str, String, Option<Value>) =
            match &self {
                AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), None),
                AppError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                    None,
                ),
                AppError::Extraction(e) => {
                    tracing::warn!("Extraction failed: {e}");
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        "EXTRACTION_FAILED",
                        UNREADABLE_PDF_MESSAGE.to_string(),
                        None,
                    )
                }
                AppError::SchemaViolation(v) => {
                    tracing::error!("Schema violation: {v}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "SCHEMA_VIOLATION",
                        "Invalid response format from analysis service".to_string(),
                        Some(json!(v.fields)),
                    )
                }
                AppError::Database(e) => {
                    tracing::error!("Database error: {e}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "DATABASE_ERROR",
                        "A database error occurred".to_string(),
                        None,
                    )
                }
                AppError::Internal(e) => {
                    tracing::error!("Internal error: {e:?}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        e.to_string(),
                        None,
                    )
                }
            };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let Some(details) = details {
            error["details"] = details;
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
