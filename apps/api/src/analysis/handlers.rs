//! Axum route handlers for the Resume Analysis API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use uuid::Uuid;

use crate::analysis::pipeline::{analyze_resume, ResumeUpload};
use crate::errors::AppError;
use crate::models::analysis::AnalysisResponse;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const ROLE_FIELD: &str = "jobRole";
const DEFAULT_FILE_NAME: &str = "resume.pdf";

/// POST /api/resume/analyze
///
/// Multipart form: `file` (the PDF) and optional `jobRole`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut file: Option<(String, Option<String>, Bytes)> = None;
    let mut job_role: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .unwrap_or(DEFAULT_FILE_NAME)
                    .to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                file = Some((file_name, content_type, bytes));
            }
            Some(ROLE_FIELD) => job_role = Some(field.text().await?),
            _ => {}
        }
    }

    let (file_name, content_type, bytes) =
        file.ok_or_else(|| AppError::Validation("No resume file uploaded".to_string()))?;

    let response = analyze_resume(
        state.extractor.as_ref(),
        state.generator.as_ref(),
        state.store.as_ref(),
        ResumeUpload {
            file_name,
            content_type,
            bytes,
            job_role,
        },
    )
    .await?;

    Ok(Json(response))
}

/// GET /api/resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state
        .store
        .get_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;
    Ok(Json(record))
}
