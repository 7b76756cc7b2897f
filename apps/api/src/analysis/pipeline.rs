//! The inbound `analyze` operation: upload checks → extraction → generation →
//! validation → persistence.
//!
//! Each request runs these steps sequentially and owns all of its data; the
//! store is the only shared state.

use bytes::Bytes;
use chrono::Utc;
use tracing::info;

use crate::analysis::extractor::TextExtractor;
use crate::analysis::generator::generate_analysis;
use crate::analysis::keywords::JobRole;
use crate::analysis::validation::validate_analysis;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::analysis::AnalysisResponse;
use crate::models::resume::NewResume;
use crate::storage::ResumeStore;

pub const PDF_MIME: &str = "application/pdf";
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// One uploaded resume as received from the form.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
    /// Raw form value; `None` when the form omitted the field.
    pub job_role: Option<String>,
}

/// Rejects uploads that must never reach the extractor.
pub fn check_upload(upload: &ResumeUpload) -> Result<(), AppError> {
    let is_pdf = upload
        .content_type
        .as_deref()
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(PDF_MIME));
    if !is_pdf {
        return Err(AppError::Validation(
            "Only PDF files are accepted".to_string(),
        ));
    }
    if upload.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File size exceeds 5MB limit".to_string(),
        ));
    }
    Ok(())
}

/// Runs the full analysis for one upload and persists the result.
pub async fn analyze_resume(
    extractor: &dyn TextExtractor,
    generator: &dyn TextGenerator,
    store: &dyn ResumeStore,
    upload: ResumeUpload,
) -> Result<AnalysisResponse, AppError> {
    check_upload(&upload)?;

    let role = JobRole::parse(upload.job_role.as_deref().unwrap_or_default());
    info!(
        "Analyzing '{}' ({} bytes) for role '{}'",
        upload.file_name,
        upload.bytes.len(),
        role.as_str()
    );

    let resume_text = extractor.extract(upload.bytes).await?;

    let generated = generate_analysis(generator, &resume_text, role).await;
    let using_fallback = generated.using_fallback();

    let analysis = validate_analysis(&generated.payload)?;
    let serialized = serde_json::to_string(&analysis)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize analysis: {e}")))?;

    let record = store
        .create_resume(NewResume {
            job_role: upload.job_role.as_ref().map(|_| role.as_str().to_string()),
            file_name: upload.file_name,
            original_text: resume_text,
            analysis: serialized,
            created_at: Utc::now(),
        })
        .await?;

    info!(
        "Stored analysis {} (score {}, fallback: {})",
        record.id, analysis.score, using_fallback
    );

    Ok(AnalysisResponse {
        analysis,
        using_fallback,
        resume_id: record.id,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::analysis::extractor::ExtractionError;
    use crate::analysis::fallback::FALLBACK_SUMMARY;
    use crate::analysis::generator::tests::{model_reply, StubGenerator};
    use crate::models::analysis::ScoreLabel;
    use crate::storage::MemoryResumeStore;

    /// Extractor stub: fixed text, or `NoText` when `None`.
    pub(crate) struct StubExtractor {
        text: Option<String>,
        pub calls: AtomicUsize,
    }

    impl StubExtractor {
        pub(crate) fn with_text(text: &str) -> Self {
            Self {
                text: Some(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn unreadable() -> Self {
            Self {
                text: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl TextExtractor for StubExtractor {
        async fn extract(&self, _bytes: Bytes) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.text.clone().ok_or(AppError::Extraction(ExtractionError::NoText))
        }
    }

    const RESUME_TEXT: &str = "Jane Doe\nFrontend Engineer\n\n• Built React apps for 2M users";

    fn pdf_upload(job_role: Option<&str>) -> ResumeUpload {
        ResumeUpload {
            file_name: "jane.pdf".to_string(),
            content_type: Some(PDF_MIME.to_string()),
            bytes: Bytes::from_static(b"%PDF-1.4 stub"),
            job_role: job_role.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_model_success_is_persisted() {
        let extractor = StubExtractor::with_text(RESUME_TEXT);
        let generator = StubGenerator::replying(model_reply(72, "Good"));
        let store = MemoryResumeStore::new();

        let response = analyze_resume(&extractor, &generator, &store, pdf_upload(Some("frontend")))
            .await
            .unwrap();

        assert_eq!(response.analysis.score, 72);
        assert_eq!(response.analysis.score_label, ScoreLabel::Good);
        assert!(!response.using_fallback);

        let record = store.get_resume(response.resume_id).await.unwrap().unwrap();
        assert_eq!(record.job_role.as_deref(), Some("frontend"));
        assert_eq!(record.file_name, "jane.pdf");
        assert_eq!(record.original_text, RESUME_TEXT);
        let stored: serde_json::Value = serde_json::from_str(&record.analysis).unwrap();
        assert_eq!(stored["score"], 72);
        assert!(stored.get("usingFallback").is_none());
    }

    #[tokio::test]
    async fn test_generation_failure_uses_fallback() {
        let extractor = StubExtractor::with_text(RESUME_TEXT);
        let generator = StubGenerator::failing();
        let store = MemoryResumeStore::new();

        let response = analyze_resume(&extractor, &generator, &store, pdf_upload(Some("frontend")))
            .await
            .unwrap();

        assert!(response.using_fallback);
        assert_eq!(response.analysis.summary.as_deref(), Some(FALLBACK_SUMMARY));
        assert!(response.analysis.keywords_found.contains(&"React".to_string()));
        assert!(response.analysis.score <= 90);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_role_is_normalized() {
        let extractor = StubExtractor::with_text(RESUME_TEXT);
        let generator = StubGenerator::failing();
        let store = MemoryResumeStore::new();

        let response = analyze_resume(&extractor, &generator, &store, pdf_upload(Some("pilot")))
            .await
            .unwrap();
        let record = store.get_resume(response.resume_id).await.unwrap().unwrap();
        assert_eq!(record.job_role.as_deref(), Some("general"));

        let none = analyze_resume(&extractor, &generator, &store, pdf_upload(None))
            .await
            .unwrap();
        let record = store.get_resume(none.resume_id).await.unwrap().unwrap();
        assert_eq!(record.job_role, None);
    }

    #[tokio::test]
    async fn test_schema_violation_is_surfaced_and_not_persisted() {
        let extractor = StubExtractor::with_text(RESUME_TEXT);
        let mut reply: serde_json::Value =
            serde_json::from_str(&model_reply(72, "Good")).unwrap();
        reply.as_object_mut().unwrap().remove("keywordsMissing");
        let generator = StubGenerator::replying(reply.to_string());
        let store = MemoryResumeStore::new();

        let err = analyze_resume(&extractor, &generator, &store, pdf_upload(None))
            .await
            .unwrap_err();

        match err {
            AppError::SchemaViolation(v) => assert_eq!(v.fields, vec!["keywordsMissing"]),
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_unreadable_pdf_stops_before_generation() {
        let extractor = StubExtractor::unreadable();
        let generator = StubGenerator::replying(model_reply(72, "Good"));
        let store = MemoryResumeStore::new();

        let err = analyze_resume(&extractor, &generator, &store, pdf_upload(None))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Extraction(ExtractionError::NoText)));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_wrong_media_type_rejected_before_extraction() {
        let extractor = StubExtractor::with_text(RESUME_TEXT);
        let generator = StubGenerator::failing();
        let store = MemoryResumeStore::new();
        let mut upload = pdf_upload(None);
        upload.content_type = Some("image/png".to_string());

        let err = analyze_resume(&extractor, &generator, &store, upload)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_oversize_rejected_before_extraction() {
        let extractor = StubExtractor::with_text(RESUME_TEXT);
        let generator = StubGenerator::failing();
        let store = MemoryResumeStore::new();
        let mut upload = pdf_upload(None);
        upload.bytes = Bytes::from(vec![0u8; MAX_UPLOAD_BYTES + 1]);

        let err = analyze_resume(&extractor, &generator, &store, upload)
            .await
            .unwrap_err();

        match err {
            AppError::Validation(msg) => assert!(msg.contains("5MB")),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(extractor.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_check_upload_boundaries() {
        let mut upload = pdf_upload(None);
        upload.bytes = Bytes::from(vec![0u8; MAX_UPLOAD_BYTES]);
        assert!(check_upload(&upload).is_ok());

        upload.content_type = Some("Application/PDF; name=cv.pdf".to_string());
        assert!(check_upload(&upload).is_ok());

        upload.content_type = None;
        assert!(check_upload(&upload).is_err());
    }
}
