use std::sync::Arc;

use crate::analysis::extractor::TextExtractor;
use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Each capability is a trait object so tests can swap in stubs.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn TextExtractor>,
    /// Production: `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
    /// `PgResumeStore` when `DATABASE_URL` is set, otherwise `MemoryResumeStore`.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
}
