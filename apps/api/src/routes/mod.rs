pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::analysis::pipeline::MAX_UPLOAD_BYTES;
use crate::state::AppState;

/// Room for multipart boundaries, headers and the `jobRole` field on top of
/// the 5 MiB file. The exact file limit is enforced by the pipeline.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/resume/analyze",
            post(handlers::handle_analyze)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        .route("/api/resume/:id", get(handlers::handle_get_resume))
        .with_state(state)
}
