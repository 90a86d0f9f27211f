use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

/// Room for the resume's text fields and multipart framing on top of the file.
const FORM_OVERHEAD: usize = 1024 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.max_upload_size as usize + FORM_OVERHEAD;

    Router::new()
        // Resumes
        .route("/api/resumes", get(handlers::list_resumes))
        .route(
            "/api/resumes",
            post(handlers::create_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Developer applications
        .route(
            "/api/developer-applications",
            get(handlers::list_developer_applications)
                .post(handlers::create_developer_application),
        )
        // AI queries
        .route(
            "/api/ai-queries",
            get(handlers::list_ai_queries).post(handlers::create_ai_query),
        )
        // Internal
        .route("/_internal/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
