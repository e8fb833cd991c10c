pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::resume::handlers as resumes;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    let resume_routes = Router::new()
        .route("/api/v1/resumes", post(resumes::handle_upload))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(upload_limit));

    Router::new()
        .route("/health", get(health::health_handler))
        .merge(resume_routes)
        .route("/api/v1/jobs/search", get(jobs::handle_search))
        .route("/api/v1/jobs/:id", get(jobs::handle_job_details))
        .fallback(not_found)
        .with_state(state)
}
