pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::career::handlers as career;
use crate::courses::handlers as courses;
use crate::errors::AppError;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::videos::handlers as videos;

/// Leaves headroom above the 10 MB PDF limit so oversized uploads reach the
/// handler and get a proper 413 envelope.
const MAX_BODY_BYTES: usize = 12 * 1024 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Resume intake
        .route("/upload/", post(resume::handle_upload))
        .route("/upload", post(resume::handle_upload))
        .route("/analyze_resume/", post(resume::handle_analyze_resume))
        .route("/analyze_resume", post(resume::handle_analyze_resume))
        // Learning resources
        .route("/fetch_courses/:topic", get(courses::handle_fetch_courses))
        .route("/youtube-courses/:topic", get(videos::handle_youtube_courses))
        // Career advice
        .route("/job_matching/", post(career::handle_job_matching))
        .route("/job_matching", post(career::handle_job_matching))
        .route("/project_generator/", post(career::handle_project_generator))
        .route("/project_generator", post(career::handle_project_generator))
}

/// Every route is served both at the root and under `/api`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
