use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

const SERVICE_NAME: &str = "skillup-api";

fn presence(configured: bool) -> &'static str {
    if configured {
        "configured"
    } else {
        "missing"
    }
}

/// GET /
/// Service metadata and the list of available endpoints.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Resume skill-gap analysis and learning resource API",
        "endpoints": [
            "GET /health",
            "POST /upload/",
            "POST /analyze_resume/",
            "GET /fetch_courses/{job_title_or_skill}",
            "GET /youtube-courses/{job_title_or_skill}",
            "POST /job_matching/",
            "POST /project_generator/"
        ]
    }))
}

/// GET /health
/// Reports whether each third-party credential is configured. Does not
/// contact any upstream.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "services": {
            "gemini": presence(state.generator.is_configured()),
            "google_search": presence(state.web_search.is_configured()),
            "youtube": presence(state.video_search.is_configured()),
        }
    }))
}
