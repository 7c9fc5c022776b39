use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::google::youtube::VideoSearch;
use crate::models::video::Video;
use crate::state::AppState;
use crate::validation::validate_job_title;

pub const NO_VIDEOS_MESSAGE: &str = "No YouTube videos found for this topic.";
pub const VIDEOS_UNAVAILABLE_MESSAGE: &str =
    "Video search is temporarily unavailable. Please try again later.";

#[derive(Debug, Serialize)]
pub struct VideosResponse {
    pub query: String,
    pub videos: Vec<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// Searches for course-style videos. Upstream failures are logged and
/// reported as an empty list with a message.
pub async fn search_course_videos(
    topic: &str,
    search: &dyn VideoSearch,
) -> (Vec<Video>, Option<&'static str>) {
    let query = format!("{topic} course tutorial");
    match search.search_videos(&query).await {
        Ok(videos) if videos.is_empty() => (videos, Some(NO_VIDEOS_MESSAGE)),
        Ok(videos) => {
            info!(topic, results = videos.len(), "Video search complete");
            (videos, None)
        }
        Err(e) => {
            warn!(topic, "Video search failed: {e}");
            (Vec::new(), Some(VIDEOS_UNAVAILABLE_MESSAGE))
        }
    }
}

/// GET /youtube-courses/:topic
pub async fn handle_youtube_courses(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> Result<Json<VideosResponse>, AppError> {
    let topic = validate_job_title(&topic)?;
    let (videos, message) = search_course_videos(&topic, state.video_search.as_ref()).await;

    Ok(Json(VideosResponse {
        query: topic,
        videos,
        message,
    }))
}
