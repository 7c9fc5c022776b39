use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::courses::finder::{find_courses, CourseSource};
use crate::errors::AppError;
use crate::models::course::Course;
use crate::state::AppState;
use crate::validation::validate_job_title;

#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub query: String,
    pub courses: Vec<Course>,
    pub total: usize,
    pub source: CourseSource,
}

/// GET /fetch_courses/:topic
///
/// `topic` is a job title or a single skill.
pub async fn handle_fetch_courses(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> Result<Json<CoursesResponse>, AppError> {
    let topic = validate_job_title(&topic)?;
    let results = find_courses(&topic, state.web_search.as_ref()).await;

    Ok(Json(CoursesResponse {
        query: topic,
        total: results.courses.len(),
        courses: results.courses,
        source: results.source,
    }))
}
