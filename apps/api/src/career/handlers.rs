//! Axum route handlers for job matching and project ideas.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::career::advisor::{recommend_jobs, suggest_projects, JobMatchingRequest, SkillsRequest};
use crate::errors::AppError;
use crate::llm_client::TextSource;
use crate::state::AppState;
use crate::validation::validate_skills;

#[derive(Debug, Serialize)]
pub struct JobMatchingResponse {
    pub job_recommendations: String,
    pub source: TextSource,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectIdeasResponse {
    pub project_ideas: String,
    pub source: TextSource,
    pub timestamp: String,
}

/// POST /job_matching/
///
/// Recommends roles for a skill list, optionally tailored to a target job
/// title and the resume excerpt returned by `/analyze_resume/`.
pub async fn handle_job_matching(
    State(state): State<AppState>,
    payload: Result<Json<JobMatchingRequest>, JsonRejection>,
) -> Result<Json<JobMatchingResponse>, AppError> {
    let Json(request) = payload?;
    let input = request.validate(state.config.extract_char_cap)?;

    let recommendations = recommend_jobs(&input, state.generator.as_ref()).await;
    info!(
        skills = input.skills.len(),
        tailored = input.resume_text.is_some(),
        source = ?recommendations.source,
        "Job matching complete"
    );

    Ok(Json(JobMatchingResponse {
        job_recommendations: recommendations.text,
        source: recommendations.source,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

/// POST /project_generator/
pub async fn handle_project_generator(
    State(state): State<AppState>,
    payload: Result<Json<SkillsRequest>, JsonRejection>,
) -> Result<Json<ProjectIdeasResponse>, AppError> {
    let Json(request) = payload?;
    let skills = validate_skills(&request.skills)?;

    let ideas = suggest_projects(&skills, state.generator.as_ref()).await;
    info!(skills = skills.len(), source = ?ideas.source, "Project ideas generated");

    Ok(Json(ProjectIdeasResponse {
        project_ideas: ideas.text,
        source: ideas.source,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
