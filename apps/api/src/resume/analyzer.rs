//! Skill-gap analysis: extract the resume, ask the model what is missing for
//! the target role, fall back to generic advice when it cannot answer.

use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill, PLAIN_TEXT_INSTRUCTION};
use crate::llm_client::{generate_or_fallback, TextGenerator, TextSource};
use crate::resume::extract::{extract_resume_text, ResumeUpload};
use crate::resume::prompts::{SKILL_GAP_FALLBACK, SKILL_GAP_PROMPT};

#[derive(Debug, Serialize)]
pub struct ResumeAnalysis {
    pub analysis_id: Uuid,
    pub job_title: String,
    pub missing_skills: String,
    pub extracted_text: String,
    pub pages_read: usize,
    pub text_truncated: bool,
    pub source: TextSource,
    pub timestamp: String,
    pub processing_time_ms: u64,
}

pub fn build_skill_gap_prompt(job_title: &str, resume_text: &str) -> String {
    let prompt = fill(
        SKILL_GAP_PROMPT,
        &[("job_title", job_title), ("resume_text", resume_text)],
    );
    format!("{prompt}\n\n{PLAIN_TEXT_INSTRUCTION}")
}

/// `job_title` must already be validated.
pub async fn analyze_resume(
    upload: &ResumeUpload,
    job_title: &str,
    generator: &dyn TextGenerator,
    char_cap: usize,
) -> Result<ResumeAnalysis, AppError> {
    let started = Instant::now();
    let analysis_id = Uuid::new_v4();

    let extracted = extract_resume_text(upload, char_cap).await?;
    let prompt = build_skill_gap_prompt(job_title, &extracted.text);
    let gap = generate_or_fallback(generator, "skill_gap", &prompt, SKILL_GAP_FALLBACK).await;

    let processing_time_ms = started.elapsed().as_millis() as u64;
    info!(
        %analysis_id,
        job_title,
        source = ?gap.source,
        processing_time_ms,
        "Resume analysis complete"
    );

    Ok(ResumeAnalysis {
        analysis_id,
        job_title: job_title.to_string(),
        missing_skills: gap.text,
        extracted_text: extracted.text,
        pages_read: extracted.pages_read,
        text_truncated: extracted.truncated,
        source: gap.source,
        timestamp: Utc::now().to_rfc3339(),
        processing_time_ms,
    })
}
