use serde::Deserialize;

use crate::career::prompts::{
    JOB_MATCHING_FALLBACK, JOB_MATCHING_PROMPT, JOB_MATCHING_WITH_RESUME_PROMPT,
    PROJECT_IDEAS_FALLBACK, PROJECT_IDEAS_PROMPT,
};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill, render_skills, PLAIN_TEXT_INSTRUCTION};
use crate::llm_client::{generate_or_fallback, GeneratedText, TextGenerator};
use crate::text::truncate_chars;
use crate::validation::{validate_job_title, validate_skills};

#[derive(Debug, Deserialize)]
pub struct JobMatchingRequest {
    pub skills: Vec<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub extracted_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub skills: Vec<String>,
}

/// A job-matching request after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct JobMatchingInput {
    pub skills: Vec<String>,
    pub job_title: Option<String>,
    pub resume_text: Option<String>,
}

impl JobMatchingRequest {
    /// Validates skills and, when present, the job title. Resume text is
    /// re-capped to the extraction budget since it round-trips through the client.
    pub fn validate(self, char_cap: usize) -> Result<JobMatchingInput, AppError> {
        let skills = validate_skills(&self.skills)?;
        let job_title = self
            .job_title
            .filter(|t| !t.trim().is_empty())
            .map(|t| validate_job_title(&t))
            .transpose()?;
        let resume_text = self
            .extracted_text
            .map(|t| truncate_chars(t.trim(), char_cap))
            .filter(|t| !t.is_empty());

        Ok(JobMatchingInput {
            skills,
            job_title,
            resume_text,
        })
    }
}

pub fn build_job_matching_prompt(input: &JobMatchingInput) -> String {
    let skills = render_skills(&input.skills);
    let prompt = match (&input.job_title, &input.resume_text) {
        (Some(job_title), Some(resume_text)) => fill(
            JOB_MATCHING_WITH_RESUME_PROMPT,
            &[
                ("job_title", job_title.as_str()),
                ("skills", skills.as_str()),
                ("resume_text", resume_text.as_str()),
            ],
        ),
        (Some(job_title), None) => {
            let base = fill(JOB_MATCHING_PROMPT, &[("skills", skills.as_str())]);
            format!("{base}\n\nThe candidate is aiming for the role of {job_title}.")
        }
        (None, Some(resume_text)) => {
            let base = fill(JOB_MATCHING_PROMPT, &[("skills", skills.as_str())]);
            format!("{base}\n\nBase the recommendations on this resume excerpt:\n{resume_text}")
        }
        (None, None) => fill(JOB_MATCHING_PROMPT, &[("skills", skills.as_str())]),
    };
    format!("{prompt}\n\n{PLAIN_TEXT_INSTRUCTION}")
}

pub fn build_project_prompt(skills: &[String]) -> String {
    let prompt = fill(PROJECT_IDEAS_PROMPT, &[("skills", render_skills(skills).as_str())]);
    format!("{prompt}\n\n{PLAIN_TEXT_INSTRUCTION}")
}

pub async fn recommend_jobs(
    input: &JobMatchingInput,
    generator: &dyn TextGenerator,
) -> GeneratedText {
    let prompt = build_job_matching_prompt(input);
    generate_or_fallback(generator, "job_matching", &prompt, JOB_MATCHING_FALLBACK).await
}

pub async fn suggest_projects(skills: &[String], generator: &dyn TextGenerator) -> GeneratedText {
    let prompt = build_project_prompt(skills);
    generate_or_fallback(generator, "project_generator", &prompt, PROJECT_IDEAS_FALLBACK).await
}
