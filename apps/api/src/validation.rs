//! Request input checks shared by every handler that takes a job title or skills.

use crate::errors::AppError;

pub const MIN_JOB_TITLE_CHARS: usize = 2;
pub const MAX_JOB_TITLE_CHARS: usize = 100;
pub const MAX_SKILLS: usize = 20;
pub const MAX_SKILL_CHARS: usize = 100;

/// Returns the trimmed job title, or a validation error when it is too short
/// or too long.
pub fn validate_job_title(raw: &str) -> Result<String, AppError> {
    let title = raw.trim();
    let len = title.chars().count();
    if len < MIN_JOB_TITLE_CHARS {
        return Err(AppError::Validation(format!(
            "job_title must be at least {MIN_JOB_TITLE_CHARS} characters"
        )));
    }
    if len > MAX_JOB_TITLE_CHARS {
        return Err(AppError::Validation(format!(
            "job_title must be at most {MAX_JOB_TITLE_CHARS} characters"
        )));
    }
    Ok(title.to_string())
}

/// Trims skills, drops blanks, and enforces the count and length limits.
pub fn validate_skills(raw: &[String]) -> Result<Vec<String>, AppError> {
    let skills: Vec<String> = raw
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if skills.is_empty() {
        return Err(AppError::Validation(
            "skills must contain at least one non-empty entry".to_string(),
        ));
    }
    if skills.len() > MAX_SKILLS {
        return Err(AppError::Validation(format!(
            "skills may contain at most {MAX_SKILLS} entries, got {}",
            skills.len()
        )));
    }
    if let Some(long) = skills.iter().find(|s| s.chars().count() > MAX_SKILL_CHARS) {
        return Err(AppError::Validation(format!(
            "skill '{}…' exceeds {MAX_SKILL_CHARS} characters",
            long.chars().take(20).collect::<String>()
        )));
    }
    Ok(skills)
}
