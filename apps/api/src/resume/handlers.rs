//! Axum route handlers for resume upload and analysis.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::analyzer::{analyze_resume, ResumeAnalysis};
use crate::resume::extract::{extract_resume_text, ResumeUpload};
use crate::state::AppState;
use crate::validation::validate_job_title;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub text: String,
    pub characters: usize,
    pub pages_read: usize,
    pub truncated: bool,
}

/// Fields of the resume form. Unknown fields are ignored.
#[derive(Debug, Default)]
struct ResumeForm {
    file: Option<ResumeUpload>,
    job_title: Option<String>,
}

async fn read_resume_form(mut multipart: Multipart) -> Result<ResumeForm, AppError> {
    let mut form = ResumeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let bytes = field.bytes().await?;
                form.file = Some(ResumeUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "job_title" => form.job_title = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(form)
}

fn require_file(form: &mut ResumeForm) -> Result<ResumeUpload, AppError> {
    form.file
        .take()
        .ok_or_else(|| AppError::Validation("Missing 'file' field with the resume PDF".to_string()))
}

/// POST /upload/
///
/// Extracts and returns the text of an uploaded PDF without analysing it.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut form = read_resume_form(multipart?).await?;
    let upload = require_file(&mut form)?;

    let extracted = extract_resume_text(&upload, state.config.extract_char_cap).await?;
    info!(
        file_name = upload.file_name.as_deref().unwrap_or("<unnamed>"),
        pages_read = extracted.pages_read,
        "Resume uploaded"
    );

    Ok(Json(UploadResponse {
        characters: extracted.text.chars().count(),
        text: extracted.text,
        pages_read: extracted.pages_read,
        truncated: extracted.truncated,
    }))
}

/// POST /analyze_resume/
///
/// Multipart form with `file` (PDF) and `job_title`. Returns the skill gap
/// for the role plus the extracted text, which the client sends back to
/// `/job_matching/`.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut form = read_resume_form(multipart?).await?;

    // Validate the cheap field first so a bad title never costs a PDF parse.
    let job_title = validate_job_title(form.job_title.as_deref().unwrap_or_default())?;
    let upload = require_file(&mut form)?;

    let analysis = analyze_resume(
        &upload,
        &job_title,
        state.generator.as_ref(),
        state.config.extract_char_cap,
    )
    .await?;

    Ok(Json(analysis))
}
