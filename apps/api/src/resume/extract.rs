//! Resume text extraction: size and type checks, PDF parsing with a page
//! limit on the kept text, whitespace normalisation, and the character budget.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::text::{collapse_whitespace, truncate_chars};

/// Uploads above this size are rejected before parsing.
pub const MAX_PDF_BYTES: usize = 10 * 1024 * 1024;
/// Only the first pages of a resume carry the skills that matter.
pub const MAX_PAGES: usize = 3;
const PDF_MAGIC: &[u8] = b"%PDF-";

/// A file part received from a multipart form.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone)]
pub struct ExtractedResume {
    pub text: String,
    pub pages_read: usize,
    pub total_pages: usize,
    pub truncated: bool,
}

/// Rejects uploads that are empty, too large, or not a PDF.
/// Runs before any parsing is attempted.
pub fn check_upload(upload: &ResumeUpload) -> Result<(), AppError> {
    if upload.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    if upload.bytes.len() > MAX_PDF_BYTES {
        return Err(AppError::PayloadTooLarge(format!(
            "File is {} bytes; the limit is {} bytes (10 MB)",
            upload.bytes.len(),
            MAX_PDF_BYTES
        )));
    }

    let named_pdf = upload
        .file_name
        .as_deref()
        .is_some_and(|n| n.to_ascii_lowercase().ends_with(".pdf"));
    let typed_pdf = upload
        .content_type
        .as_deref()
        .and_then(|t| t.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case("application/pdf"));
    if !named_pdf && !typed_pdf {
        return Err(AppError::Validation(
            "Only PDF files are accepted".to_string(),
        ));
    }
    if !upload.bytes.starts_with(PDF_MAGIC) {
        return Err(AppError::Validation(
            "File does not look like a PDF document".to_string(),
        ));
    }
    Ok(())
}

/// Joins the first `MAX_PAGES` pages, collapses whitespace, and truncates to `char_cap`.
pub fn normalize_pages(pages: &[String], char_cap: usize) -> ExtractedResume {
    let pages_read = pages.len().min(MAX_PAGES);
    let joined = pages[..pages_read].join("\n");
    let collapsed = collapse_whitespace(&joined);
    let truncated = collapsed.chars().count() > char_cap;
    let text = if truncated {
        truncate_chars(&collapsed, char_cap).trim_end().to_string()
    } else {
        collapsed
    };

    ExtractedResume {
        text,
        pages_read,
        total_pages: pages.len(),
        truncated,
    }
}

/// Full pipeline: validate the upload, parse it off the async runtime, and normalise the text.
pub async fn extract_resume_text(
    upload: &ResumeUpload,
    char_cap: usize,
) -> Result<ExtractedResume, AppError> {
    check_upload(upload)?;

    let bytes = upload.bytes.clone();
    let pages = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    })
    .await
    // pdf-extract panics on some malformed inputs; treat that like a parse error.
    .map_err(|e| AppError::Extraction(format!("PDF parser aborted: {e}")))?
    .map_err(|e| AppError::Extraction(e.to_string()))?;

    let extracted = normalize_pages(&pages, char_cap);
    if extracted.text.is_empty() {
        return Err(AppError::Validation(
            "No readable text found in the PDF; scanned documents are not supported".to_string(),
        ));
    }

    debug!(
        pages_read = extracted.pages_read,
        total_pages = extracted.total_pages,
        chars = extracted.text.chars().count(),
        truncated = extracted.truncated,
        "Extracted resume text"
    );
    Ok(extracted)
}

#[cfg(test)]
pub mod testing {
    /// Builds a minimal PDF with one Helvetica text line per page.
    /// Page text must not contain parentheses or backslashes.
    pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", 4 + 2 * i))
            .collect();
        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                pages.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];
        for (i, text) in pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                5 + 2 * i
            ));
            let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            objects.push(format!(
                "<< /Length {} >>\nstream\n{stream}\nendstream",
                stream.len()
            ));
        }

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_at = out.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        out.extend_from_slice(xref.as_bytes());
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        out
    }
}
