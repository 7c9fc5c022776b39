//! LLM client: the single point of entry for all Gemini API calls.
//!
//! No other module may call the generative API directly. Handlers depend on
//! the `TextGenerator` trait, which `AppState` carries as `Arc<dyn TextGenerator>`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::text::clean_generated_text;

pub mod prompts;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_ATTEMPTS: u32 = 2;
const RETRY_DELAY: Duration = Duration::from_millis(500);
const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// Only rate limiting and upstream 5xx are worth a second attempt.
    fn is_transient(&self) -> bool {
        matches!(self, LlmError::Api { status, .. } if *status == 429 || *status >= 500)
    }
}

/// Where the text in a generation response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    Model,
    Fallback,
}

/// Cleaned generation output plus its provenance.
#[derive(Debug, Clone)]
pub struct GeneratedText {
    pub text: String,
    pub source: TextSource,
}

/// Produces free text from a single-turn prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    fn is_configured(&self) -> bool;
}

/// Runs the prompt and cleans the answer. Any failure is logged and the
/// static `fallback` text is returned instead.
pub async fn generate_or_fallback(
    generator: &dyn TextGenerator,
    task: &str,
    prompt: &str,
    fallback: &str,
) -> GeneratedText {
    let raw = match generator.generate(prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("{task}: generation failed, serving fallback text: {e}");
            return fallback_text(fallback);
        }
    };

    let cleaned = clean_generated_text(&raw);
    if cleaned.is_empty() {
        warn!("{task}: generation was empty after cleaning, serving fallback text");
        return fallback_text(fallback);
    }

    GeneratedText {
        text: cleaned,
        source: TextSource::Model,
    }
}

fn fallback_text(fallback: &str) -> GeneratedText {
    GeneratedText {
        text: fallback.to_string(),
        source: TextSource::Fallback,
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts `candidates[0].content.parts[0].text`.
    pub fn text(&self) -> Result<&str, LlmError> {
        let candidate = self
            .candidates
            .first()
            .ok_or_else(|| LlmError::MalformedResponse("no candidates".to_string()))?;
        let content = candidate
            .content
            .as_ref()
            .ok_or_else(|| LlmError::MalformedResponse("candidate has no content".to_string()))?;
        let part = content
            .parts
            .first()
            .ok_or_else(|| LlmError::MalformedResponse("content has no parts".to_string()))?;
        let text = part.text.as_deref().ok_or(LlmError::EmptyContent)?;
        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    api_base: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, api_base: String, model: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }

    /// Makes a raw call to the Gemini API, returning the parsed response.
    /// Retries once on 429 and 5xx; transport errors and other statuses are terminal.
    pub async fn call(&self, prompt: &str) -> Result<GenerateContentResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.call_once(api_key, &request_body).await {
                Err(e) if e.is_transient() && attempt < MAX_ATTEMPTS => {
                    warn!(
                        "Gemini call attempt {attempt} failed ({e}), retrying after {}ms...",
                        RETRY_DELAY.as_millis()
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                }
                result => return result,
            }
        }
    }

    async fn call_once(
        &self,
        api_key: &str,
        request_body: &GenerateContentRequest<'_>,
    ) -> Result<GenerateContentResponse, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;
        debug!(model = %self.model, "Gemini call succeeded");
        Ok(parsed)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        Ok(response.text()?.to_string())
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Generator that returns a canned answer or a canned failure.
    pub struct StubGenerator {
        pub answer: Option<String>,
    }

    impl StubGenerator {
        pub fn answering(text: &str) -> Self {
            Self {
                answer: Some(text.to_string()),
            }
        }

        pub fn failing() -> Self {
            Self { answer: None }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            self.answer.clone().ok_or(LlmError::Api {
                status: 503,
                message: "unavailable".to_string(),
            })
        }

        fn is_configured(&self) -> bool {
            true
        }
    }
}
