use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::google::custom_search::{CustomSearchClient, WebSearch};
use crate::google::youtube::{VideoSearch, YouTubeClient};
use crate::llm_client::{LlmClient, TextGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Nothing in here is mutable: each upstream is behind a trait object so
/// tests can swap in stubs without touching handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Gemini by default.
    pub generator: Arc<dyn TextGenerator>,
    /// Google Custom Search by default.
    pub web_search: Arc<dyn WebSearch>,
    /// YouTube Data API by default.
    pub video_search: Arc<dyn VideoSearch>,
}

impl AppState {
    /// Builds the production clients from configuration.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let generator = LlmClient::new(
            config.gemini_api_key.clone(),
            config.gemini_api_base.clone(),
            config.gemini_model.clone(),
        )?;
        info!(
            "LLM client initialized (model: {}, configured: {})",
            generator.model(),
            generator.is_configured()
        );
        let web_search = CustomSearchClient::new(
            config.google_api_key.clone(),
            config.search_engine_id.clone(),
            config.google_search_api_base.clone(),
        )?;
        let video_search =
            YouTubeClient::new(config.youtube_api_key.clone(), config.youtube_api_base.clone())?;

        Ok(AppState {
            config,
            generator: Arc::new(generator),
            web_search: Arc::new(web_search),
            video_search: Arc::new(video_search),
        })
    }
}
