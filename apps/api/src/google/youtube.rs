use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::google::{build_client, read_json, GoogleApiError};
use crate::models::video::Video;

// Fixed search filters: mid-length lessons, strict safe search, ten results.
const VIDEO_DURATION: &str = "medium";
const SAFE_SEARCH: &str = "strict";
const MAX_RESULTS: &str = "10";
const RELEVANCE_LANGUAGE: &str = "en";

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: ResourceId,
    snippet: Option<Snippet>,
}

#[derive(Debug, Deserialize)]
struct ResourceId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl Thumbnails {
    fn best(&self) -> Option<String> {
        [&self.high, &self.medium, &self.default]
            .into_iter()
            .flatten()
            .map(|t| t.url.clone())
            .next()
    }
}

impl SearchResult {
    /// Channels and playlists carry no `videoId` and are dropped.
    fn into_video(self) -> Option<Video> {
        let video_id = self.id.video_id?;
        let snippet = self.snippet?;
        Some(Video {
            link: Video::watch_url(&video_id),
            thumbnail: snippet.thumbnails.best(),
            title: snippet.title,
            channel: snippet.channel_title,
            description: snippet.description,
            published_at: snippet.published_at,
            video_id,
        })
    }
}

/// Video search. Carried in `AppState` as `Arc<dyn VideoSearch>`.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search_videos(&self, query: &str) -> Result<Vec<Video>, GoogleApiError>;

    fn is_configured(&self) -> bool;
}

/// YouTube Data API v3 `search.list` client.
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: Option<String>,
    api_base: String,
}

impl YouTubeClient {
    pub fn new(api_key: Option<String>, api_base: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client()?,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search_videos(&self, query: &str) -> Result<Vec<Video>, GoogleApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GoogleApiError::MissingCredentials("YOUTUBE_API_KEY"))?;

        let response = self
            .client
            .get(format!("{}/youtube/v3/search", self.api_base))
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("videoDuration", VIDEO_DURATION),
                ("safeSearch", SAFE_SEARCH),
                ("maxResults", MAX_RESULTS),
                ("relevanceLanguage", RELEVANCE_LANGUAGE),
                ("key", api_key),
            ])
            .send()
            .await?;

        let parsed: SearchListResponse = read_json(response).await?;
        let videos: Vec<Video> = parsed
            .items
            .into_iter()
            .filter_map(SearchResult::into_video)
            .collect();
        debug!(query, results = videos.len(), "YouTube search returned");
        Ok(videos)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
