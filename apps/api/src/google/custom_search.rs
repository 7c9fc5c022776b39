use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::google::{build_client, read_json, GoogleApiError};

/// Results requested per query; 10 is the Custom Search maximum.
const RESULTS_PER_QUERY: &str = "10";

/// One organic web result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

/// Generic web search. Carried in `AppState` as `Arc<dyn WebSearch>`.
#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, GoogleApiError>;

    fn is_configured(&self) -> bool;
}

/// Google Programmable Search (Custom Search JSON API) client.
#[derive(Clone)]
pub struct CustomSearchClient {
    client: Client,
    api_key: Option<String>,
    engine_id: Option<String>,
    api_base: String,
}

impl CustomSearchClient {
    pub fn new(
        api_key: Option<String>,
        engine_id: Option<String>,
        api_base: String,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client()?,
            api_key,
            engine_id,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl WebSearch for CustomSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, GoogleApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GoogleApiError::MissingCredentials("GOOGLE_API_KEY"))?;
        let engine_id = self
            .engine_id
            .as_deref()
            .ok_or(GoogleApiError::MissingCredentials("SEARCH_ENGINE_ID"))?;

        let response = self
            .client
            .get(format!("{}/customsearch/v1", self.api_base))
            .query(&[
                ("key", api_key),
                ("cx", engine_id),
                ("q", query),
                ("num", RESULTS_PER_QUERY),
            ])
            .send()
            .await?;

        let parsed: SearchResponse = read_json(response).await?;
        debug!(query, results = parsed.items.len(), "Custom Search returned");
        Ok(parsed.items)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.engine_id.is_some()
    }
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashMap;

    use super::*;

    /// Search stub keyed by exact query. Unknown queries fail like an upstream 500.
    #[derive(Default)]
    pub struct StubSearch {
        pub results: HashMap<String, Vec<SearchItem>>,
    }

    impl StubSearch {
        pub fn with(mut self, query: &str, items: Vec<SearchItem>) -> Self {
            self.results.insert(query.to_string(), items);
            self
        }
    }

    pub fn item(title: &str, link: &str, snippet: &str) -> SearchItem {
        SearchItem {
            title: title.to_string(),
            link: link.to_string(),
            snippet: snippet.to_string(),
        }
    }

    #[async_trait]
    impl WebSearch for StubSearch {
        async fn search(&self, query: &str) -> Result<Vec<SearchItem>, GoogleApiError> {
            self.results
                .get(query)
                .cloned()
                .ok_or_else(|| GoogleApiError::Api {
                    status: 500,
                    message: format!("no stubbed results for '{query}'"),
                })
        }

        fn is_configured(&self) -> bool {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_without_items_deserializes_empty() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"kind":"customsearch#search","searchInformation":{}}"#)
                .unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_item_missing_fields_default() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"items":[{"link":"https://www.udemy.com/course/x/"}]}"#)
                .unwrap();
        assert_eq!(parsed.items[0].title, "");
        assert_eq!(parsed.items[0].link, "https://www.udemy.com/course/x/");
    }

    #[tokio::test]
    async fn test_missing_engine_id_fails_without_network() {
        let client = CustomSearchClient::new(
            Some("key".to_string()),
            None,
            "http://127.0.0.1:9".to_string(),
        )
        .unwrap();
        assert!(!client.is_configured());
        assert!(matches!(
            client.search("rust").await,
            Err(GoogleApiError::MissingCredentials("SEARCH_ENGINE_ID"))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_http_error() {
        let client = CustomSearchClient::new(
            Some("key".to_string()),
            Some("cx".to_string()),
            "http://127.0.0.1:9".to_string(),
        )
        .unwrap();
        assert!(matches!(
            client.search("rust").await,
            Err(GoogleApiError::Http(_))
        ));
    }
}
