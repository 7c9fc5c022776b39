//! Thin clients for the two Google APIs the service proxies: Custom Search
//! (course discovery) and YouTube Data v3 (tutorial videos).
//!
//! Both share the same error envelope and the same failure policy: callers
//! get a typed `GoogleApiError` and decide how to degrade.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;

pub mod custom_search;
pub mod youtube;

pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum GoogleApiError {
    #[error("{0} is not configured")]
    MissingCredentials(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

pub(crate) fn build_client() -> anyhow::Result<Client> {
    Ok(Client::builder().timeout(SEARCH_TIMEOUT).build()?)
}

/// Turns a response into its parsed JSON body, mapping non-2xx statuses to
/// `GoogleApiError::Api` with the message from Google's error envelope.
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, GoogleApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<GoogleErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        return Err(GoogleApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| GoogleApiError::MalformedResponse(e.to_string()))
}
