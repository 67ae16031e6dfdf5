//! HTTP client for the Hacker News Algolia search API.
//!
//! The client performs one GET per call and folds every failure mode into a
//! [`FetchOutcome::Failure`]. It never touches application state; results are
//! reported to the caller, which feeds them into the result store.

use crate::domain::error::{HnSearchError, Result};
use crate::domain::StoryItem;
use crate::worker::messages::{FetchError, FetchOutcome};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("hnsearch/", env!("CARGO_PKG_VERSION"));

/// Raw search envelope from the Algolia API.
///
/// Only `hits` is required; paging metadata (`nbHits`, `page`, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<StoryItem>,
}

/// Async client for story searches.
#[derive(Debug, Clone)]
pub struct HnClient {
    client: reqwest::Client,
}

impl HnClient {
    /// Creates a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HnSearchError::Http`] if the underlying HTTP client cannot be
    /// built (for example when no TLS backend is available).
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| HnSearchError::Http(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetches and parses a search URL.
    ///
    /// Always resolves to exactly one outcome. An empty query is still a valid
    /// request; the API decides what it returns.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        match self.try_fetch(url).await {
            Ok(stories) => FetchOutcome::Success(stories),
            Err(e) => FetchOutcome::Failure(e),
        }
    }

    async fn try_fetch(&self, url: &str) -> std::result::Result<Vec<StoryItem>, FetchError> {
        tracing::debug!(url = %url, "fetching stories");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_search_response(status, &body)
    }
}

/// Interprets an HTTP status and body as a search result.
///
/// # Errors
///
/// - [`FetchError::HttpStatus`] for any status outside `200..=299`
/// - [`FetchError::Parse`] if the body is not JSON with a `hits` array of stories,
///   or any hit lacks one of the required story fields
///
/// # Examples
///
/// ```
/// use hnsearch::worker::parse_search_response;
///
/// let body = r#"{"hits":[{"objectID":"1","title":"Redux","url":null,"author":"Dan","num_comments":5,"points":10}]}"#;
/// let stories = parse_search_response(200, body).unwrap();
/// assert_eq!(stories[0].title, "Redux");
/// ```
pub fn parse_search_response(status: u16, body: &str) -> std::result::Result<Vec<StoryItem>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::HttpStatus(status));
    }

    let envelope: SearchResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    tracing::debug!(hit_count = envelope.hits.len(), "parsed search response");
    Ok(envelope.hits)
}
