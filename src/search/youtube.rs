//! YouTube Data API search provider

use super::entities::decode_entities;
use super::error::SearchError;
use super::{SearchProvider, SearchResult, VideoItem};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Production API host
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com";

const SEARCH_PATH: &str = "/youtube/v3/search";
const DEFAULT_MAX_RESULTS: u8 = 12;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Search provider backed by the YouTube Data API v3 `search` endpoint
pub struct YouTubeProvider {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    max_results: u8,
}

impl YouTubeProvider {
    /// Create a provider for `endpoint` (usually [`DEFAULT_ENDPOINT`])
    ///
    /// A missing or blank key is accepted here; every search then fails with
    /// [`SearchError::MissingApiKey`] before touching the network.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Http` if the HTTP client cannot be built.
    pub fn new(api_key: Option<String>, endpoint: impl Into<String>) -> Result<Self, SearchError> {
        Self::with_timeout(api_key, endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a provider with a custom request timeout
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Http` if the HTTP client cannot be built.
    pub fn with_timeout(
        api_key: Option<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .user_agent(concat!("khana/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            endpoint: endpoint.into(),
            max_results: DEFAULT_MAX_RESULTS,
        })
    }

    /// Set the number of results requested per search
    #[must_use]
    pub const fn max_results(mut self, max_results: u8) -> Self {
        self.max_results = max_results;
        self
    }

    /// Whether a credential is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn search_url(&self) -> String {
        format!("{}{SEARCH_PATH}", self.endpoint.trim_end_matches('/'))
    }
}

impl SearchProvider for YouTubeProvider {
    fn search(&self, query: &str) -> SearchResult {
        let Some(key) = self.api_key.as_deref() else {
            return Err(SearchError::MissingApiKey);
        };

        debug!(query, max_results = self.max_results, "sending search request");

        let max_results = self.max_results.to_string();
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("part", "snippet"),
                ("maxResults", max_results.as_str()),
                ("q", query),
                ("type", "video"),
                ("key", key),
            ])
            .send()?;

        let status = response.status();
        let body = response.text()?;

        let result = parse_response(status, &body);
        if let Err(e) = &result {
            warn!(query, %status, "search failed: {}", e);
        }
        result
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    items: Vec<ApiItem>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ApiItem {
    id: ApiItemId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ApiItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    description: String,
    published_at: Option<String>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    #[serde(rename = "default")]
    fallback: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl ApiItem {
    fn into_video(self) -> Option<VideoItem> {
        let video_id = self.id.video_id?;
        let Snippet {
            title,
            channel_title,
            description,
            published_at,
            thumbnails,
        } = self.snippet;

        let thumbnail_url = thumbnails
            .high
            .or(thumbnails.medium)
            .or(thumbnails.fallback)
            .map(|thumb| thumb.url);

        let published_at = published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Some(VideoItem {
            video_id,
            title: decode_entities(&title),
            channel: decode_entities(&channel_title),
            thumbnail_url,
            published_at,
            description: decode_entities(&description),
        })
    }
}

/// Turn a raw response into items or an error
///
/// An `error` object wins even on a 2xx status. A non-2xx status without one
/// is reported with its reason phrase.
fn parse_response(status: StatusCode, body: &str) -> SearchResult {
    let parsed = serde_json::from_str::<ApiResponse>(body);

    if let Ok(ApiResponse {
        error: Some(error), ..
    }) = &parsed
    {
        let message = if error.message.is_empty() {
            format!("request rejected ({status})")
        } else {
            error.message.clone()
        };
        return Err(SearchError::Api(message));
    }

    if !status.is_success() {
        return Err(SearchError::Status {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("unexpected status").to_string(),
        });
    }

    let response = parsed.map_err(|e| SearchError::Decode(e.to_string()))?;
    Ok(response
        .items
        .into_iter()
        .filter_map(ApiItem::into_video)
        .collect())
}
