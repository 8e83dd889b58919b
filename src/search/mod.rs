//! Video search
//!
//! The search provider is the one external boundary of the browser: it takes
//! a query string and returns an ordered list of videos, or a single error.
//! [`YouTubeProvider`] talks to the YouTube Data API; tests substitute their
//! own [`SearchProvider`].

mod embed;
mod entities;
mod error;
mod youtube;

#[cfg(test)]
pub mod mock;

pub use embed::{embed_url, watch_url};
pub use entities::decode_entities;
pub use error::SearchError;
pub use youtube::{DEFAULT_ENDPOINT, YouTubeProvider};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One search result, rendered as a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoItem {
    /// Unique video identifier, used to build playback URLs
    pub video_id: String,
    pub title: String,
    /// Channel (author) name
    pub channel: String,
    pub thumbnail_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub description: String,
}

impl VideoItem {
    /// Create an item with only the fields a card needs
    #[must_use]
    pub fn new(
        video_id: impl Into<String>,
        title: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            channel: channel.into(),
            thumbnail_url: None,
            published_at: None,
            description: String::new(),
        }
    }

    /// Embeddable player URL for this item
    #[must_use]
    pub fn embed_url(&self, autoplay: bool) -> String {
        embed_url(&self.video_id, autoplay)
    }

    /// Watch-page URL for this item
    #[must_use]
    pub fn watch_url(&self) -> String {
        watch_url(&self.video_id)
    }
}

/// Result type for provider calls
pub type SearchResult = std::result::Result<Vec<VideoItem>, SearchError>;

/// Trait for video search backends
///
/// Implementations are called from worker threads, hence `Send + Sync`.
///
/// # Examples
///
/// ```
/// use khana::search::{SearchProvider, SearchResult, VideoItem};
///
/// struct Canned;
///
/// impl SearchProvider for Canned {
///     fn search(&self, query: &str) -> SearchResult {
///         Ok(vec![VideoItem::new("id1", format!("{query} in 10 minutes"), "Chef")])
///     }
/// }
///
/// let items = Canned.search("Air Fryer Samosa Pakora").unwrap();
/// assert_eq!(items[0].title, "Air Fryer Samosa Pakora in 10 minutes");
/// ```
pub trait SearchProvider: Send + Sync {
    /// Search for videos matching `query`
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if the credential is missing, the request fails,
    /// or the response reports an error.
    fn search(&self, query: &str) -> SearchResult;
}

impl<P: SearchProvider + ?Sized> SearchProvider for std::sync::Arc<P> {
    fn search(&self, query: &str) -> SearchResult {
        (**self).search(query)
    }
}

impl<P: SearchProvider + ?Sized> SearchProvider for Box<P> {
    fn search(&self, query: &str) -> SearchResult {
        (**self).search(query)
    }
}
