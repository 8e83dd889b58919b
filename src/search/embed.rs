//! Playback URLs for a video id

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

/// Embeddable player URL for `video_id`
///
/// ```
/// use khana::search::embed_url;
///
/// assert_eq!(
///     embed_url("dQw4w9WgXcQ", true),
///     "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"
/// );
/// ```
#[must_use]
pub fn embed_url(video_id: &str, autoplay: bool) -> String {
    format!("{EMBED_BASE}{video_id}?autoplay={}", u8::from(autoplay))
}

/// Regular watch-page URL, used for sharing
#[must_use]
pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_BASE}{video_id}")
}
