//! Player overlay state
//!
//! Opening the overlay sets its embed source; closing it clears the source
//! so nothing keeps playing behind a hidden overlay.

use crate::search::VideoItem;
use tracing::{debug, info};

/// The video-embed overlay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    video: Option<VideoItem>,
    src: Option<String>,
}

impl Player {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `video` in the overlay with an embed URL for it
    pub fn open(&mut self, video: &VideoItem, autoplay: bool) {
        debug!(video_id = video.video_id.as_str(), "opening player");
        self.src = Some(video.embed_url(autoplay));
        self.video = Some(video.clone());
    }

    /// Hide the overlay and clear its embed source
    pub fn close(&mut self) {
        self.src = None;
        self.video = None;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.src.is_some()
    }

    /// Current embed URL, `None` when closed
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    #[must_use]
    pub const fn video(&self) -> Option<&VideoItem> {
        self.video.as_ref()
    }

    /// Hand the embed URL to the system browser
    ///
    /// Returns `Ok(false)` when the overlay is closed.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if no browser could be launched.
    pub fn launch(&self) -> std::io::Result<bool> {
        let Some(src) = self.src() else {
            return Ok(false);
        };
        info!(url = src, "launching player in browser");
        open::that_detached(src)?;
        Ok(true)
    }
}
