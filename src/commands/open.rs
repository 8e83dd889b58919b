//! Open command - play a video by id

use crate::{
    KhanaError,
    browse::Player,
    output::{OutputWriter, StdoutWriter},
    search::VideoItem,
};

type Result<T> = std::result::Result<T, KhanaError>;

const MAX_VIDEO_ID_LEN: usize = 64;

/// Check that `video_id` can be placed in a URL path as-is
///
/// # Errors
/// Returns `KhanaError::InvalidInput` for empty, oversized or non-URL-safe ids
pub fn validate_video_id(video_id: &str) -> Result<()> {
    if video_id.is_empty() || video_id.len() > MAX_VIDEO_ID_LEN {
        return Err(KhanaError::InvalidInput(format!(
            "video id must be 1 to {MAX_VIDEO_ID_LEN} characters"
        )));
    }
    if !video_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(KhanaError::InvalidInput(format!(
            "invalid video id '{video_id}' (letters, digits, '-' and '_' only)"
        )));
    }
    Ok(())
}

/// Execute the open command
///
/// # Errors
/// Returns an error if the id is invalid or no browser could be started
pub fn execute(video_id: &str, autoplay: bool, print: bool, quiet: bool) -> Result<()> {
    validate_video_id(video_id)?;

    let mut player = Player::new();
    player.open(&VideoItem::new(video_id, "", ""), autoplay);

    if print {
        if let Some(src) = player.src() {
            println!("{src}");
        }
        return Ok(());
    }

    player.launch()?;
    StdoutWriter::new(quiet).success(&format!("Opened {video_id} in the browser"));
    Ok(())
}
