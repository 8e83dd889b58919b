//! Player overlay
//!
//! Terminals cannot embed video, so the overlay shows the card details and
//! the embed URL that `o` hands to the browser.

use super::centered_rect;
use crate::output::{excerpt, publish_date};
use crate::search::VideoItem;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

const DESCRIPTION_CHARS: usize = 280;

/// Centered modal describing the video being played
pub struct PlayerModal<'a> {
    video: &'a VideoItem,
    src: &'a str,
    theme: &'a Theme,
}

impl<'a> PlayerModal<'a> {
    #[must_use]
    pub const fn new(video: &'a VideoItem, src: &'a str, theme: &'a Theme) -> Self {
        Self { video, src, theme }
    }

    fn field(&self, label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:<11}"), self.theme.dimmed_style()),
            Span::raw(value),
        ])
    }
}

impl Widget for PlayerModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(80, 70, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(" Now playing ")
            .title_alignment(Alignment::Center);

        let mut lines = vec![
            Line::styled(self.video.title.clone(), self.theme.active_style()),
            Line::styled(self.video.channel.clone(), self.theme.channel_style()),
            Line::default(),
            self.field("Published", publish_date(self.video)),
            self.field("Embed", self.src.to_string()),
        ];
        if let Some(thumbnail) = &self.video.thumbnail_url {
            lines.push(self.field("Thumbnail", thumbnail.clone()));
        }
        if !self.video.description.is_empty() {
            lines.push(Line::default());
            lines.push(Line::raw(excerpt(&self.video.description, DESCRIPTION_CHARS)));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "o: open in browser   y: copy link   Esc: close",
            self.theme.dimmed_style(),
        ));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ratatui_adapter::widgets::rendered_text;

    #[test]
    fn test_shows_details_and_embed_url() {
        let theme = Theme::default();
        let mut video = VideoItem::new("xyz", "Hyderabadi Biryani", "Chef");
        video.thumbnail_url = Some("https://i.ytimg.com/vi/xyz/hq.jpg".to_string());
        video.description = "Layered rice with marinated chicken.".to_string();
        let src = video.embed_url(true);

        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 30));
        PlayerModal::new(&video, &src, &theme).render(buf.area, &mut buf);

        let text = rendered_text(&buf);
        assert!(text.contains("Hyderabadi Biryani"));
        assert!(text.contains("https://www.youtube.com/embed/xyz?autoplay=1"));
        assert!(text.contains("https://i.ytimg.com/vi/xyz/hq.jpg"));
        assert!(text.contains("Layered rice with marinated chicken."));
    }
}
