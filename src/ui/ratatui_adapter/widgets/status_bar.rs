//! Status bar widget for displaying messages

use crate::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar: latest message on the left, search state on the right
pub struct StatusBar<'a> {
    message: Option<&'a (MessageLevel, String)>,
    /// Right-hand indicator, e.g. "Loading…" or "12 videos"
    indicator: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    #[must_use]
    pub const fn new(message: Option<&'a (MessageLevel, String)>, indicator: &'a str, theme: &'a Theme) -> Self {
        Self {
            message,
            indicator,
            theme,
        }
    }

    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "! ",
            MessageLevel::Info => "i ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let [left, right] = Layout::horizontal([Constraint::Percentage(75), Constraint::Percentage(25)]).areas(inner);

        if let Some((level, text)) = self.message {
            let style = self.theme.message_style(*level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(*level), style),
                Span::styled(text.as_str(), style),
            ]);
            Paragraph::new(line).render(left, buf);
        }

        Paragraph::new(Line::styled(self.indicator, self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(right, buf);
    }
}
