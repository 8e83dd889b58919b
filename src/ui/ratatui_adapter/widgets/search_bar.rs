//! Search bar widget
//!
//! Shows the query that produced the visible results, or the text being
//! edited while in input mode.

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search recipes…";

/// Search bar widget that displays the query with an optional cursor
pub struct SearchBar<'a> {
    text: &'a str,
    /// Byte offset of the cursor; `None` when not editing
    cursor: Option<usize>,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Read-only bar showing `query`
    #[must_use]
    pub const fn new(query: &'a str, theme: &'a Theme) -> Self {
        Self {
            text: query,
            cursor: None,
            theme,
        }
    }

    /// Editable bar with a cursor at `cursor`
    #[must_use]
    pub const fn editing(text: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            text,
            cursor: Some(cursor),
            theme,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(self.cursor.is_some()))
            .title(" Search (/) ");

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled("› ", self.theme.dimmed_style())];

        match self.cursor {
            Some(cursor) => {
                let cursor = cursor.min(self.text.len());
                let (before, after) = self.text.split_at(cursor);
                spans.push(Span::raw(before));
                spans.push(caret);
                spans.push(Span::raw(after));
            }
            None if self.text.is_empty() => {
                spans.push(Span::styled(PLACEHOLDER, self.theme.dimmed_style()));
            }
            None => spans.push(Span::raw(self.text)),
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
