//! Result cards grid
//!
//! Cards flow left to right in as many columns as fit. Non-card states
//! (idle, loading, empty, error) are a single centered line.

use crate::browse::ResultsPanel;
use crate::output::{excerpt, publish_date};
use crate::search::VideoItem;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 5;
const MIN_CARD_WIDTH: u16 = 30;
const MAX_COLUMNS: u16 = 4;

/// Cards per row for a grid of `width` cells
#[must_use]
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / MIN_CARD_WIDTH).clamp(1, MAX_COLUMNS))
}

/// Card rows that fit in `height` cells
#[must_use]
pub fn grid_rows(height: u16) -> usize {
    usize::from((height / CARD_HEIGHT).max(1))
}

/// First visible row so that `cursor` stays on screen
#[must_use]
pub fn scroll_for(cursor: usize, columns: usize, rows: usize, scroll: usize) -> usize {
    let row = cursor / columns.max(1);
    let rows = rows.max(1);
    if row < scroll {
        row
    } else if row >= scroll + rows {
        row + 1 - rows
    } else {
        scroll
    }
}

/// Results area: cards or a status line
pub struct ResultGrid<'a> {
    panel: &'a ResultsPanel<'a>,
    cursor: usize,
    scroll: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultGrid<'a> {
    #[must_use]
    pub const fn new(panel: &'a ResultsPanel<'a>, theme: &'a Theme) -> Self {
        Self {
            panel,
            cursor: 0,
            scroll: 0,
            focused: false,
            theme,
        }
    }

    /// Highlight card `cursor`, starting the grid at row `scroll`
    #[must_use]
    pub const fn cursor(mut self, cursor: usize, scroll: usize) -> Self {
        self.cursor = cursor;
        self.scroll = scroll;
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title(&self) -> String {
        match self.panel {
            ResultsPanel::Cards(items) => format!(" Results ({}) ", items.len()),
            _ => " Results ".to_string(),
        }
    }

    fn status_line(&self) -> Option<Line<'static>> {
        match self.panel {
            ResultsPanel::Idle => Some(Line::styled("Press r to search", self.theme.dimmed_style())),
            ResultsPanel::Loading { query } => Some(Line::styled(
                format!("Searching for \"{query}\"…"),
                self.theme.accent_style(),
            )),
            ResultsPanel::Message { text, is_error } => {
                let style = if *is_error {
                    self.theme.error_style()
                } else {
                    self.theme.dimmed_style()
                };
                Some(Line::styled(text.clone(), style))
            }
            ResultsPanel::Cards(_) => None,
        }
    }

    fn render_card(&self, video: &VideoItem, selected: bool, area: Rect, buf: &mut Buffer) {
        let border = if selected {
            self.theme.accent_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::default().borders(Borders::ALL).border_style(border);
        let width = usize::from(area.width.saturating_sub(2));

        let title_style = if selected {
            self.theme.selected_style()
        } else {
            self.theme.active_style()
        };
        let lines = vec![
            Line::styled(excerpt(&video.title, width), title_style),
            Line::styled(excerpt(&video.channel, width), self.theme.channel_style()),
            Line::styled(publish_date(video), self.theme.dimmed_style()),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

impl Widget for ResultGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(self.focused))
            .title(self.title());

        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(line) = self.status_line() {
            let middle = Rect {
                y: inner.y + inner.height / 2,
                height: inner.height.min(1),
                ..inner
            };
            Paragraph::new(line).alignment(Alignment::Center).render(middle, buf);
            return;
        }

        let items = self.panel.cards();
        let columns = grid_columns(inner.width);
        let rows = grid_rows(inner.height);
        // Both values are bounded by MAX_COLUMNS and the terminal height
        let card_width = inner.width / u16::try_from(columns).unwrap_or(1);

        for (i, video) in items.iter().enumerate().skip(self.scroll * columns).take(rows * columns) {
            let row = i / columns - self.scroll;
            let col = i % columns;
            let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
                continue;
            };
            let card = Rect {
                x: inner.x + col * card_width,
                y: inner.y + row * CARD_HEIGHT,
                width: card_width,
                height: CARD_HEIGHT,
            }
            .intersection(inner);
            self.render_card(video, self.focused && i == self.cursor, card, buf);
        }
    }
}
