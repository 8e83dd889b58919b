//! Help overlay widget for displaying the full key reference

use super::centered_rect;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::styled(title, self.theme.accent_style().add_modifier(Modifier::UNDERLINED))
    }

    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), self.theme.accent_style()),
            Span::raw(desc),
        ])
    }

    fn build_content(&self) -> Vec<Line<'static>> {
        vec![
            Line::default(),
            self.section("  Browse"),
            Line::default(),
            self.help_line("Tab/S-Tab", "Cycle focus"),
            self.help_line("←↑↓→ hjkl", "Move in the focused pane"),
            self.help_line("Enter/Space", "Select method, category, dish or video"),
            self.help_line("1 2 3", "Instant Pot / Air Fryer / Traditional"),
            self.help_line("r", "Run the search again"),
            Line::default(),
            self.section("  Search"),
            Line::default(),
            self.help_line("/", "Edit the search bar"),
            self.help_line("Enter", "Search for the typed text"),
            self.help_line("Ctrl+U", "Clear the search bar"),
            self.help_line("Esc", "Cancel editing"),
            Line::default(),
            self.section("  Videos"),
            Line::default(),
            self.help_line("o", "Open the video in the browser"),
            self.help_line("y", "Copy the watch link"),
            self.help_line("Esc", "Close the player"),
            Line::default(),
            self.help_line("q / Ctrl+C", "Quit"),
            Line::default(),
            Line::styled("  Press any key to close", self.theme.dimmed_style()),
        ]
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(60, 80, area);
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        Paragraph::new(self.build_content()).block(block).render(popup_area, buf);
    }
}
