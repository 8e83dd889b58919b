//! Category sidebar

use crate::browse::FacetOption;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Vertical list of cuisine categories
pub struct CategorySidebar<'a> {
    options: &'a [FacetOption],
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CategorySidebar<'a> {
    #[must_use]
    pub const fn new(options: &'a [FacetOption], cursor: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            options,
            cursor,
            focused,
            theme,
        }
    }
}

impl Widget for CategorySidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(self.focused))
            .title(" Categories ");

        let lines: Vec<Line> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let pointer = if self.focused && i == self.cursor { "> " } else { "  " };
                let style = if self.focused && i == self.cursor {
                    self.theme.selected_style()
                } else if option.active {
                    self.theme.active_style()
                } else {
                    self.theme.normal_style()
                };
                let marker = if option.active { "● " } else { "  " };
                Line::from(vec![
                    Span::styled(pointer, self.theme.accent_style()),
                    Span::styled(format!("{marker}{}", option.label), style),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ratatui_adapter::widgets::rendered_text;

    #[test]
    fn test_cursor_and_active_marker() {
        let theme = Theme::default();
        let options = [
            FacetOption {
                key: "all",
                label: "All Recipes",
                active: false,
            },
            FacetOption {
                key: "veg",
                label: "Vegetarian",
                active: true,
            },
        ];
        let mut buf = Buffer::empty(Rect::new(0, 0, 24, 5));
        CategorySidebar::new(&options, 0, true, &theme).render(buf.area, &mut buf);

        let text = rendered_text(&buf);
        assert!(text.contains(">   All Recipes"));
        assert!(text.contains("  ● Vegetarian"));
    }
}
