//! Subcategory pills for the active category

use crate::browse::FacetOption;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Horizontal row of subcategory pills
pub struct SubcategoryPills<'a> {
    options: &'a [FacetOption],
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SubcategoryPills<'a> {
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

impl Widget for SubcategoryPills<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(self.focused))
            .title(" Dishes ");

        if self.options.is_empty() {
            Paragraph::new(Line::styled("Every dish for this method", self.theme.dimmed_style()))
                .block(block)
                .render(area, buf);
            return;
        }

        let mut spans = Vec::new();
        for (i, option) in self.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if self.focused && i == self.cursor {
                self.theme.selected_style()
            } else if option.active {
                self.theme.active_style()
            } else {
                self.theme.dimmed_style()
            };
            spans.push(Span::styled(format!("( {} )", option.label), style));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
