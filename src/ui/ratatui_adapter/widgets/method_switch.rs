//! Cooking-method toggle

use crate::browse::FacetOption;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Row of method toggles, numbered for the `1`-`3` shortcuts
pub struct MethodSwitch<'a> {
    options: &'a [FacetOption],
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> MethodSwitch<'a> {
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

impl Widget for MethodSwitch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.pane_border(self.focused))
            .title(" Method ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        for (i, option) in self.options.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if self.focused && i == self.cursor {
                self.theme.selected_style()
            } else if option.active {
                self.theme.active_style()
            } else {
                self.theme.normal_style()
            };
            spans.push(Span::styled(format!("{}", i + 1), self.theme.dimmed_style()));
            let marker = if option.active { "●" } else { "○" };
            spans.push(Span::styled(format!(" {marker} {}", option.label), style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
