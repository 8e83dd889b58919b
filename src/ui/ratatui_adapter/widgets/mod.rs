//! Ratatui widgets for the browser TUI

mod help_bar;
mod help_overlay;
mod method_switch;
mod pills;
mod player_modal;
mod result_grid;
mod search_bar;
mod sidebar;
mod status_bar;

pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use method_switch::MethodSwitch;
pub use pills::SubcategoryPills;
pub use player_modal::PlayerModal;
pub use result_grid::{CARD_HEIGHT, ResultGrid, grid_columns, grid_rows, scroll_for};
pub use search_bar::SearchBar;
pub use sidebar::CategorySidebar;
pub use status_bar::StatusBar;

use ratatui::layout::{Constraint, Layout, Rect};

/// Centered area taking the given percentages of `area`
pub(crate) fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
pub(crate) fn rendered_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = usize::from(buf.area.width);
    buf.content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
