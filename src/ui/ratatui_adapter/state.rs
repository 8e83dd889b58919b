//! Application state for the ratatui TUI
//!
//! Everything here is presentation state: which pane has focus, where each
//! cursor sits, the text being typed into the search bar and the player
//! overlay. The facet selection itself lives in the [`Coordinator`].

use super::widgets::KeyHint;
use crate::browse::{Coordinator, Player};
use crate::facets;
use crate::output::StatusBarWriter;
use crate::search::VideoItem;

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Typing into the search bar
    Input,
    /// Player overlay is visible
    Player,
}

/// Pane that receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Methods,
    #[default]
    Categories,
    Subcategories,
    Results,
}

impl Focus {
    const ORDER: [Self; 4] = [Self::Methods, Self::Categories, Self::Subcategories, Self::Results];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Application state for the browser
#[derive(Debug)]
pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub method_cursor: usize,
    pub category_cursor: usize,
    pub pill_cursor: usize,
    pub result_cursor: usize,
    /// Search bar contents while in [`Mode::Input`]
    pub input: String,
    /// Byte offset of the cursor in `input`
    pub input_cursor: usize,
    pub player: Player,
    pub status: StatusBarWriter,
    pub hints: Vec<KeyHint>,
    /// Cards per row, updated during render
    pub grid_columns: usize,
    /// First visible row of the result grid, updated during render
    pub grid_scroll: usize,
    pub should_exit: bool,
}

impl AppState {
    /// Create state with cursors on the coordinator's active facets
    #[must_use]
    pub fn new(coordinator: &Coordinator, hints: Vec<KeyHint>) -> Self {
        let mut state = Self {
            mode: Mode::Normal,
            focus: Focus::default(),
            method_cursor: 0,
            category_cursor: 0,
            pill_cursor: 0,
            result_cursor: 0,
            input: String::new(),
            input_cursor: 0,
            player: Player::new(),
            status: StatusBarWriter::new(),
            hints,
            grid_columns: 1,
            grid_scroll: 0,
            should_exit: false,
        };
        state.sync_cursors(coordinator);
        state
    }

    /// Put the facet cursors on the active method, category and subcategory
    pub fn sync_cursors(&mut self, coordinator: &Coordinator) {
        let selection = coordinator.state();
        self.method_cursor = facets::methods()
            .iter()
            .position(|m| m.id == selection.method_id())
            .unwrap_or(0);
        self.category_cursor = facets::categories()
            .iter()
            .position(|c| c.id == selection.category_id())
            .unwrap_or(0);
        self.pill_cursor = selection
            .category()
            .and_then(|c| {
                c.subcategories
                    .iter()
                    .position(|s| s.term == selection.subcategory_term())
            })
            .unwrap_or(0);
    }

    /// Number of entries in the focused pane
    #[must_use]
    pub fn focused_len(&self, coordinator: &Coordinator) -> usize {
        match self.focus {
            Focus::Methods => facets::methods().len(),
            Focus::Categories => facets::categories().len(),
            Focus::Subcategories => coordinator
                .state()
                .category()
                .map_or(0, |c| c.subcategories.len()),
            Focus::Results => coordinator.status().items().len(),
        }
    }

    fn focused_cursor(&mut self) -> &mut usize {
        match self.focus {
            Focus::Methods => &mut self.method_cursor,
            Focus::Categories => &mut self.category_cursor,
            Focus::Subcategories => &mut self.pill_cursor,
            Focus::Results => &mut self.result_cursor,
        }
    }

    /// Move the focused cursor by `delta`, clamped to `len`
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let cursor = self.focused_cursor();
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Keep the result cursor inside the current result list
    pub fn clamp_result_cursor(&mut self, len: usize) {
        if self.result_cursor >= len {
            self.result_cursor = len.saturating_sub(1);
        }
    }

    /// The highlighted result card, if any
    #[must_use]
    pub fn selected_video<'a>(&self, coordinator: &'a Coordinator) -> Option<&'a VideoItem> {
        coordinator.status().items().get(self.result_cursor)
    }

    /// Enter input mode with `text` in the search bar
    pub fn begin_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.input_cursor = self.input.len();
        self.mode = Mode::Input;
    }

    /// Insert a character at the cursor
    pub fn input_push(&mut self, c: char) {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn input_backspace(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.input[..self.input_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.input.remove(prev);
            self.input_cursor = prev;
        }
    }

    /// Remove the character under the cursor
    pub fn input_delete(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input.remove(self.input_cursor);
        }
    }

    pub fn input_cursor_left(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor = self.input[..self.input_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn input_cursor_right(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input_cursor = self.input[self.input_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.input.len(), |(i, _)| self.input_cursor + i);
        }
    }

    pub fn input_clear(&mut self) {
        self.input.clear();
        self.input_cursor = 0;
    }

    /// Leave input mode, returning what was typed
    pub fn finish_input(&mut self) -> String {
        self.mode = Mode::Normal;
        self.input_cursor = 0;
        std::mem::take(&mut self.input)
    }
}
