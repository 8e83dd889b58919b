//! Ratatui browser event loop
//!
//! Sets up the terminal, then alternates between drawing the current
//! [`BrowseView`] and handling one input event, draining finished searches on
//! every tick.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Focus, Mode};
use super::theme::Theme;
use super::widgets::{
    CategorySidebar, HelpBar, HelpOverlay, MethodSwitch, PlayerModal, ResultGrid, SearchBar,
    StatusBar, SubcategoryPills, grid_columns, grid_rows, scroll_for,
};
use crate::browse::{BrowseView, Coordinator, SearchStatus};
use crate::output::OutputWriter;
use crate::ui::error::{Result, UiError};
use arboard::Clipboard;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    widgets::{Block, Borders},
};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, warn};

/// Event poll timeout; also how often finished searches are picked up
const TICK: Duration = Duration::from_millis(50);

/// Interactive recipe browser
pub struct BrowseApp {
    theme: Theme,
    clipboard: Option<Clipboard>,
}

impl BrowseApp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            clipboard: None,
        }
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the browser until the user quits
    ///
    /// Issues the startup search if nothing has been searched yet.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if the terminal cannot be set up or drawn to.
    pub fn run(&mut self, coordinator: &mut Coordinator) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, coordinator);

        if let Err(e) = Self::cleanup_terminal() {
            warn!("terminal cleanup failed: {e}");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        coordinator: &mut Coordinator,
    ) -> Result<()> {
        let mut state = AppState::new(coordinator, HelpBar::default_hints());

        if coordinator.last_seq() == 0 {
            coordinator.refresh();
        }

        while !state.should_exit {
            if coordinator.poll() {
                Self::on_search_finished(&mut state, coordinator);
            }

            let view = BrowseView::render(coordinator);
            terminal.draw(|frame| self.render(frame, &mut state, &view, coordinator.status()))?;

            match poll_and_handle(&mut state, coordinator, TICK)? {
                EventResult::Quit => state.should_exit = true,
                EventResult::Launch => Self::launch(&state),
                EventResult::CopyLink => self.copy_link(&state, coordinator),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        Ok(())
    }

    fn on_search_finished(state: &mut AppState, coordinator: &Coordinator) {
        let count = coordinator.status().items().len();
        state.clamp_result_cursor(count);
        match coordinator.status() {
            SearchStatus::Loaded { query, .. } => debug!(query = query.as_str(), count, "results shown"),
            SearchStatus::Unconfigured => state
                .status
                .warning("Set an API key with `khana config set-key` or KHANA_API_KEY"),
            _ => {}
        }
    }

    fn launch(state: &AppState) {
        match state.player.launch() {
            Ok(true) => state.status.info("Opened in browser"),
            Ok(false) => {}
            Err(e) => state.status.error(&format!("Could not open browser: {e}")),
        }
    }

    fn copy_link(&mut self, state: &AppState, coordinator: &Coordinator) {
        let video = state.player.video().or_else(|| state.selected_video(coordinator));
        let Some(video) = video else {
            return;
        };
        match self.set_clipboard(&video.watch_url()) {
            Ok(()) => state.status.success("Copied link"),
            Err(e) => state.status.error(&e.to_string()),
        }
    }

    fn set_clipboard(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().map_err(|e| UiError::ClipboardError(e.to_string()))?);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text)
                .map_err(|e| UiError::ClipboardError(e.to_string())),
            None => Err(UiError::ClipboardError("clipboard not available".to_string())),
        }
    }

    fn render(&self, frame: &mut Frame, state: &mut AppState, view: &BrowseView, status: &SearchStatus) {
        let theme = &self.theme;
        let [top, middle, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [search_area, method_area] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(50)]).areas(top);
        let [sidebar_area, content_area] =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(30)]).areas(middle);
        let [pills_area, results_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(5)]).areas(content_area);

        let search_bar = if state.mode == Mode::Input {
            SearchBar::editing(&state.input, state.input_cursor, theme)
        } else {
            SearchBar::new(view.query, theme)
        };
        frame.render_widget(search_bar, search_area);

        frame.render_widget(
            MethodSwitch::new(&view.methods, state.method_cursor, state.focus == Focus::Methods, theme),
            method_area,
        );
        frame.render_widget(
            CategorySidebar::new(&view.categories, state.category_cursor, state.focus == Focus::Categories, theme),
            sidebar_area,
        );
        frame.render_widget(
            SubcategoryPills::new(&view.subcategories, state.pill_cursor, state.focus == Focus::Subcategories, theme),
            pills_area,
        );

        let grid_inner = Block::default().borders(Borders::ALL).inner(results_area);
        state.grid_columns = grid_columns(grid_inner.width);
        state.grid_scroll = scroll_for(
            state.result_cursor,
            state.grid_columns,
            grid_rows(grid_inner.height),
            state.grid_scroll,
        );
        frame.render_widget(
            ResultGrid::new(&view.results, theme)
                .cursor(state.result_cursor, state.grid_scroll)
                .focused(state.focus == Focus::Results),
            results_area,
        );

        let indicator = match status {
            SearchStatus::Loading { .. } => "Loading…".to_string(),
            SearchStatus::Loaded { items, .. } => format!("{} videos", items.len()),
            SearchStatus::Failed { .. } | SearchStatus::Unconfigured => "Error".to_string(),
            SearchStatus::Idle => String::new(),
        };
        let message = state.status.latest_message();
        frame.render_widget(StatusBar::new(message.as_ref(), &indicator, theme), status_area);
        frame.render_widget(HelpBar::new(&state.hints, theme), help_area);

        match state.mode {
            Mode::Help => frame.render_widget(HelpOverlay::new(theme), frame.area()),
            Mode::Player => {
                if let (Some(video), Some(src)) = (state.player.video(), state.player.src()) {
                    frame.render_widget(PlayerModal::new(video, src, theme), frame.area());
                }
            }
            Mode::Normal | Mode::Input => {}
        }
    }
}

impl Default for BrowseApp {
    fn default() -> Self {
        Self::new()
    }
}
