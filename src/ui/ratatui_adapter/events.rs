//! Event handling for the ratatui TUI
//!
//! Maps key events to presentation changes and coordinator operations.
//! Side effects that leave the process (browser, clipboard) are returned to
//! the event loop as [`EventResult`] variants.

use super::state::{AppState, Focus, Mode};
use crate::browse::Coordinator;
use crate::facets;
use crate::output::OutputWriter;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Exit the browser
    Quit,
    /// Open the player's embed URL in the system browser
    Launch,
    /// Copy a watch URL to the clipboard
    CopyLink,
    /// No action taken
    Ignored,
}

/// Dispatch a key event according to the current mode
pub fn handle_key(state: &mut AppState, coordinator: &mut Coordinator, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }

    match state.mode {
        Mode::Normal => handle_normal_mode(state, coordinator, key),
        Mode::Input => handle_input_mode(state, coordinator, key),
        Mode::Help => handle_help_mode(state),
        Mode::Player => handle_player_mode(state, key),
    }
}

fn handle_normal_mode(state: &mut AppState, coordinator: &mut Coordinator, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => EventResult::Quit,
        KeyCode::Tab => {
            state.focus = state.focus.next();
            EventResult::Continue
        }
        KeyCode::BackTab => {
            state.focus = state.focus.prev();
            EventResult::Continue
        }
        KeyCode::Up | KeyCode::Char('k') => move_vertical(state, coordinator, -1),
        KeyCode::Down | KeyCode::Char('j') => move_vertical(state, coordinator, 1),
        KeyCode::Left | KeyCode::Char('h') => {
            let len = state.focused_len(coordinator);
            state.move_cursor(-1, len);
            EventResult::Continue
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let len = state.focused_len(coordinator);
            state.move_cursor(1, len);
            EventResult::Continue
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate(state, coordinator),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            match facets::methods().get(index) {
                Some(method) => {
                    state.method_cursor = index;
                    select_method(state, coordinator, method.id)
                }
                None => EventResult::Ignored,
            }
        }
        KeyCode::Char('/') => {
            state.begin_input(coordinator.current_query());
            EventResult::Continue
        }
        KeyCode::Char('r') => {
            coordinator.refresh();
            EventResult::Continue
        }
        KeyCode::Char('o') => match state.selected_video(coordinator).cloned() {
            Some(video) => {
                state.player.open(&video, true);
                state.mode = Mode::Player;
                EventResult::Launch
            }
            None => EventResult::Ignored,
        },
        KeyCode::Char('y') if state.selected_video(coordinator).is_some() => EventResult::CopyLink,
        KeyCode::Char('?') | KeyCode::F(1) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Up/Down move by a whole row in the result grid
fn move_vertical(state: &mut AppState, coordinator: &Coordinator, direction: isize) -> EventResult {
    let len = state.focused_len(coordinator);
    let step = match state.focus {
        Focus::Results => isize::try_from(state.grid_columns.max(1)).unwrap_or(1),
        _ => 1,
    };
    state.move_cursor(direction * step, len);
    EventResult::Continue
}

fn select_method(state: &mut AppState, coordinator: &mut Coordinator, id: &str) -> EventResult {
    if coordinator.select_method(id) {
        state.result_cursor = 0;
        EventResult::Continue
    } else {
        EventResult::Ignored
    }
}

/// Enter on the focused pane
fn activate(state: &mut AppState, coordinator: &mut Coordinator) -> EventResult {
    match state.focus {
        Focus::Methods => match facets::methods().get(state.method_cursor) {
            Some(method) => select_method(state, coordinator, method.id),
            None => EventResult::Ignored,
        },
        Focus::Categories => match facets::categories().get(state.category_cursor) {
            Some(category) if coordinator.select_category(category.id) => {
                state.pill_cursor = 0;
                state.result_cursor = 0;
                EventResult::Continue
            }
            _ => EventResult::Ignored,
        },
        Focus::Subcategories => {
            let term = coordinator
                .state()
                .category()
                .and_then(|c| c.subcategories.get(state.pill_cursor))
                .map(|s| s.term);
            match term {
                Some(term) => {
                    coordinator.select_subcategory(term);
                    state.result_cursor = 0;
                    EventResult::Continue
                }
                None => EventResult::Ignored,
            }
        }
        Focus::Results => match state.selected_video(coordinator).cloned() {
            Some(video) => {
                state.player.open(&video, true);
                state.mode = Mode::Player;
                EventResult::Continue
            }
            None => EventResult::Ignored,
        },
    }
}

fn handle_input_mode(state: &mut AppState, coordinator: &mut Coordinator, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            state.finish_input();
            EventResult::Continue
        }
        (KeyCode::Enter, _) => {
            let text = state.finish_input();
            if coordinator.submit_free_text(&text) {
                state.result_cursor = 0;
                state.focus = Focus::Results;
            } else {
                state.status.warning("Type something to search for");
            }
            EventResult::Continue
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.input_clear();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.input_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            state.input_backspace();
            EventResult::Continue
        }
        (KeyCode::Delete, _) => {
            state.input_delete();
            EventResult::Continue
        }
        (KeyCode::Left, _) => {
            state.input_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.input_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.input_cursor = 0;
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.input_cursor = state.input.len();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Any key closes help
fn handle_help_mode(state: &mut AppState) -> EventResult {
    state.mode = Mode::Normal;
    EventResult::Continue
}

fn handle_player_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
            state.player.close();
            state.mode = Mode::Normal;
            EventResult::Continue
        }
        KeyCode::Char('o') => EventResult::Launch,
        KeyCode::Char('y') => EventResult::CopyLink,
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut AppState,
    coordinator: &mut Coordinator,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(state, coordinator, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::{InlineDispatcher, SelectionState};
    use crate::search::mock::MockProvider;
    use crate::search::{SearchProvider, VideoItem};
    use std::sync::Arc;

    fn setup() -> (AppState, Coordinator, Arc<MockProvider>) {
        let provider = Arc::new(MockProvider::new());
        let dyn_provider: Arc<dyn SearchProvider> = provider.clone();
        let mut coordinator = Coordinator::new(SelectionState::default(), InlineDispatcher::new(dyn_provider));
        coordinator.refresh();
        coordinator.poll();
        let state = AppState::new(&coordinator, Vec::new());
        (state, coordinator, provider)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let (mut state, mut coordinator, _) = setup();
        assert_eq!(handle_key(&mut state, &mut coordinator, press(KeyCode::Char('q'))), EventResult::Quit);
        assert_eq!(
            handle_key(
                &mut state,
                &mut coordinator,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            EventResult::Quit
        );
    }

    #[test]
    fn test_number_keys_select_method() {
        let (mut state, mut coordinator, provider) = setup();

        handle_key(&mut state, &mut coordinator, press(KeyCode::Char('2')));
        assert_eq!(coordinator.state().method_id(), "airfryer");
        assert_eq!(coordinator.current_query(), "Air Fryer Paneer");
        assert_eq!(state.method_cursor, 1);

        assert_eq!(
            handle_key(&mut state, &mut coordinator, press(KeyCode::Char('9'))),
            EventResult::Ignored
        );
        assert_eq!(provider.queries().len(), 2);
    }

    #[test]
    fn test_enter_on_category_resets_pills() {
        let (mut state, mut coordinator, _) = setup();
        state.focus = Focus::Categories;

        handle_key(&mut state, &mut coordinator, press(KeyCode::Down));
        handle_key(&mut state, &mut coordinator, press(KeyCode::Down));
        handle_key(&mut state, &mut coordinator, press(KeyCode::Down));
        handle_key(&mut state, &mut coordinator, press(KeyCode::Enter));

        assert_eq!(coordinator.state().category_id(), "dessert");
        assert_eq!(coordinator.current_query(), "Instant Pot Gulab Jamun Halwa");
        assert_eq!(state.pill_cursor, 0);
    }

    #[test]
    fn test_enter_on_pill_selects_subcategory() {
        let (mut state, mut coordinator, _) = setup();
        handle_key(&mut state, &mut coordinator, press(KeyCode::Tab));
        assert_eq!(state.focus, Focus::Subcategories);

        handle_key(&mut state, &mut coordinator, press(KeyCode::Right));
        handle_key(&mut state, &mut coordinator, press(KeyCode::Enter));
        assert_eq!(coordinator.state().subcategory_term(), "Dal");
        assert_eq!(coordinator.current_query(), "Instant Pot Dal");
    }

    #[test]
    fn test_free_text_input() {
        let (mut state, mut coordinator, provider) = setup();

        handle_key(&mut state, &mut coordinator, press(KeyCode::Char('/')));
        assert_eq!(state.mode, Mode::Input);
        assert_eq!(state.input, "Instant Pot Paneer");

        handle_key(&mut state, &mut coordinator, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        for c in "rajma".chars() {
            handle_key(&mut state, &mut coordinator, press(KeyCode::Char(c)));
        }
        handle_key(&mut state, &mut coordinator, press(KeyCode::Enter));

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.focus, Focus::Results);
        assert_eq!(coordinator.current_query(), "rajma");
        assert_eq!(provider.queries().last().map(String::as_str), Some("rajma"));
    }

    #[test]
    fn test_blank_free_text_is_ignored() {
        let (mut state, mut coordinator, provider) = setup();
        let before = provider.queries().len();

        handle_key(&mut state, &mut coordinator, press(KeyCode::Char('/')));
        handle_key(&mut state, &mut coordinator, KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        handle_key(&mut state, &mut coordinator, press(KeyCode::Char(' ')));
        handle_key(&mut state, &mut coordinator, press(KeyCode::Enter));

        assert_eq!(provider.queries().len(), before);
        assert!(state.status.latest_message().is_some());
    }

    #[test]
    fn test_escape_cancels_input() {
        let (mut state, mut coordinator, provider) = setup();
        let before = provider.queries().len();

        handle_key(&mut state, &mut coordinator, press(KeyCode::Char('/')));
        handle_key(&mut state, &mut coordinator, press(KeyCode::Char('x')));
        handle_key(&mut state, &mut coordinator, press(KeyCode::Esc));

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(provider.queries().len(), before);
    }

    #[test]
    fn test_player_open_and_close() {
        let (mut state, mut coordinator, _) = setup();
        state.focus = Focus::Results;

        handle_key(&mut state, &mut coordinator, press(KeyCode::Enter));
        assert_eq!(state.mode, Mode::Player);
        assert_eq!(state.player.src(), Some("https://www.youtube.com/embed/mock?autoplay=1"));

        assert_eq!(handle_key(&mut state, &mut coordinator, press(KeyCode::Char('o'))), EventResult::Launch);
        assert_eq!(handle_key(&mut state, &mut coordinator, press(KeyCode::Char('y'))), EventResult::CopyLink);

        handle_key(&mut state, &mut coordinator, press(KeyCode::Esc));
        assert_eq!(state.mode, Mode::Normal);
        assert!(!state.player.is_open());
    }

    #[test]
    fn test_grid_navigation_moves_by_row() {
        let provider = Arc::new(MockProvider::new());
        provider.push_items((0..6).map(|i| VideoItem::new(format!("v{i}"), "Dish", "Chef")).collect());
        let dyn_provider: Arc<dyn SearchProvider> = provider;
        let mut coordinator = Coordinator::new(SelectionState::default(), InlineDispatcher::new(dyn_provider));
        coordinator.refresh();
        coordinator.poll();

        let mut state = AppState::new(&coordinator, Vec::new());
        state.focus = Focus::Results;
        state.grid_columns = 3;

        handle_key(&mut state, &mut coordinator, press(KeyCode::Down));
        assert_eq!(state.result_cursor, 3);
        handle_key(&mut state, &mut coordinator, press(KeyCode::Right));
        assert_eq!(state.result_cursor, 4);
        handle_key(&mut state, &mut coordinator, press(KeyCode::Up));
        assert_eq!(state.result_cursor, 1);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let (mut state, mut coordinator, _) = setup();
        handle_key(&mut state, &mut coordinator, press(KeyCode::F(1)));
        assert_eq!(state.mode, Mode::Help);
        handle_key(&mut state, &mut coordinator, press(KeyCode::Char('x')));
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_reload_reissues_search() {
        let (mut state, mut coordinator, provider) = setup();
        handle_key(&mut state, &mut coordinator, press(KeyCode::Char('r')));
        assert_eq!(
            provider.queries(),
            vec!["Instant Pot Paneer".to_string(), "Instant Pot Paneer".to_string()]
        );
    }
}
