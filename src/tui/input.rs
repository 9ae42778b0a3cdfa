use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay swallows everything except its dismiss keys
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => app.move_cursor(isize::MAX),

        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('t') => app.open_selected_tag(),
        KeyCode::Char('p') => app.open_selected_project(),

        // Esc / Backspace walk back through the sidebar history;
        // with no history they close the panel.
        KeyCode::Esc | KeyCode::Backspace => app.sidebar.go_back(),
        KeyCode::Char('x') => app.sidebar.close(),

        KeyCode::Char('/') => {
            app.mode = Mode::Search;
            app.search_input.clear();
        }
        _ => {}
    }
}

fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
            app.search_input.clear();
        }
        KeyCode::Enter => {
            app.run_search();
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::sample_dataset;
    use crate::model::AppConfig;
    use crate::tui::sidebar::SidebarContent;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn sample_app() -> App {
        App::new(sample_dataset(), AppConfig::default())
    }

    #[test]
    fn test_quit() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_cursor_movement() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.cursor, 2);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_enter_opens_detail_and_esc_closes() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.sidebar.is_open);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.sidebar.is_open);
        assert_eq!(app.sidebar.content, SidebarContent::Closed);
    }

    #[test]
    fn test_esc_goes_back_before_closing() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Enter)); // todo detail
        handle_key(&mut app, press(KeyCode::Char('t'))); // tag view on top
        assert_eq!(app.sidebar.history.len(), 1);

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.sidebar.is_open);
        assert!(matches!(
            app.sidebar.content,
            SidebarContent::TodoDetail { .. }
        ));

        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.sidebar.is_open);
    }

    #[test]
    fn test_x_closes_and_clears_history() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('p')));
        assert!(!app.sidebar.history.is_empty());

        handle_key(&mut app, press(KeyCode::Char('x')));
        assert!(!app.sidebar.is_open);
        assert!(app.sidebar.history.is_empty());
    }

    #[test]
    fn test_search_mode_round_trip() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);

        for c in "api".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.search_input, "api");

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(matches!(
            app.sidebar.content,
            SidebarContent::SearchResults { .. }
        ));
    }

    #[test]
    fn test_search_escape_cancels() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Char('/')));
        handle_key(&mut app, press(KeyCode::Char('u')));
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.search_input.is_empty());
        assert!(!app.sidebar.is_open);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = sample_app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert!(!app.show_help);
    }
}
