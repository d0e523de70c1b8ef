//! Keyboard input handler
//!
//! Maps key events onto session controller actions per screen. Keys outside
//! each screen's input alphabet are ignored and the screen simply redraws.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::model::types::Screen;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match app.model.ui.screen {
        Screen::Splash => {
            // Any key dismisses the banner
            app.model.ui.screen = Screen::Menu;
        }

        Screen::Menu => match key.code {
            KeyCode::Char('1') => app.begin_compress(),
            KeyCode::Char('2') => app.begin_extract(),
            KeyCode::Char('q') => app.model.ui.should_quit = true,
            _ => {}
        },

        Screen::Browse(purpose) => match key.code {
            KeyCode::Up => app.move_selection_up(),
            KeyCode::Down => app.move_selection_down(),
            KeyCode::Enter => app.activate_selected(purpose),
            KeyCode::Char('b') => app.navigate_back(),
            KeyCode::Char('q') => app.abort_browse(purpose),
            _ => {}
        },

        Screen::NameInput => match key.code {
            KeyCode::Enter => app.confirm_archive_name(),
            KeyCode::Esc => app.cancel_archive_name(),
            KeyCode::Backspace => {
                app.model.ui.input.pop();
            }
            KeyCode::Char(c) => app.model.ui.input.push(c),
            _ => {}
        },

        Screen::Notice => {
            // Acknowledgment keypress returns to the menu
            app.model.ui.notice = None;
            app.model.ui.screen = Screen::Menu;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn test_app() -> App {
        let mut app = App::new(Config::default(), PathBuf::from("/nonexistent-root"));
        app.model.ui.screen = Screen::Menu;
        app
    }

    #[test]
    fn test_menu_quit() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.model.ui.should_quit);
    }

    #[test]
    fn test_menu_ignores_unmapped_keys() {
        let mut app = test_app();
        for code in [KeyCode::Char('x'), KeyCode::Char('3'), KeyCode::Esc, KeyCode::Enter] {
            handle_key(&mut app, key(code));
            assert_eq!(app.model.ui.screen, Screen::Menu);
            assert!(!app.model.ui.should_quit);
        }
    }

    #[test]
    fn test_splash_dismissed_by_any_key() {
        let mut app = test_app();
        app.model.ui.screen = Screen::Splash;
        handle_key(&mut app, key(KeyCode::Char('z')));
        assert_eq!(app.model.ui.screen, Screen::Menu);
    }

    #[test]
    fn test_name_input_editing() {
        let mut app = test_app();
        app.model.ui.screen = Screen::NameInput;
        handle_key(&mut app, key(KeyCode::Char('a')));
        handle_key(&mut app, key(KeyCode::Char('b')));
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.model.ui.input, "a");

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.model.ui.screen, Screen::Menu);
        assert!(app.model.ui.input.is_empty());
    }
}
