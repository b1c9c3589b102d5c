//! Main screen input: the long URL field and its shortcuts

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

pub fn handle_main_screen(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('y') => {
                app.copy_result();
            }
            KeyCode::Char('u') => app.clear_input(),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.page.pop_char(),
        KeyCode::Char(c) => app.page.push_char(c),
        KeyCode::F(1) => app.current_screen = CurrentScreen::Help,
        KeyCode::Esc => app.current_screen = CurrentScreen::Exiting,
        _ => {}
    }
    false
}
