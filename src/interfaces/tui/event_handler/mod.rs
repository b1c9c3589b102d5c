//! Event handling for TUI
//!
//! Handles keyboard events and delegates to the handler of the current screen

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::app::{App, CurrentScreen};

mod main_screen;
mod misc_screens;

use main_screen::handle_main_screen;
use misc_screens::{handle_exiting_screen, handle_help_screen};

/// Handle a key press. Returns true when the app should exit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key),
        CurrentScreen::Help => handle_help_screen(app, key.code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key.code),
    }
}
