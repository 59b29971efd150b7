//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Confirm,
        KeyCode::Left | KeyCode::Char('h') => Action::SelectPrevious,
        KeyCode::Right | KeyCode::Char('l') => Action::SelectNext,
        KeyCode::Char('r') => Action::ReloadChoices,
        _ => Action::None,
    }
}
