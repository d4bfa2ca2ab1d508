//! Key mapping from terminal events to simulation actions.

use crate::types::LifeAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to board-level actions.
///
/// Cursor movement and cell toggling are handled by
/// [`crate::handler::CursorHandler`] since they depend on cursor state.
pub fn handle_key_event(key: KeyEvent) -> Option<LifeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Timer
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(LifeAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(LifeAction::Stop)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('.') => Some(LifeAction::Step),

        // Board
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LifeAction::Reset),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(LifeAction::Clear),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(LifeAction::LoadGosperGun),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
