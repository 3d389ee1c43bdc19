//! Keyboard mapping for the game screen.

use crate::game::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal key event into a game input.
///
/// Returns `None` for release/repeat events so a held key jumps once.
pub fn map_key(key: &KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let input = match key.code {
        KeyCode::Char(' ') => GameInput::Jump,
        KeyCode::Esc => GameInput::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        _ => GameInput::Other,
    };
    Some(input)
}
