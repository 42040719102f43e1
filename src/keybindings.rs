use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::actions::Action;

/// Global shell bindings. Ctrl-chords so plain keys reach the focused app.
pub fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (KeyCode::Tab, KeyModifiers::NONE) => Some(Action::CycleFocus),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => Some(Action::CloseActive),
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Some(Action::MinimizeActive),
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Some(Action::ToggleMaximizeActive),
        (KeyCode::Char('g'), KeyModifiers::CONTROL) => Some(Action::ToggleMouseCapture),
        _ => None,
    }
}
