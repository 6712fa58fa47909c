use crate::tui::PickerState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the picker loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Refresh,
    /// Launch the given selection; `None` is the default target.
    Launch(Option<String>),
}

/// Maps a key press to an action, moving the selection in place.
pub fn handle_key(state: &mut PickerState, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => {
            state.select_next();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.select_prev();
            Action::None
        }
        KeyCode::Enter => Action::Launch(state.selection().map(str::to_string)),
        KeyCode::Char('d') => Action::Launch(None),
        KeyCode::Char('r') => Action::Refresh,
        _ => Action::None,
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
