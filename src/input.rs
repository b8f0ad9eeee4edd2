use crate::app::Intent;
use crate::models::{AppState, Scope};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a key press on the given screen to an intent. Unbound keys map to `None`.
pub fn intent_for_key(state: AppState, key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Exit);
    }

    match state {
        AppState::Menu => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Intent::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Intent::MoveDown),
            KeyCode::Enter => Some(Intent::ChooseSelected),
            KeyCode::Char('s') => Some(Intent::ChooseScope(Scope::AllCategories)),
            KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Exit),
            _ => None,
        },
        AppState::Question => match key.code {
            KeyCode::Char(' ') | KeyCode::Char('a') => Some(Intent::RequestReveal),
            KeyCode::Char('i') => Some(Intent::RequestInfo),
            KeyCode::Enter | KeyCode::Char('n') => Some(Intent::RequestNext),
            KeyCode::Char('b') | KeyCode::Esc => Some(Intent::Back),
            KeyCode::Char('q') => Some(Intent::Exit),
            _ => None,
        },
        AppState::Exhausted => match key.code {
            KeyCode::Enter | KeyCode::Char('b') | KeyCode::Esc => Some(Intent::Back),
            KeyCode::Char('q') => Some(Intent::Exit),
            _ => None,
        },
    }
}
