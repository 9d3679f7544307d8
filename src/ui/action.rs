//! Actions that can be triggered by keys

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// All key-triggered UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Play if paused, pause if running
    TogglePlay,
    StepForward,
    StepBackward,
    /// Raise the speed dial by one notch
    Faster,
    /// Lower the speed dial by one notch
    Slower,
    /// New random array
    Reset,
}

impl Action {
    /// Map a key press to an action. Releases and unknown keys map to nothing.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Enter => Some(Action::TogglePlay),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::StepForward),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::StepBackward),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(Action::Faster),
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => Some(Action::Slower),
            KeyCode::Char('r') => Some(Action::Reset),
            _ => None,
        }
    }
}
