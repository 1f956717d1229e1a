//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::map::PanDirection;
use crate::app::Field;

/// Which part of the screen receives typed keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Origin,
    Dest,
    Map,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Origin => Self::Dest,
            Self::Dest => Self::Map,
            Self::Map => Self::Origin,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Origin => Self::Map,
            Self::Dest => Self::Origin,
            Self::Map => Self::Dest,
        }
    }

    /// The input field under focus, if any.
    #[must_use]
    pub fn field(self) -> Option<Field> {
        match self {
            Self::Origin => Some(Field::Origin),
            Self::Dest => Some(Field::Dest),
            Self::Map => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Submit,
    NextFocus,
    PrevFocus,
    Type(char),
    Backspace,
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    Dismiss,
    None,
}

/// Translate a key press into an action.
///
/// An open alert swallows everything except Ctrl-C and its own dismiss keys.
#[must_use]
pub fn map_key(key: KeyEvent, focus: Focus, alert_open: bool) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    if alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Action::Dismiss,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::Submit,
        KeyCode::Tab => Action::NextFocus,
        KeyCode::BackTab => Action::PrevFocus,
        code if focus == Focus::Map => map_control(code),
        KeyCode::Up => Action::PrevFocus,
        KeyCode::Down => Action::NextFocus,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Action::Type(c)
        }
        _ => Action::None,
    }
}

fn map_control(code: KeyCode) -> Action {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Action::Pan(PanDirection::North),
        KeyCode::Down | KeyCode::Char('j') => Action::Pan(PanDirection::South),
        KeyCode::Left | KeyCode::Char('h') => Action::Pan(PanDirection::West),
        KeyCode::Right | KeyCode::Char('l') => Action::Pan(PanDirection::East),
        KeyCode::Char('+' | '=') => Action::ZoomIn,
        KeyCode::Char('-' | '_') => Action::ZoomOut,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}
