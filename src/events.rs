//! Event handling for the interactive picker
//!
//! Maps crossterm keyboard and mouse events to picker actions. The
//! mapping is pure; the picker applies actions to its state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Action resolved from a user event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to the previous chip
    MoveLeft,
    /// Move the cursor to the next chip
    MoveRight,
    /// Jump to the first chip
    MoveStart,
    /// Jump to the last chip
    MoveEnd,
    /// Press the chip under the cursor
    Press,
    /// Accept the current selection and exit
    Confirm,
    /// Abandon the selection and exit
    Abort,
    /// Event has no mapping
    Ignored,
}

/// Map a key event to an action
#[must_use]
pub fn map_key(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Abort,
        (KeyCode::Enter, _) => Action::Confirm,

        (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::BackTab, _) => {
            Action::MoveLeft
        }
        (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Tab, _) => {
            Action::MoveRight
        }
        (KeyCode::Home, _) => Action::MoveStart,
        (KeyCode::End, _) => Action::MoveEnd,

        (KeyCode::Char(' '), _) => Action::Press,

        _ => Action::Ignored,
    }
}

/// Map a mouse event to an action
#[must_use]
pub fn map_mouse(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollUp => Action::MoveLeft,
        MouseEventKind::ScrollDown => Action::MoveRight,
        _ => Action::Ignored,
    }
}
