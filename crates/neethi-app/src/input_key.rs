//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts `crossterm::event::KeyEvent` into [`InputKey`] at its
//! boundary so neethi-app never depends on crossterm, and the headless
//! runner can drive the same handlers.

/// Abstract input key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Printable character this key inserts into a text field, if any
    pub fn as_text(&self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(InputKey::Char('a').as_text(), Some('a'));
        assert_eq!(InputKey::Char('த').as_text(), Some('த'));
        assert_eq!(InputKey::CharCtrl('c').as_text(), None);
        assert_eq!(InputKey::Enter.as_text(), None);
    }
}
