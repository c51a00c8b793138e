//! Normalized key event model shared by the console backends and the
//! session dispatcher.
//!
//! Keys are already decoded by the console layer; nothing here touches the
//! terminal. `Chord` doubles as the completion trigger descriptor: an engine
//! announces the key + exact modifier set that opens its panel.

use std::fmt;

/// Logical key identities the line editor dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    Left,
    Right,
    Home,
    End,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

/// A decoded keypress: identity plus modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Keypress with no modifiers held.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// The printable character carried by this event, if any.
    pub fn printable(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

/// A key + required modifier set, matched exactly (not as a subset).
/// Used to describe completion trigger chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl Chord {
    pub const fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Bare Tab, the conventional trigger.
    pub const fn tab() -> Self {
        Self::new(KeyCode::Tab, KeyModifiers::empty())
    }

    /// Exact match: both the key identity and the full modifier set.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.mods == self.mods
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}
