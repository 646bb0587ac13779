//! Platform-independent key and input representation.

/// A logical key.
///
/// Printable keys carry the character the keyboard produced, so `Shift+a`
/// may arrive either as `Char('A')` or as `Char('a')` with [`Modifier::Shift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Enter,
    Backspace,
    Delete,
    Escape,
    Tab,
}

/// Modifier held while a key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    #[default]
    None,
    Shift,
    Control,
}

impl Modifier {
    /// Collapse raw modifier flags. Shift wins over Control.
    pub const fn from_flags(shift: bool, control: bool) -> Self {
        match (shift, control) {
            (true, _) => Self::Shift,
            (false, true) => Self::Control,
            (false, false) => Self::None,
        }
    }
}

/// One discrete input event: a key chord or a literal text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Key { key: Key, modifier: Modifier },
    Text(String),
}

impl Input {
    pub const fn key(key: Key) -> Self {
        Self::Key {
            key,
            modifier: Modifier::None,
        }
    }

    pub const fn chord(key: Key, modifier: Modifier) -> Self {
        Self::Key { key, modifier }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

/// Fold Shift into printable characters.
///
/// `Char('a') + Shift` becomes `Char('A')`, `Char('4') + Shift` becomes `Char('$')`,
/// and any other shifted character is taken as already shifted.
pub(crate) const fn normalize(key: Key, modifier: Modifier) -> (Key, Modifier) {
    match (key, modifier) {
        (Key::Char('4'), Modifier::Shift) => (Key::Char('$'), Modifier::None),
        (Key::Char(c), Modifier::Shift) => (Key::Char(c.to_ascii_uppercase()), Modifier::None),
        other => other,
    }
}
