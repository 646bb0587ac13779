//! Editor modes and the transient prefixes that live inside Normal mode.

/// Top-level editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Navigation and single-shot commands.
    #[default]
    Normal,
    /// Text entry.
    Insert,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
        }
    }
}

/// A two-key command prefix waiting for one more event.
///
/// Whatever event arrives next consumes the prefix, whether or not it
/// completes a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pending {
    #[default]
    None,
    /// `g`, completed by a second `g`.
    G,
    /// `f`, completed by the character to find.
    FindForward,
    /// `F`, completed by the character to find.
    FindBackward,
    /// `d`, completed by a second `d`.
    Delete,
}

impl Pending {
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Short label for status lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::G => "g",
            Self::FindForward => "f",
            Self::FindBackward => "F",
            Self::Delete => "d",
        }
    }
}

/// The way Insert mode was entered. The repeat command replays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertKind {
    /// `i`: insert at the cursor.
    Insert,
    /// `a`: insert after the cursor.
    Append,
    /// `A`: insert at the end of the line.
    AppendToLineEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_strings() {
        assert_eq!(Mode::Normal.as_str(), "NORMAL");
        assert_eq!(Mode::Insert.as_str(), "INSERT");
    }

    #[test]
    fn test_default_mode_is_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn test_pending_activity() {
        assert!(!Pending::None.is_active());
        assert!(Pending::G.is_active());
        assert!(Pending::FindBackward.is_active());
        assert_eq!(Pending::FindBackward.as_str(), "F");
    }
}
