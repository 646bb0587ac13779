//! Abstract commands produced by the resolver and applied by the executor.

use super::mode::{InsertKind, Mode, Pending};

/// A single editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Motion
    /// Move by a relative offset, clamped to the buffer.
    MoveBy { dx: isize, dy: isize },
    /// Column 0.
    GoToLineStart,
    /// Last column of the line; glues the cursor to line ends.
    GoToLineEnd,
    /// First column of the first line.
    GoToFileStart,
    /// Start of the next word.
    NextWordStart,
    /// Next occurrence of the character to the right on the current line.
    FindForward(char),
    /// Previous occurrence of the character to the left on the current line.
    FindBackward(char),

    // State
    /// Arm a two-key prefix.
    SetPending(Pending),
    /// Enter Insert mode the given way and remember it for repeat.
    BeginInsert(InsertKind),
    /// Switch mode without moving.
    ChangeMode(Mode),

    // Edits recorded into the open history entry
    /// Insert text without line breaks at the cursor.
    AppendText(String),
    /// Split the line at the cursor.
    InsertNewLine,
    /// Delete under the cursor, joining with the next line at line end in Insert mode.
    DeleteForward,
    /// Delete left of the cursor, joining with the previous line at column 0.
    Backspace,

    // Single-shot edits, each its own undo step
    DeleteLine,
    DeleteToLineEnd,

    // History
    Undo,
    Redo,
    /// Replay the last insert session at the cursor.
    Repeat,
}

impl Command {
    /// Whether the command accumulates into the open history entry
    /// instead of sealing it first.
    pub const fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::AppendText(_) | Self::InsertNewLine | Self::DeleteForward | Self::Backspace
        )
    }
}
