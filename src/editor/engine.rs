//! The editing engine and its read-only accessors.

use tracing::trace;

use crate::input::{InputSource, drain};

use super::buffer::{Buffer, Cursor};
use super::history::History;
use super::key::Input;
use super::mode::{InsertKind, Mode, Pending};
use super::resolver::resolve;

/// A modal editing engine: buffer, cursor, mode and undo history.
///
/// [`Engine::process`] is the only mutator. Renderers read the buffer,
/// cursor and mode back through the accessors.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(super) buffer: Buffer,
    pub(super) cursor: Cursor,
    pub(super) mode: Mode,
    pub(super) pending: Pending,
    pub(super) history: History,
    pub(super) last_insertion: Option<InsertKind>,
}

impl Engine {
    /// Create an engine over the given text, cursor at the origin in Normal mode.
    pub fn new(initial_text: &str) -> Self {
        Self {
            buffer: Buffer::from_text(initial_text),
            cursor: Cursor::new(),
            mode: Mode::Normal,
            pending: Pending::None,
            history: History::new(),
            last_insertion: None,
        }
    }

    /// Handle one input event.
    pub fn process(&mut self, input: &Input) {
        let pending = std::mem::take(&mut self.pending);
        let commands = resolve(self.mode, pending, input);
        trace!(?input, ?pending, mode = ?self.mode, resolved = commands.len(), "input");
        for command in commands {
            self.execute(command);
        }
    }

    /// Drain one tick's worth of events from a source and process them in order.
    pub fn tick<S: InputSource + ?Sized>(&mut self, source: &mut S) {
        for input in drain(source) {
            self.process(&input);
        }
    }

    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn cursor_x(&self) -> usize {
        self.cursor.x
    }

    pub const fn cursor_y(&self) -> usize {
        self.cursor.y
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn pending(&self) -> Pending {
        self.pending
    }

    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The buffer's lines in order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.buffer.lines()
    }

    /// The buffer's text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.buffer.text()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new("")
    }
}
