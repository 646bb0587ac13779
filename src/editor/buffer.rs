//! Line-oriented text storage and the cursor.
//!
//! Columns are char indices. The valid column range depends on the mode:
//! Normal mode sits on a character, Insert mode may sit one past the end.

use ropey::Rope;

use super::mode::Mode;

/// Cursor position in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Zero-based column, in chars.
    pub x: usize,
    /// Zero-based line index.
    pub y: usize,
    /// Track each line's end during vertical motion (set by an explicit
    /// end-of-line jump, cleared by any other motion).
    pub(crate) glued: bool,
}

impl Cursor {
    /// Create a cursor at column 0 of line 0.
    pub const fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            glued: false,
        }
    }

    /// Create an unglued cursor at a specific position.
    pub const fn at(x: usize, y: usize) -> Self {
        Self { x, y, glued: false }
    }

    /// Whether vertical motion currently snaps to line ends.
    pub const fn is_glued(&self) -> bool {
        self.glued
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Blank,
    Word,
    Punct,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Blank
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

/// Line-oriented text storage backed by a rope.
///
/// The rope is built with LF as the only line break, so a buffer of `n`
/// newline characters always has `n + 1` lines and never fewer than one.
/// Columns are counted in chars.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    /// Create a buffer from text, normalizing `\r\n` and stray `\r`.
    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "");
        Self {
            rope: Rope::from_str(&normalized),
        }
    }

    /// Create a buffer holding a single empty line.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, y: usize) -> Option<String> {
        if y >= self.line_count() {
            return None;
        }
        let mut line = self.rope.line(y).to_string();
        if line.ends_with('\n') {
            line.pop();
        }
        Some(line)
    }

    /// Length of a line in chars (without trailing newline).
    pub fn line_len(&self, y: usize) -> usize {
        if y >= self.line_count() {
            return 0;
        }
        let line = self.rope.line(y);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Character at a position, if the position is inside a line.
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        (x < self.line_len(y)).then(|| self.rope.line(y).char(x))
    }

    /// All lines in order, without line breaks.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.line_count()).filter_map(|y| self.line_at(y))
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Largest column the cursor may occupy on a line in the given mode.
    ///
    /// Normal mode sits on a character, Insert mode may sit past the last one.
    pub fn max_col(&self, y: usize, mode: Mode) -> usize {
        let len = self.line_len(y);
        match mode {
            Mode::Normal => len.saturating_sub(1),
            Mode::Insert => len,
        }
    }

    /// Clamp a column to the line in the given mode.
    pub fn clamp_col(&self, x: usize, y: usize, mode: Mode) -> usize {
        x.min(self.max_col(y, mode))
    }

    /// Insert text at a position. Embedded `\n` characters create lines.
    pub fn insert(&mut self, x: usize, y: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = self.char_offset(x, y);
        self.rope.insert(at, text);
    }

    /// Remove up to `count` chars starting at a position, crossing line
    /// breaks as needed. Returns what was removed.
    pub fn remove(&mut self, x: usize, y: usize, count: usize) -> String {
        let start = self.char_offset(x, y);
        let end = start.saturating_add(count).min(self.rope.len_chars());
        if start >= end {
            return String::new();
        }
        let removed = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        removed
    }

    /// Column of the next `target` strictly right of `x` on line `y`.
    pub fn find_forward(&self, x: usize, y: usize, target: char) -> Option<usize> {
        let line = self.line_at(y)?;
        line.chars()
            .enumerate()
            .skip(x + 1)
            .find_map(|(col, c)| (c == target).then_some(col))
    }

    /// Column of the closest `target` strictly left of `x` on line `y`.
    pub fn find_backward(&self, x: usize, y: usize, target: char) -> Option<usize> {
        let before: Vec<char> = self.line_at(y)?.chars().take(x).collect();
        before.iter().rposition(|&c| c == target)
    }

    /// Position of the start of the next word after `(x, y)`.
    ///
    /// A word is a run of alphanumerics and `_`, or a run of other non-blank
    /// characters. Empty lines count as words. With no word left the result
    /// is the last character of the buffer.
    pub fn next_word_start(&self, x: usize, y: usize) -> (usize, usize) {
        let line: Vec<char> = self.line_at(y).unwrap_or_default().chars().collect();
        if let Some(&c) = line.get(x) {
            let mut col = x;
            let class = char_class(c);
            if class != CharClass::Blank {
                while col < line.len() && char_class(line[col]) == class {
                    col += 1;
                }
            }
            while col < line.len() && char_class(line[col]) == CharClass::Blank {
                col += 1;
            }
            if col < line.len() {
                return (col, y);
            }
        }

        for next in y + 1..self.line_count() {
            let chars: Vec<char> = self.line_at(next).unwrap_or_default().chars().collect();
            if chars.is_empty() {
                return (0, next);
            }
            if let Some(col) = chars.iter().position(|&c| char_class(c) != CharClass::Blank) {
                return (col, next);
            }
        }

        let last = self.line_count() - 1;
        (self.line_len(last).saturating_sub(1), last)
    }

    /// Convert a position to a rope char index, clamping the column to the line.
    fn char_offset(&self, x: usize, y: usize) -> usize {
        let y = y.min(self.line_count() - 1);
        self.rope.line_to_char(y) + x.min(self.line_len(y))
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .finish()
    }
}
