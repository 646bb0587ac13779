//! Undo/redo log of reversible edits.
//!
//! Each [`HistoryEntry`] describes one edit relative to an anchor: the text
//! inserted at the anchor, plus the text removed to its left and right. The
//! same `\n` characters the buffer uses mark line boundaries inside entries,
//! so an entry can be inverted by plain char-offset removal and insertion.

use tracing::debug;

/// One reversible edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryEntry {
    pub start_x: usize,
    pub start_y: usize,
    /// Contiguous text inserted at the anchor.
    pub added: String,
    /// Backspaced text, newest deletion first.
    pub removed_left: String,
    /// Forward-deleted text, in deletion order.
    pub removed_right: String,
    /// Where undo leaves the cursor when that is not the anchor.
    pub undo_cursor: Option<(usize, usize)>,
}

impl HistoryEntry {
    pub const fn anchored(x: usize, y: usize) -> Self {
        Self {
            start_x: x,
            start_y: y,
            added: String::new(),
            removed_left: String::new(),
            removed_right: String::new(),
            undo_cursor: None,
        }
    }

    /// An empty entry represents no edit.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed_left.is_empty() && self.removed_right.is_empty()
    }

    /// All removed text as it stood in the buffer, left part first.
    pub fn removed(&self) -> String {
        format!("{}{}", self.removed_left, self.removed_right)
    }

    /// Position just past the added text when it is inserted at the anchor.
    pub fn added_end(&self) -> (usize, usize) {
        self.added
            .chars()
            .fold((self.start_x, self.start_y), |(x, y), c| {
                if c == '\n' { (0, y + 1) } else { (x + 1, y) }
            })
    }

    /// Cursor position after this entry is undone.
    pub fn undo_position(&self) -> (usize, usize) {
        self.undo_cursor.unwrap_or((self.start_x, self.start_y))
    }

    /// Copy of this entry moved to another anchor.
    pub fn reanchored(&self, x: usize, y: usize) -> Self {
        Self {
            start_x: x,
            start_y: y,
            undo_cursor: None,
            ..self.clone()
        }
    }

    pub(crate) fn record_added(&mut self, text: &str) {
        self.added.push_str(text);
    }

    /// Record a backspace that removed `c` and left the cursor at `(x, y)`.
    ///
    /// Backspacing over text typed in this same entry just shortens it.
    pub(crate) fn record_removed_left(&mut self, c: char, x: usize, y: usize) {
        if self.added.pop().is_some() {
            return;
        }
        self.start_x = x;
        self.start_y = y;
        self.removed_left.insert(0, c);
    }

    pub(crate) fn record_removed_right(&mut self, c: char) {
        self.removed_right.push(c);
    }
}

/// Committed entries plus the open entry still accumulating edits.
///
/// `index` separates undoable entries (before it) from redoable ones (at
/// and after it).
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    index: usize,
    open: HistoryEntry,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed entries, redoable ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The undo/redo boundary.
    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The uncommitted entry.
    pub const fn open(&self) -> &HistoryEntry {
        &self.open
    }

    pub(crate) const fn open_mut(&mut self) -> &mut HistoryEntry {
        &mut self.open
    }

    /// The most recently applied entry, if any.
    pub fn last_applied(&self) -> Option<&HistoryEntry> {
        self.index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Seal the open entry and start a fresh one anchored at `(x, y)`.
    pub(crate) fn open_at(&mut self, x: usize, y: usize) {
        self.commit();
        self.open = HistoryEntry::anchored(x, y);
    }

    /// Seal the open entry. Empty entries are dropped.
    ///
    /// A committed entry lands at the boundary and discards the redo branch.
    /// Returns whether anything was committed.
    pub(crate) fn commit(&mut self) -> bool {
        let entry = std::mem::take(&mut self.open);
        if entry.is_empty() {
            return false;
        }
        debug!(
            anchor = ?(entry.start_x, entry.start_y),
            added = entry.added.len(),
            removed = entry.removed_left.len() + entry.removed_right.len(),
            discarded = self.entries.len() - self.index,
            "history commit"
        );
        self.entries.truncate(self.index);
        self.entries.push(entry);
        self.index += 1;
        true
    }

    /// Commit a complete single-shot entry.
    pub(crate) fn commit_entry(&mut self, entry: HistoryEntry) {
        self.commit();
        self.open = entry;
        self.commit();
    }

    /// Take the open entry for undoing, leaving it as the next redoable entry.
    pub(crate) fn take_open_for_undo(&mut self) -> Option<HistoryEntry> {
        if self.open.is_empty() {
            return None;
        }
        let entry = std::mem::take(&mut self.open);
        self.entries.truncate(self.index);
        self.entries.push(entry.clone());
        Some(entry)
    }

    /// Move the boundary back over one entry and return it.
    pub(crate) fn step_back(&mut self) -> Option<HistoryEntry> {
        self.index = self.index.checked_sub(1)?;
        self.entries.get(self.index).cloned()
    }

    /// Move the boundary forward over one entry and return it.
    pub(crate) fn step_forward(&mut self) -> Option<HistoryEntry> {
        let entry = self.entries.get(self.index).cloned()?;
        self.index += 1;
        Some(entry)
    }
}
