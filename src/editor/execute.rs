//! Command execution.
//!
//! Every command is total: positions are clamped where they are computed and
//! the cursor is re-clamped to the mode's bounds after each command.

use tracing::debug;

use super::buffer::Cursor;
use super::command::Command;
use super::engine::Engine;
use super::history::HistoryEntry;
use super::mode::{InsertKind, Mode};

impl Engine {
    pub(super) fn execute(&mut self, command: Command) {
        debug!(?command, mode = ?self.mode, x = self.cursor.x, y = self.cursor.y, "execute");

        // Anything that is not itself an accumulating edit seals the open entry.
        if !command.is_edit() && command != Command::Undo {
            self.history.commit();
        }

        match command {
            Command::MoveBy { dx, dy } => self.move_by(dx, dy),
            Command::GoToLineStart => {
                self.cursor.x = 0;
                self.cursor.glued = false;
            }
            Command::GoToLineEnd => self.go_to_line_end(),
            Command::GoToFileStart => self.cursor = Cursor::new(),
            Command::NextWordStart => {
                let (x, y) = self.buffer.next_word_start(self.cursor.x, self.cursor.y);
                self.cursor = Cursor::at(x, y);
            }
            Command::FindForward(target) => {
                if let Some(x) = self.buffer.find_forward(self.cursor.x, self.cursor.y, target) {
                    self.cursor = Cursor::at(x, self.cursor.y);
                }
            }
            Command::FindBackward(target) => {
                if let Some(x) = self.buffer.find_backward(self.cursor.x, self.cursor.y, target) {
                    self.cursor = Cursor::at(x, self.cursor.y);
                }
            }
            Command::SetPending(pending) => self.pending = pending,
            Command::BeginInsert(kind) => self.begin_insert(kind),
            Command::ChangeMode(mode) => self.change_mode(mode),
            Command::AppendText(text) => self.append_text(&text),
            Command::InsertNewLine => self.insert_new_line(),
            Command::DeleteForward => self.delete_forward(),
            Command::Backspace => self.backspace(),
            Command::DeleteLine => self.delete_line(),
            Command::DeleteToLineEnd => self.delete_to_line_end(),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Repeat => self.repeat(),
        }

        self.clamp_cursor();
    }

    fn move_by(&mut self, dx: isize, dy: isize) {
        let last_line = self.buffer.line_count() - 1;
        let y = self.cursor.y.saturating_add_signed(dy).min(last_line);
        let len = self.buffer.line_len(y);
        self.cursor.y = y;

        if dy != 0 && dx >= 0 && self.cursor.glued {
            self.cursor.x = len.saturating_sub(1);
            return;
        }

        self.cursor.glued = false;
        self.cursor.x = if len == 0 {
            0
        } else {
            let x = self.cursor.x.saturating_add_signed(dx);
            self.buffer.clamp_col(x, y, self.mode)
        };
    }

    fn go_to_line_end(&mut self) {
        self.cursor.x = self.buffer.max_col(self.cursor.y, self.mode);
        self.cursor.glued = true;
    }

    fn begin_insert(&mut self, kind: InsertKind) {
        self.last_insertion = Some(kind);
        self.mode = Mode::Insert;
        match kind {
            InsertKind::Insert => {}
            InsertKind::Append => self.move_by(1, 0),
            InsertKind::AppendToLineEnd => {
                self.cursor.x = self.buffer.max_col(self.cursor.y, Mode::Insert);
                self.cursor.glued = false;
            }
        }
        self.history.open_at(self.cursor.x, self.cursor.y);
    }

    fn change_mode(&mut self, target: Mode) {
        let previous = std::mem::replace(&mut self.mode, target);
        match (previous, target) {
            (Mode::Normal, Mode::Insert) => self.history.open_at(self.cursor.x, self.cursor.y),
            (Mode::Insert, Mode::Normal) => {
                self.history.commit();
            }
            _ => {}
        }
    }

    /// The open entry, anchored at the cursor if nothing is recorded yet.
    fn open_entry(&mut self) -> &mut HistoryEntry {
        let Cursor { x, y, .. } = self.cursor;
        let entry = self.history.open_mut();
        if entry.is_empty() {
            entry.start_x = x;
            entry.start_y = y;
        }
        entry
    }

    /// Normal-mode edits are their own undo step.
    fn finish_edit(&mut self) {
        if self.mode == Mode::Normal {
            self.history.commit();
        }
    }

    fn append_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let Cursor { x, y, .. } = self.cursor;
        self.open_entry().record_added(text);
        self.buffer.insert(x, y, text);
        self.cursor.x = x + text.chars().count();
        self.cursor.glued = false;
        self.finish_edit();
    }

    fn insert_new_line(&mut self) {
        let Cursor { x, y, .. } = self.cursor;
        self.open_entry().record_added("\n");
        self.buffer.insert(x, y, "\n");
        self.cursor = Cursor::at(0, y + 1);
        self.finish_edit();
    }

    fn delete_forward(&mut self) {
        let Cursor { x, y, .. } = self.cursor;
        let at_line_end = x >= self.buffer.line_len(y);
        let is_last_line = y + 1 >= self.buffer.line_count();
        // Joining lines is an Insert-mode action; Normal mode only deletes characters.
        if at_line_end && (self.mode == Mode::Normal || is_last_line) {
            return;
        }
        self.open_entry();
        let removed = self.buffer.remove(x, y, 1);
        let entry = self.history.open_mut();
        for c in removed.chars() {
            entry.record_removed_right(c);
        }
        self.finish_edit();
    }

    fn backspace(&mut self) {
        if self.mode != Mode::Insert {
            return;
        }
        let Cursor { x, y, .. } = self.cursor;
        let (new_x, new_y) = match (x, y) {
            (0, 0) => return,
            (0, _) => (self.buffer.line_len(y - 1), y - 1),
            _ => (x - 1, y),
        };
        self.open_entry();
        let removed = self.buffer.remove(new_x, new_y, 1);
        if let Some(c) = removed.chars().next() {
            self.history.open_mut().record_removed_left(c, new_x, new_y);
        }
        self.cursor = Cursor::at(new_x, new_y);
    }

    fn delete_line(&mut self) {
        let y = self.cursor.y;
        let line = self.buffer.line_at(y).unwrap_or_default();
        let len = line.chars().count();
        let line_count = self.buffer.line_count();

        let entry = if y + 1 < line_count {
            self.buffer.remove(0, y, len + 1);
            HistoryEntry {
                removed_right: format!("{line}\n"),
                ..HistoryEntry::anchored(0, y)
            }
        } else if y > 0 {
            let prev_len = self.buffer.line_len(y - 1);
            self.buffer.remove(prev_len, y - 1, len + 1);
            // Undo puts the cursor back on the restored line, not the anchor line.
            HistoryEntry {
                removed_right: format!("\n{line}"),
                undo_cursor: Some((0, y)),
                ..HistoryEntry::anchored(prev_len, y - 1)
            }
        } else {
            self.buffer.remove(0, 0, len);
            HistoryEntry {
                removed_right: line,
                ..HistoryEntry::anchored(0, 0)
            }
        };
        if entry.is_empty() {
            return;
        }
        self.history.commit_entry(entry);
        self.cursor.y = y;
    }

    fn delete_to_line_end(&mut self) {
        let Cursor { x, y, .. } = self.cursor;
        let len = self.buffer.line_len(y);
        if x >= len {
            return;
        }
        let removed = self.buffer.remove(x, y, len - x);
        self.history.commit_entry(HistoryEntry {
            removed_right: removed,
            ..HistoryEntry::anchored(x, y)
        });
    }

    fn undo(&mut self) {
        let Some(entry) = self
            .history
            .take_open_for_undo()
            .or_else(|| self.history.step_back())
        else {
            return;
        };
        debug!(index = self.history.index(), "undo");

        let (x, y) = (entry.start_x, entry.start_y);
        if !entry.added.is_empty() {
            self.buffer.remove(x, y, entry.added.chars().count());
        }
        self.buffer.insert(x, y, &entry.removed());
        let (x, y) = entry.undo_position();
        self.cursor = Cursor::at(x, y);
    }

    fn redo(&mut self) {
        let Some(entry) = self.history.step_forward() else {
            return;
        };
        debug!(index = self.history.index(), "redo");

        let (x, y) = (entry.start_x, entry.start_y);
        self.apply(&entry);
        self.cursor = Cursor::at(x, y);
    }

    /// Apply an entry forward at its anchor: drop what it removed, insert what
    /// it added. Returns the text actually removed.
    fn apply(&mut self, entry: &HistoryEntry) -> String {
        let (x, y) = (entry.start_x, entry.start_y);
        let count = entry.removed_left.chars().count() + entry.removed_right.chars().count();
        let removed = if count > 0 {
            self.buffer.remove(x, y, count)
        } else {
            String::new()
        };
        self.buffer.insert(x, y, &entry.added);
        removed
    }

    /// Re-enter Insert the last way it was entered, replay the most recent
    /// entry at the new cursor, then leave Insert.
    fn repeat(&mut self) {
        let (Some(kind), Some(entry)) = (self.last_insertion, self.history.last_applied()) else {
            return;
        };
        let entry = entry.clone();

        self.begin_insert(kind);
        let mut replay = entry.reanchored(self.cursor.x, self.cursor.y);
        debug!(anchor = ?(replay.start_x, replay.start_y), "repeat");
        // The replayed removal may run short near the end of the buffer.
        replay.removed_right = self.apply(&replay);
        replay.removed_left.clear();
        let (x, y) = replay.added_end();
        self.cursor = Cursor::at(x, y);
        *self.history.open_mut() = replay;

        self.move_by(-1, 0);
        self.change_mode(Mode::Normal);
    }

    /// Keep the cursor inside the buffer and the current mode's column range.
    fn clamp_cursor(&mut self) {
        self.cursor.y = self.cursor.y.min(self.buffer.line_count() - 1);
        self.cursor.x = self.buffer.clamp_col(self.cursor.x, self.cursor.y, self.mode);
    }
}
