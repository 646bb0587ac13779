//! Maps input events to commands.
//!
//! Resolution is pure: it looks only at the mode, the pending prefix and the
//! event itself. Anything that depends on buffer contents (where a find lands,
//! how far a motion can go) is left to the executor.

use super::command::Command;
use super::key::{Input, Key, Modifier, normalize};
use super::mode::{InsertKind, Mode, Pending};

/// Resolve one input event into zero or more commands.
///
/// `pending` is the prefix that was armed before this event; the caller is
/// expected to have cleared it, since every event consumes a prefix.
pub fn resolve(mode: Mode, pending: Pending, input: &Input) -> Vec<Command> {
    match input {
        Input::Text(text) => resolve_text(mode, pending, text),
        Input::Key { key, modifier } => {
            let (key, modifier) = normalize(*key, *modifier);
            resolve_key(mode, pending, key, modifier)
        }
    }
}

fn resolve_text(mode: Mode, pending: Pending, text: &str) -> Vec<Command> {
    if mode == Mode::Insert {
        return literal_text(text);
    }
    match text.chars().next() {
        Some(c) if pending.is_active() => complete_pending(pending, c),
        _ => Vec::new(),
    }
}

/// Split a literal text run into line-free appends and line breaks.
///
/// Control characters other than tab and newline are dropped.
fn literal_text(text: &str) -> Vec<Command> {
    let text = text.replace("\r\n", "\n");
    let mut commands = Vec::new();
    for (i, segment) in text.split('\n').enumerate() {
        if i > 0 {
            commands.push(Command::InsertNewLine);
        }
        let segment: String = segment
            .chars()
            .filter(|&c| c == '\t' || !c.is_control())
            .collect();
        if !segment.is_empty() {
            commands.push(Command::AppendText(segment));
        }
    }
    commands
}

fn complete_pending(pending: Pending, c: char) -> Vec<Command> {
    match (pending, c) {
        (Pending::G, 'g') => vec![Command::GoToFileStart],
        (Pending::Delete, 'd') => vec![Command::DeleteLine],
        (Pending::FindForward, c) => vec![Command::FindForward(c)],
        (Pending::FindBackward, c) => vec![Command::FindBackward(c)],
        _ => Vec::new(),
    }
}

fn resolve_key(mode: Mode, pending: Pending, key: Key, modifier: Modifier) -> Vec<Command> {
    if pending.is_active() {
        return match (key, modifier) {
            (Key::Char(c), Modifier::None) => complete_pending(pending, c),
            _ => Vec::new(),
        };
    }

    let command = match (mode, key, modifier) {
        // Motion
        (Mode::Normal, Key::Char('j'), Modifier::None) | (_, Key::Down, Modifier::None) => {
            Command::MoveBy { dx: 0, dy: 1 }
        }
        (Mode::Normal, Key::Char('k'), Modifier::None) | (_, Key::Up, Modifier::None) => {
            Command::MoveBy { dx: 0, dy: -1 }
        }
        (Mode::Normal, Key::Char('h'), Modifier::None) | (_, Key::Left, Modifier::None) => {
            Command::MoveBy { dx: -1, dy: 0 }
        }
        (Mode::Normal, Key::Char('l'), Modifier::None) | (_, Key::Right, Modifier::None) => {
            Command::MoveBy { dx: 1, dy: 0 }
        }
        (Mode::Normal, Key::Char('0'), Modifier::None) | (_, Key::Home, Modifier::None) => {
            Command::GoToLineStart
        }
        (Mode::Normal, Key::Char('$'), Modifier::None) | (_, Key::End, Modifier::None) => {
            Command::GoToLineEnd
        }
        (Mode::Normal, Key::Char('w'), Modifier::None) => Command::NextWordStart,

        // Prefixes
        (Mode::Normal, Key::Char('g'), Modifier::None) => Command::SetPending(Pending::G),
        (Mode::Normal, Key::Char('f'), Modifier::None) => {
            Command::SetPending(Pending::FindForward)
        }
        (Mode::Normal, Key::Char('F'), Modifier::None) => {
            Command::SetPending(Pending::FindBackward)
        }
        (Mode::Normal, Key::Char('d'), Modifier::None) => Command::SetPending(Pending::Delete),

        // Entering Insert
        (Mode::Normal, Key::Char('i'), Modifier::None) => Command::BeginInsert(InsertKind::Insert),
        (Mode::Normal, Key::Char('a'), Modifier::None) => Command::BeginInsert(InsertKind::Append),
        (Mode::Normal, Key::Char('A'), Modifier::None) => {
            Command::BeginInsert(InsertKind::AppendToLineEnd)
        }

        // Normal-mode edits
        (Mode::Normal, Key::Char('x') | Key::Delete, Modifier::None)
        | (Mode::Insert, Key::Delete, Modifier::None) => Command::DeleteForward,
        (Mode::Normal, Key::Char('D'), Modifier::None) => Command::DeleteToLineEnd,

        // History
        (Mode::Normal, Key::Char('u'), Modifier::None) => Command::Undo,
        (Mode::Normal, Key::Char('r'), Modifier::Control) => Command::Redo,
        (Mode::Normal, Key::Char('.'), Modifier::None) => Command::Repeat,

        // Insert mode
        (Mode::Insert, Key::Escape, Modifier::None) => {
            return vec![
                Command::MoveBy { dx: -1, dy: 0 },
                Command::ChangeMode(Mode::Normal),
            ];
        }
        (Mode::Insert, Key::Enter, Modifier::None) => Command::InsertNewLine,
        (Mode::Insert, Key::Backspace, Modifier::None) => Command::Backspace,
        (Mode::Insert, Key::Tab, Modifier::None) => Command::AppendText("\t".to_string()),
        (Mode::Insert, Key::Char(c), Modifier::None) if !c.is_control() => {
            Command::AppendText(c.to_string())
        }

        _ => return Vec::new(),
    };
    vec![command]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(mode: Mode, key: Key) -> Vec<Command> {
        resolve(mode, Pending::None, &Input::key(key))
    }

    #[test]
    fn test_hjkl_in_normal_mode() {
        assert_eq!(
            key(Mode::Normal, Key::Char('j')),
            vec![Command::MoveBy { dx: 0, dy: 1 }]
        );
        assert_eq!(
            key(Mode::Normal, Key::Char('h')),
            vec![Command::MoveBy { dx: -1, dy: 0 }]
        );
    }

    #[test]
    fn test_arrows_work_in_any_mode() {
        for mode in [Mode::Normal, Mode::Insert] {
            assert_eq!(key(mode, Key::Up), vec![Command::MoveBy { dx: 0, dy: -1 }]);
            assert_eq!(key(mode, Key::Right), vec![Command::MoveBy { dx: 1, dy: 0 }]);
            assert_eq!(key(mode, Key::End), vec![Command::GoToLineEnd]);
        }
    }

    #[test]
    fn test_letters_are_text_in_insert_mode() {
        assert_eq!(
            key(Mode::Insert, Key::Char('j')),
            vec![Command::AppendText("j".to_string())]
        );
    }

    #[test]
    fn test_insert_mode_text_run() {
        assert_eq!(
            resolve(Mode::Insert, Pending::None, &Input::text("Hello, world!")),
            vec![Command::AppendText("Hello, world!".to_string())]
        );
    }

    #[test]
    fn test_text_run_with_newlines_splits() {
        assert_eq!(
            resolve(Mode::Insert, Pending::None, &Input::text("ab\r\n\ncd")),
            vec![
                Command::AppendText("ab".to_string()),
                Command::InsertNewLine,
                Command::InsertNewLine,
                Command::AppendText("cd".to_string()),
            ]
        );
    }

    #[test]
    fn test_text_run_ignored_in_normal_mode() {
        assert!(resolve(Mode::Normal, Pending::None, &Input::text("dd")).is_empty());
    }

    #[test]
    fn test_shift_a_appends_to_line_end() {
        assert_eq!(
            resolve(
                Mode::Normal,
                Pending::None,
                &Input::chord(Key::Char('a'), Modifier::Shift)
            ),
            vec![Command::BeginInsert(InsertKind::AppendToLineEnd)]
        );
    }

    #[test]
    fn test_shift_four_goes_to_line_end() {
        assert_eq!(
            resolve(
                Mode::Normal,
                Pending::None,
                &Input::chord(Key::Char('4'), Modifier::Shift)
            ),
            vec![Command::GoToLineEnd]
        );
    }

    #[test]
    fn test_control_r_redoes() {
        assert_eq!(
            resolve(
                Mode::Normal,
                Pending::None,
                &Input::chord(Key::Char('r'), Modifier::Control)
            ),
            vec![Command::Redo]
        );
        assert!(key(Mode::Normal, Key::Char('r')).is_empty());
    }

    #[test]
    fn test_escape_moves_left_then_leaves_insert() {
        assert_eq!(
            key(Mode::Insert, Key::Escape),
            vec![
                Command::MoveBy { dx: -1, dy: 0 },
                Command::ChangeMode(Mode::Normal)
            ]
        );
        assert!(key(Mode::Normal, Key::Escape).is_empty());
    }

    #[test]
    fn test_g_prefix() {
        assert_eq!(
            key(Mode::Normal, Key::Char('g')),
            vec![Command::SetPending(Pending::G)]
        );
        assert_eq!(
            resolve(Mode::Normal, Pending::G, &Input::key(Key::Char('g'))),
            vec![Command::GoToFileStart]
        );
        assert!(resolve(Mode::Normal, Pending::G, &Input::key(Key::Char('j'))).is_empty());
    }

    #[test]
    fn test_find_prefix_accepts_key_or_text() {
        assert_eq!(
            resolve(Mode::Normal, Pending::FindForward, &Input::key(Key::Char(';'))),
            vec![Command::FindForward(';')]
        );
        assert_eq!(
            resolve(Mode::Normal, Pending::FindBackward, &Input::text("r")),
            vec![Command::FindBackward('r')]
        );
        assert!(resolve(Mode::Normal, Pending::FindForward, &Input::key(Key::Escape)).is_empty());
    }

    #[test]
    fn test_dd_deletes_line() {
        assert_eq!(
            resolve(Mode::Normal, Pending::Delete, &Input::key(Key::Char('d'))),
            vec![Command::DeleteLine]
        );
    }

    #[test]
    fn test_delete_key_in_both_modes() {
        assert_eq!(key(Mode::Normal, Key::Delete), vec![Command::DeleteForward]);
        assert_eq!(key(Mode::Insert, Key::Delete), vec![Command::DeleteForward]);
        assert_eq!(key(Mode::Normal, Key::Char('x')), vec![Command::DeleteForward]);
    }

    #[test]
    fn test_word_motion_is_routed() {
        assert_eq!(key(Mode::Normal, Key::Char('w')), vec![Command::NextWordStart]);
    }

    #[test]
    fn test_unmapped_keys_resolve_to_nothing() {
        assert!(key(Mode::Normal, Key::Char('z')).is_empty());
        assert!(key(Mode::Normal, Key::Enter).is_empty());
        assert!(key(Mode::Insert, Key::Char('\u{7}')).is_empty());
    }
}
