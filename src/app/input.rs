use std::collections::VecDeque;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message};
use crate::editor::{Key, Modifier};
use crate::input::InputSource;

/// Terminal events gathered over one tick, exposed as an [`InputSource`].
///
/// Pasted text accumulates into the tick's text run; key presses queue up
/// in arrival order with their modifier state.
#[derive(Debug, Default)]
pub struct TerminalInput {
    text: String,
    keys: VecDeque<(Key, Modifier)>,
    modifier: Modifier,
}

impl TerminalInput {
    pub fn push_key(&mut self, key: Key, modifier: Modifier) {
        self.keys.push_back((key, modifier));
    }

    pub fn push_paste(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.keys.is_empty()
    }
}

impl InputSource for TerminalInput {
    fn next_text_run(&mut self) -> Option<String> {
        (!self.text.is_empty()).then(|| std::mem::take(&mut self.text))
    }

    fn next_key(&mut self) -> Option<Key> {
        let (key, modifier) = self.keys.pop_front()?;
        self.modifier = modifier;
        Some(key)
    }

    fn modifier(&self) -> Modifier {
        self.modifier
    }
}

impl App {
    /// Route a terminal event: app-level events become messages, editor
    /// input is queued for the current tick.
    pub(super) fn handle_event(event: Event, pending: &mut TerminalInput) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(key, pending),
            Event::Paste(text) => {
                pending.push_paste(&text);
                None
            }
            Event::Resize(width, height) => Some(Message::Resize(width, height)),
            Event::FocusGained => Some(Message::Redraw),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, pending: &mut TerminalInput) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q' | 'Q'))
        {
            return Some(Message::Quit);
        }
        if let Some((code, modifier)) = map_key(key) {
            pending.push_key(code, modifier);
        }
        None
    }
}

/// Translate a crossterm key event into an editor key.
///
/// Alt chords and keys the editor has no use for are dropped.
pub(super) fn map_key(key: KeyEvent) -> Option<(Key, Modifier)> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    let code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Escape,
        KeyCode::Tab => Key::Tab,
        _ => return None,
    };
    let modifier = Modifier::from_flags(
        key.modifiers.contains(KeyModifiers::SHIFT),
        key.modifiers.contains(KeyModifiers::CONTROL),
    );
    Some((code, modifier))
}
