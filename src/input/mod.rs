//! Input sources feeding the engine.
//!
//! An [`InputSource`] reports what happened during one tick: an optional
//! literal text run and any number of key presses, each with the modifier
//! state at the time. [`drain`] turns that into the ordered event list the
//! engine consumes, text first.

pub mod script;

use std::collections::VecDeque;

use crate::editor::{Input, Key, Modifier};

pub use script::{ScriptError, parse};

/// Something that produces input events once per tick.
pub trait InputSource {
    /// Literal text typed since the last tick, if any.
    fn next_text_run(&mut self) -> Option<String>;

    /// The next key pressed this tick, if any.
    fn next_key(&mut self) -> Option<Key>;

    /// Modifier state for the key most recently returned by [`Self::next_key`].
    fn modifier(&self) -> Modifier;
}

/// Collect one tick's events from a source: the text run, then keys in order.
pub fn drain<S: InputSource + ?Sized>(source: &mut S) -> Vec<Input> {
    let mut inputs = Vec::new();
    if let Some(text) = source.next_text_run().filter(|text| !text.is_empty()) {
        inputs.push(Input::Text(text));
    }
    while let Some(key) = source.next_key() {
        inputs.push(Input::Key {
            key,
            modifier: source.modifier(),
        });
    }
    inputs
}

/// A canned sequence of events, replayed tick by tick.
///
/// Each tick yields a leading text run (if the next event is text) followed
/// by keys up to the next text run, so the original order is preserved.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Input>,
    modifier: Modifier,
    text_taken: bool,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
            modifier: Modifier::None,
            text_taken: false,
        }
    }

    /// Build a source from key notation such as `i 'hello' escape ^r`.
    ///
    /// # Errors
    ///
    /// Returns a [`ScriptError`] if the notation cannot be parsed.
    pub fn from_script(source: &str) -> Result<Self, ScriptError> {
        Ok(Self::new(parse(source)?))
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn next_text_run(&mut self) -> Option<String> {
        self.text_taken = true;
        match self.queue.front() {
            Some(Input::Text(_)) => match self.queue.pop_front() {
                Some(Input::Text(text)) => Some(text),
                _ => None,
            },
            _ => None,
        }
    }

    fn next_key(&mut self) -> Option<Key> {
        if !self.text_taken {
            return None;
        }
        match self.queue.front() {
            Some(&Input::Key { key, modifier }) => {
                self.queue.pop_front();
                self.modifier = modifier;
                Some(key)
            }
            _ => {
                self.text_taken = false;
                None
            }
        }
    }

    fn modifier(&self) -> Modifier {
        self.modifier
    }
}
