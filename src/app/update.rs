use tracing::trace;

use crate::app::Model;
use crate::editor::Input;

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// One tick's worth of editor input, text run first.
    Input(Vec<Input>),
    /// Terminal resized to (width, height).
    Resize(u16, u16),
    /// Repaint without changing state.
    Redraw,
    /// Leave the application.
    Quit,
}

/// Pure state transition: apply a message to the model.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Input(inputs) => {
            trace!(count = inputs.len(), "tick input");
            for input in &inputs {
                model.engine.process(input);
            }
            model.sync_viewport();
        }
        Message::Resize(width, height) => model.resize(width, height),
        Message::Redraw => {}
        Message::Quit => model.should_quit = true,
    }
    model
}
