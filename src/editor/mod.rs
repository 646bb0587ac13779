//! Modal editing engine.
//!
//! Input events are resolved into [`Command`]s by a pure [`resolve`] step,
//! then applied to the buffer, cursor and mode by the [`Engine`], which
//! records every edit in an undoable [`History`].

mod buffer;
mod command;
mod engine;
mod execute;
mod history;
mod key;
mod mode;
mod resolver;

pub use buffer::{Buffer, Cursor};
pub use command::Command;
pub use engine::Engine;
pub use history::{History, HistoryEntry};
pub use key::{Input, Key, Modifier};
pub use mode::{InsertKind, Mode, Pending};
pub use resolver::resolve;
