// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorMode)
    clippy::module_name_repetitions
)]

//! # Vimlet
//!
//! A small modal (vi-style) text editor.
//!
//! The editing engine is independent of any terminal: it consumes abstract
//! key and text events and exposes its buffer, cursor and mode for
//! rendering. A ratatui front end drives it interactively.
//!
//! ## Architecture
//!
//! The front end uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state, including the engine
//! - **Message**: Ticks of input, resizes, quit
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`editor`]: Buffer, cursor, command resolution, execution and history
//! - [`input`]: Input sources and the key notation used for scripting
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved flag defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod input;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Engine, Input, Key, Mode, Modifier};
    pub use crate::input::{InputSource, ScriptedInput};
    pub use crate::ui::viewport::Viewport;
}
