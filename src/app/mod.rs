//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use input::TerminalInput;
pub use model::Model;
pub use update::{Message, update};

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

/// Default input tick, roughly one frame at 60 Hz.
pub const DEFAULT_TICK_MS: u64 = 16;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    line_numbers: bool,
    status_visible: bool,
    tick: Duration,
}

impl App {
    /// Create a new application, optionally editing the given file.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            line_numbers: true,
            status_visible: true,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }

    /// Show or hide the line-number gutter.
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Show or hide the status bar.
    pub fn with_status(mut self, visible: bool) -> Self {
        self.status_visible = visible;
        self
    }

    /// Set the input tick length in milliseconds. Zero falls back to the default.
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        let tick_ms = if tick_ms == 0 { DEFAULT_TICK_MS } else { tick_ms };
        self.tick = Duration::from_millis(tick_ms);
        self
    }
}

/// Read the text to start editing with. A missing file starts empty.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_initial_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.exists() => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => Ok(String::new()),
    }
}
