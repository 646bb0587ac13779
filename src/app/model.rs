use std::path::PathBuf;

use crate::editor::Engine;
use crate::ui::viewport::Viewport;

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone)]
pub struct Model {
    /// The editing engine: buffer, cursor, mode and history.
    pub engine: Engine,
    /// File the buffer was loaded from, if any.
    pub file_path: Option<PathBuf>,
    /// Visible window of buffer lines.
    pub viewport: Viewport,
    pub line_numbers: bool,
    pub status_visible: bool,
    pub should_quit: bool,
}

impl Model {
    /// Create a model over `text` for a terminal of the given size.
    pub fn new(file_path: Option<PathBuf>, text: &str, terminal_size: (u16, u16)) -> Self {
        let engine = Engine::new(text);
        let total_lines = engine.buffer().line_count();
        let (width, height) = terminal_size;
        Self {
            engine,
            file_path,
            viewport: Viewport::new(width, height.saturating_sub(1), total_lines),
            line_numbers: true,
            status_visible: true,
            should_quit: false,
        }
    }

    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    pub fn with_status(mut self, visible: bool) -> Self {
        let (width, height) = (self.viewport.width(), self.terminal_height());
        self.status_visible = visible;
        self.resize(width, height);
        self
    }

    /// Rows available for buffer text once the status bar is accounted for.
    pub const fn text_height(&self, terminal_height: u16) -> u16 {
        if self.status_visible {
            terminal_height.saturating_sub(1)
        } else {
            terminal_height
        }
    }

    const fn terminal_height(&self) -> u16 {
        if self.status_visible {
            self.viewport.height() + 1
        } else {
            self.viewport.height()
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        let text_height = self.text_height(height);
        self.viewport.resize(width, text_height);
        self.sync_viewport();
    }

    /// Track buffer length and keep the cursor line on screen.
    pub fn sync_viewport(&mut self) {
        self.viewport
            .set_total_lines(self.engine.buffer().line_count());
        self.viewport.ensure_visible(self.engine.cursor_y());
    }

    /// Name shown in the status bar.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map_or_else(
                || "[scratch]".to_string(),
                |name| name.to_string_lossy().to_string(),
            )
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(None, "", (80, 24))
    }
}
