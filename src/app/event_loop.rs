use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::cursor::SetCursorStyle;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::app::input::TerminalInput;
use crate::app::{App, Message, Model, read_initial_text, update};
use crate::editor::Mode;
use crate::input::drain;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the terminal cannot be
    /// initialized, or the event loop hits an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let text = read_initial_text(self.file_path.as_deref())?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; vimlet requires an interactive terminal")?;
        let size = terminal.size()?;
        execute!(stdout(), EnableBracketedPaste)?;

        let mut model = Model::new(self.file_path.clone(), &text, (size.width, size.height))
            .with_line_numbers(self.line_numbers)
            .with_status(self.status_visible);
        info!(
            file = ?self.file_path,
            lines = model.engine.buffer().line_count(),
            "editor started"
        );

        let result = Self::event_loop(&mut terminal, &mut model, self.tick);

        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
        ratatui::restore();

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model, tick: Duration) -> Result<()> {
        let mut pending = TerminalInput::default();
        let mut needs_render = true;
        let mut cursor_mode = None;
        let mut frame_idx: u64 = 0;

        loop {
            if needs_render {
                frame_idx += 1;
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                let mode = model.engine.mode();
                if cursor_mode != Some(mode) {
                    execute!(stdout(), cursor_style(mode))?;
                    cursor_mode = Some(mode);
                }
                needs_render = false;
            }

            // Gather everything that arrives within one tick.
            let deadline = Instant::now() + tick;
            while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
                if !event::poll(remaining)? {
                    break;
                }
                if let Some(msg) = Self::handle_event(event::read()?, &mut pending) {
                    debug!(frame = frame_idx, ?msg, "app message");
                    *model = update(std::mem::take(model), msg);
                    needs_render = true;
                }
            }

            if !pending.is_empty() {
                let inputs = drain(&mut pending);
                *model = update(std::mem::take(model), Message::Input(inputs));
                needs_render = true;
            }

            if model.should_quit {
                break;
            }
        }
        Ok(())
    }
}

const fn cursor_style(mode: Mode) -> SetCursorStyle {
    match mode {
        Mode::Normal => SetCursorStyle::SteadyBlock,
        Mode::Insert => SetCursorStyle::SteadyBar,
    }
}
