use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::editor::Mode;

/// Status line text: mode, file, pending prefix and cursor position.
pub fn status_text(model: &Model) -> String {
    let engine = &model.engine;
    let pending = engine.pending().as_str();
    let pending = if pending.is_empty() {
        String::new()
    } else {
        format!("  {pending}")
    };
    format!(
        " {}  {}{}  Ln {}, Col {}  Ctrl+Q:quit",
        engine.mode().as_str(),
        model.display_name(),
        pending,
        engine.cursor_y() + 1,
        engine.cursor_x() + 1,
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let bg = match model.engine.mode() {
        Mode::Normal => Color::Magenta,
        Mode::Insert => Color::Blue,
    };
    let status_bar =
        Paragraph::new(status_text(model)).style(Style::default().bg(bg).fg(Color::White));
    frame.render_widget(status_bar, area);
}
