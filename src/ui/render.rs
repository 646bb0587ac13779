use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::app::Model;
use crate::editor::Mode;

use super::status;

/// Columns a tab occupies on screen.
pub const TAB_WIDTH: usize = 4;

/// Render the whole screen: buffer text, then the status bar.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let status_rows = u16::from(model.status_visible);
    let text_area = Rect {
        height: area.height.saturating_sub(status_rows),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    render_buffer(model, frame, text_area);
    if model.status_visible && area.height > 0 {
        status::render_status_bar(model, frame, status_area);
    }
}

fn render_buffer(model: &Model, frame: &mut Frame, area: Rect) {
    let engine = &model.engine;
    let buffer = engine.buffer();
    let cursor = engine.cursor();

    let gutter_width = if model.line_numbers {
        line_number_width(buffer.line_count())
    } else {
        0
    };
    let gutter_cols = if model.line_numbers {
        (gutter_width + 1).min(area.width)
    } else {
        0
    };
    let gutter_area = Rect {
        width: gutter_cols,
        ..area
    };
    let text_area = Rect {
        x: area.x + gutter_cols,
        width: area.width - gutter_cols,
        ..area
    };

    let cursor_line = buffer.line_at(cursor.y).unwrap_or_default();
    let column = display_column(&cursor_line, cursor.x);
    let cell_width = match engine.mode() {
        Mode::Normal => cursor_line
            .chars()
            .nth(cursor.x)
            .map_or(1, |c| char_width(c).max(1)),
        Mode::Insert => 1,
    };
    let left = horizontal_offset(column, cell_width, usize::from(text_area.width));

    let range = model.viewport.visible_range();
    let offset = range.start;
    let mut gutter: Vec<Line> = Vec::with_capacity(range.len());
    let mut content: Vec<Line> = Vec::with_capacity(range.len());
    for line_idx in range {
        let line_text = buffer.line_at(line_idx).unwrap_or_default();
        if model.line_numbers {
            let line_num = format!("{:>width$} ", line_idx + 1, width = gutter_width as usize);
            gutter.push(Line::styled(line_num, Style::default().fg(Color::DarkGray)));
        }

        if line_idx == cursor.y && engine.mode() == Mode::Normal {
            let chars: Vec<char> = line_text.chars().collect();
            let col = cursor.x.min(chars.len());
            let before: String = chars[..col].iter().collect();
            let cursor_char = chars.get(col).copied().unwrap_or(' ');
            let after: String = chars.get(col + 1..).unwrap_or_default().iter().collect();

            let mut spans = Vec::new();
            if !before.is_empty() {
                spans.push(Span::raw(expand_tabs(&before)));
            }
            spans.push(Span::styled(
                expand_tabs(&cursor_char.to_string()),
                Style::default().bg(Color::White).fg(Color::Black),
            ));
            if !after.is_empty() {
                spans.push(Span::raw(expand_tabs(&after)));
            }
            content.push(Line::from(spans));
        } else {
            content.push(Line::raw(expand_tabs(&line_text)));
        }
    }

    frame.render_widget(Clear, area);
    if gutter_cols > 0 {
        frame.render_widget(Paragraph::new(gutter), gutter_area);
    }
    let scroll_x = u16::try_from(left).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(content).scroll((0, scroll_x)), text_area);

    if engine.mode() == Mode::Insert && cursor.y >= offset && text_area.width > 0 {
        let x = usize::from(text_area.x) + column - left;
        let y = usize::from(area.y) + (cursor.y - offset);
        let max_x = usize::from(text_area.right() - 1);
        if y < usize::from(area.bottom()) {
            let x = u16::try_from(x.min(max_x)).unwrap_or(text_area.x);
            let y = u16::try_from(y).unwrap_or(area.y);
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}

/// Leftmost visible display column so that a cursor cell starting at
/// `column` and `cell_width` columns wide fits in `width` columns.
const fn horizontal_offset(column: usize, cell_width: usize, width: usize) -> usize {
    (column + cell_width).saturating_sub(width)
}

/// Screen columns occupied by the first `x` characters of `line`.
///
/// `x` is clamped to the line length, so the result never points past the
/// end of the line.
pub fn display_column(line: &str, x: usize) -> usize {
    line.chars().take(x).map(char_width).sum()
}

fn char_width(c: char) -> usize {
    if c == '\t' {
        TAB_WIDTH
    } else {
        c.width().unwrap_or(0)
    }
}

fn expand_tabs(text: &str) -> String {
    if text.contains('\t') {
        text.replace('\t', &" ".repeat(TAB_WIDTH))
    } else {
        text.to_string()
    }
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}
