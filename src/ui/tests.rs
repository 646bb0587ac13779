use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::style::Color;

use super::*;
use crate::app::{Message, Model, update};
use crate::editor::{Input, Key};
use crate::input::parse;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

fn model_after(text: &str, script: &str) -> Model {
    let model = Model::new(None, text, (40, 6));
    update(model, Message::Input(parse(script).unwrap()))
}

fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, row)].symbol())
        .collect::<String>()
}

#[test]
fn test_render_shows_lines_with_gutter() {
    let model = Model::new(None, "alpha\nbeta", (40, 6));
    let mut terminal = create_test_terminal(40, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    assert!(row_text(&terminal, 0).starts_with("1 alpha"));
    assert!(row_text(&terminal, 1).starts_with("2 beta"));
}

#[test]
fn test_render_without_line_numbers() {
    let model = Model::new(None, "alpha", (40, 6)).with_line_numbers(false);
    let mut terminal = create_test_terminal(40, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    assert!(row_text(&terminal, 0).starts_with("alpha"));
}

#[test]
fn test_normal_mode_cursor_is_a_block_cell() {
    let model = model_after("alpha", "l l");
    let mut terminal = create_test_terminal(40, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let cell = &buffer[(4, 0)];
    assert_eq!(cell.symbol(), "p");
    assert_eq!(cell.bg, Color::White);
    assert_eq!(cell.fg, Color::Black);
}

#[test]
fn test_block_cursor_on_empty_line() {
    let model = Model::new(None, "", (40, 6));
    let mut terminal = create_test_terminal(40, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let cell = &terminal.backend().buffer()[(2, 0)];
    assert_eq!(cell.bg, Color::White);
}

#[test]
fn test_insert_mode_places_terminal_caret() {
    let model = model_after("alpha", "A");
    let mut terminal = create_test_terminal(40, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let position = terminal.get_cursor_position().unwrap();
    assert_eq!((position.x, position.y), (7, 0));
}

#[test]
fn test_caret_uses_display_width() {
    let model = model_after("日本", "A");
    let mut terminal = create_test_terminal(40, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let position = terminal.get_cursor_position().unwrap();
    assert_eq!(position.x, 2 + 4);
}

#[test]
fn test_status_bar_shows_mode_and_position() {
    let model = model_after("abc\ndef", "j l");
    let mut terminal = create_test_terminal(60, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let status = row_text(&terminal, 5);
    assert!(status.contains("NORMAL"));
    assert!(status.contains("Ln 2, Col 2"));
    assert!(status.contains("[scratch]"));
}

#[test]
fn test_status_bar_shows_pending_prefix() {
    let model = model_after("abc", "d");
    assert!(status_text(&model).contains("  d  "));

    let model = update(model, Message::Input(vec![Input::key(Key::Escape)]));
    assert!(!status_text(&model).contains("  d  "));
}

#[test]
fn test_status_bar_hidden() {
    let model = Model::new(None, "abc", (40, 6)).with_status(false);
    let mut terminal = create_test_terminal(40, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    assert!(!row_text(&terminal, 5).contains("NORMAL"));
}

#[test]
fn test_render_scrolls_to_cursor() {
    let text = (1..=20).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    let model = Model::new(None, &text, (40, 6));
    let model = update(model, Message::Input(parse("j j j j j j j j j j").unwrap()));
    let mut terminal = create_test_terminal(40, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    assert!(row_text(&terminal, 4).starts_with("11 line 11"));
}

#[test]
fn test_long_line_scrolls_to_block_cursor() {
    let model = Model::new(None, &"0123456789".repeat(4), (20, 6));
    let model = update(model, Message::Input(parse("$").unwrap()));
    let mut terminal = create_test_terminal(20, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    assert!(row_text(&terminal, 0).starts_with("1 "));
    let cell = &terminal.backend().buffer()[(19, 0)];
    assert_eq!(cell.symbol(), "9");
    assert_eq!(cell.bg, Color::White);
}

#[test]
fn test_long_line_scrolls_to_insert_caret() {
    let model = Model::new(None, &"0123456789".repeat(4), (20, 6));
    let model = update(model, Message::Input(parse("A").unwrap()));
    let mut terminal = create_test_terminal(20, 6);
    terminal.draw(|frame| render(&model, frame)).unwrap();

    let position = terminal.get_cursor_position().unwrap();
    assert_eq!((position.x, position.y), (19, 0));
    assert_eq!(terminal.backend().buffer()[(18, 0)].symbol(), "9");
}

#[test]
fn test_display_column() {
    assert_eq!(display_column("abc", 2), 2);
    assert_eq!(display_column("abc", 10), 3);
    assert_eq!(display_column("\tx", 1), TAB_WIDTH);
    assert_eq!(display_column("日本語", 2), 4);
}

#[test]
fn test_line_number_width() {
    assert_eq!(line_number_width(9), 1);
    assert_eq!(line_number_width(10), 2);
    assert_eq!(line_number_width(12_345), 5);
}
