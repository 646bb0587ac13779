//! Key notation for scripted input.
//!
//! A script is a whitespace-separated list of tokens:
//!
//! - a single character is that key (`x`, `$`, `A`)
//! - a name is a special key (`escape`, `enter`, `backspace`, `left`, ...)
//! - `^c` is `c` with Control held (`^r`)
//! - `'...'` is a literal text run; `\n`, `\t`, `\'` and `\\` are escapes

use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

use crate::editor::{Input, Key, Modifier};

/// Failure to parse key notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unterminated text starting at byte {0}")]
    UnterminatedText(usize),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("`^` at byte {0} is not followed by a key")]
    EmptyChord(usize),
}

/// Parse key notation into input events.
///
/// # Errors
///
/// Returns a [`ScriptError`] for an unterminated quote, an unrecognised key
/// name, or a bare `^`.
pub fn parse(source: &str) -> Result<Vec<Input>, ScriptError> {
    let mut inputs = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if c == '\'' {
            chars.next();
            inputs.push(Input::Text(quoted(&mut chars, start)?));
            continue;
        }

        let mut token = String::new();
        while let Some(&(_, c)) = chars.peek() {
            if c.is_whitespace() {
                break;
            }
            token.push(c);
            chars.next();
        }
        inputs.push(token_input(&token, start)?);
    }
    Ok(inputs)
}

fn quoted(chars: &mut Peekable<CharIndices<'_>>, start: usize) -> Result<String, ScriptError> {
    let mut text = String::new();
    while let Some((_, c)) = chars.next() {
        match c {
            '\'' => return Ok(text),
            '\\' => match chars.next() {
                Some((_, 'n')) => text.push('\n'),
                Some((_, 't')) => text.push('\t'),
                Some((_, other)) => text.push(other),
                None => break,
            },
            c => text.push(c),
        }
    }
    Err(ScriptError::UnterminatedText(start))
}

fn token_input(token: &str, start: usize) -> Result<Input, ScriptError> {
    if let Some(rest) = token.strip_prefix('^') {
        if rest.is_empty() {
            return Err(ScriptError::EmptyChord(start));
        }
        let key = key_named(rest).ok_or_else(|| ScriptError::UnknownKey(token.to_string()))?;
        return Ok(Input::chord(key, Modifier::Control));
    }

    let key = key_named(token).ok_or_else(|| ScriptError::UnknownKey(token.to_string()))?;
    let modifier = match key {
        Key::Char(c) if c.is_ascii_uppercase() => Modifier::Shift,
        _ => Modifier::None,
    };
    Ok(Input::chord(key, modifier))
}

fn key_named(name: &str) -> Option<Key> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(Key::Char(c));
    }
    let key = match name.to_ascii_lowercase().as_str() {
        "escape" | "esc" => Key::Escape,
        "enter" | "return" => Key::Enter,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "left" => Key::Left,
        "right" => Key::Right,
        "up" => Key::Up,
        "down" => Key::Down,
        "home" => Key::Home,
        "end" => Key::End,
        "tab" => Key::Tab,
        "period" => Key::Char('.'),
        "space" => Key::Char(' '),
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_characters() {
        assert_eq!(
            parse("x $ .").unwrap(),
            vec![
                Input::key(Key::Char('x')),
                Input::key(Key::Char('$')),
                Input::key(Key::Char('.')),
            ]
        );
    }

    #[test]
    fn test_uppercase_carries_shift() {
        assert_eq!(
            parse("A").unwrap(),
            vec![Input::chord(Key::Char('A'), Modifier::Shift)]
        );
    }

    #[test]
    fn test_named_keys_and_control() {
        assert_eq!(
            parse("escape Enter period ^r").unwrap(),
            vec![
                Input::key(Key::Escape),
                Input::key(Key::Enter),
                Input::key(Key::Char('.')),
                Input::chord(Key::Char('r'), Modifier::Control),
            ]
        );
    }

    #[test]
    fn test_quoted_text_keeps_spaces() {
        assert_eq!(
            parse("A ' hello' escape").unwrap(),
            vec![
                Input::chord(Key::Char('A'), Modifier::Shift),
                Input::text(" hello"),
                Input::key(Key::Escape),
            ]
        );
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(
            parse(r"'a\nb\'c\\'").unwrap(),
            vec![Input::text("a\nb'c\\")]
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse("i 'abc"), Err(ScriptError::UnterminatedText(2)));
        assert_eq!(
            parse("escap"),
            Err(ScriptError::UnknownKey("escap".to_string()))
        );
        assert_eq!(parse("x ^"), Err(ScriptError::EmptyChord(2)));
    }

    #[test]
    fn test_empty_script() {
        assert!(parse("   ").unwrap().is_empty());
    }
}
