//! Lenient JSON reader.
//!
//! Hand-edited and tool-emitted SBOMs regularly carry `//` comments and a
//! trailing comma before a closing bracket. This module blanks those out of
//! the raw text and hands the result to `serde_json`, which is built with
//! `preserve_order` so object keys keep their source order.
//!
//! Blanked bytes are replaced with spaces (newlines are kept), so line and
//! column numbers in `serde_json` errors still point into the original text.

use crate::parsers::traits::ParseError;
use serde_json::Value;

/// Read raw text into a generic JSON value tree.
///
/// Returns `None` for blank input and for text that is not valid JSON once
/// comments and trailing commas are ignored.
#[must_use]
pub fn read_value(text: &str) -> Option<Value> {
    match try_read_value(text) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Lenient JSON read failed: {}", e);
            None
        }
    }
}

/// Read raw text into a generic JSON value tree, reporting why it failed.
pub fn try_read_value(text: &str) -> Result<Value, ParseError> {
    if is_blank(text) {
        return Err(ParseError::Blank);
    }

    let cleaned = strip_extensions(text)?;
    serde_json::from_str(&cleaned).map_err(|e| ParseError::Json(e.to_string()))
}

/// Whether the input is empty or whitespace-only.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Blank out comments and trailing commas, leaving everything else intact.
fn strip_extensions(text: &str) -> Result<String, ParseError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    let mut in_string = false;
    let mut escaped = false;
    // Last significant character emitted outside strings and comments
    let mut last_significant: Option<char> = None;
    // Byte offset in `out` of a comma that directly follows a value
    let mut pending_comma: Option<usize> = None;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '/' if chars.peek() == Some(&'/') => {
                chars.next();
                out.push_str("  ");
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                    blank_char(&mut out, next);
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str("  ");
                let mut closed = false;
                while let Some(next) = chars.next() {
                    if next == '*' && chars.peek() == Some(&'/') {
                        chars.next();
                        out.push_str("  ");
                        closed = true;
                        break;
                    }
                    blank_char(&mut out, next);
                }
                if !closed {
                    return Err(ParseError::Json(
                        "unterminated block comment".to_string(),
                    ));
                }
            }
            c if c.is_whitespace() => out.push(c),
            ',' => {
                // `[,]` and `{"a":1,,}` stay invalid: only a comma that
                // follows a complete value may be dropped.
                pending_comma = match last_significant {
                    Some('[' | '{' | ',' | ':') | None => None,
                    Some(_) => Some(out.len()),
                };
                out.push(',');
                last_significant = Some(',');
            }
            '}' | ']' => {
                if let Some(offset) = pending_comma.take() {
                    out.replace_range(offset..=offset, " ");
                }
                out.push(c);
                last_significant = Some(c);
            }
            '"' => {
                pending_comma = None;
                in_string = true;
                out.push(c);
                last_significant = Some(c);
            }
            _ => {
                pending_comma = None;
                out.push(c);
                last_significant = Some(c);
            }
        }
    }

    Ok(out)
}

/// Replace a commented-out character with whitespace of the same byte width.
fn blank_char(out: &mut String, c: char) {
    if c == '\n' {
        out.push('\n');
    } else {
        out.extend(std::iter::repeat(' ').take(c.len_utf8()));
    }
}
