//! Content line lexer for iCalendar (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of content lines.

use crate::ical::core::{Parameter, Token};

/// Splits feed text into logical content lines, merging folded continuations.
///
/// Surrounding whitespace and blank lines are trimmed before splitting.
/// Handles both CRLF and bare LF line endings. A physical line starting with
/// a single space is a continuation of the previous logical line; per RFC
/// 5545 §3.1 the line break and the space are removed and no separator is
/// inserted. Each logical line carries the 1-based number of its first
/// physical line for error reporting.
///
/// A malformed input whose first line starts with a space yields that line
/// as a standalone logical line with the space stripped.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (i, raw_line) in input.trim().lines().enumerate() {
        let line = raw_line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        if let Some(continuation) = line.strip_prefix(' ') {
            if let Some((_, prev)) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                lines.push((i + 1, continuation.to_string()));
            }
        } else {
            lines.push((i + 1, line.to_string()));
        }
    }

    lines
}

/// Tokenizes a single logical content line.
///
/// Format: `name *(";" param) ":" value`. The first `:` separates the name
/// part from the raw value; the name part splits on `;` into the key and
/// `name=value` parameter pairs (each split on the first `=`). Backslash-n
/// escape sequences in the value are decoded to literal newlines; no other
/// escapes are decoded.
///
/// Tokenization never fails: a line with no `:` yields a token whose key is
/// the whole line and whose value is empty, which downstream dispatch simply
/// ignores.
#[must_use]
pub fn tokenize(line: &str) -> Token {
    let Some((name_part, raw_value)) = line.split_once(':') else {
        return Token::new(line, "");
    };

    let value = decode_escapes(raw_value);

    match name_part.split_once(';') {
        Some((key, param_part)) => {
            let params = param_part
                .split(';')
                .map(|pair| match pair.split_once('=') {
                    Some((name, value)) => Parameter::new(name, value),
                    None => Parameter::new(pair, ""),
                })
                .collect();
            Token::with_params(key, params, value)
        }
        None => Token::new(name_part, value),
    }
}

/// Decodes `\n` escape sequences to literal newlines.
///
/// Deliberately minimal: RFC 5545 §3.3.11 also defines `\\`, `\,`, `\;`,
/// and `\N`, but the sync layer only ever needs multi-line descriptions, so
/// only `\n` is decoded.
fn decode_escapes(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
