//! JavaScript literal formatting for numbers, strings and regular expressions.
//!
//! Every function here is pure and round-trips exactly: evaluating the
//! returned literal in JavaScript yields the input value.

use std::fmt::Write;

// =============================================================================
// Numbers
// =============================================================================

#[must_use]
pub fn format_int(value: i64) -> String {
    value.to_string()
}

/// Shortest text that reads back as the same double.
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() && value.is_sign_positive() {
        "Infinity".to_string()
    } else if value.is_infinite() {
        "-Infinity".to_string()
    } else {
        // `{:?}` keeps the fraction (`1.0`) and switches to exponent form
        // (`1e21`) for very large or small magnitudes; both are valid JS.
        format!("{value:?}")
    }
}

// =============================================================================
// Strings
// =============================================================================

/// Double-quoted JavaScript string literal for `text`.
///
/// NUL is written as `\x00` so that a following digit can never turn it into
/// a legacy octal escape. With `ascii_only`, every non-ASCII code point is
/// written as `\uXXXX` (a surrogate pair above the BMP).
#[must_use]
pub fn quote_string(text: &str, ascii_only: bool) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{b}' => out.push_str("\\v"),
            '\u{c}' => out.push_str("\\f"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 || c == '\x7F' => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c if ascii_only && !c.is_ascii() => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{unit:04X}");
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

// =============================================================================
// Regular expressions
// =============================================================================

/// Flags a JavaScript regex literal accepts.
const JS_REGEXP_FLAGS: &str = "dgimsuvy";

/// JavaScript regex literal `/pattern/flags`.
///
/// An empty pattern becomes `^`: `//` would start a comment. Unescaped `/`
/// is escaped and raw line terminators are written as escapes. Flags outside
/// [`JS_REGEXP_FLAGS`] are dropped.
#[must_use]
pub fn format_regexp(pattern: &str, flags: &str) -> String {
    let pattern = if pattern.is_empty() { "^" } else { pattern };

    let mut out = String::with_capacity(pattern.len() + flags.len() + 2);
    out.push('/');
    let mut escaped = false;
    for ch in pattern.chars() {
        if escaped {
            escaped = false;
            match line_terminator_escape(ch) {
                Some(name) => out.push_str(name),
                None => out.push(ch),
            }
            continue;
        }
        match ch {
            '\\' => {
                out.push('\\');
                escaped = true;
            }
            '/' => out.push_str("\\/"),
            c => match line_terminator_escape(c) {
                Some(name) => {
                    out.push('\\');
                    out.push_str(name);
                }
                None => out.push(c),
            },
        }
    }
    // A trailing backslash would escape the closing delimiter.
    if escaped {
        out.push('\\');
    }
    out.push('/');
    out.push_str(&regexp_flags(flags));
    out
}

fn line_terminator_escape(ch: char) -> Option<&'static str> {
    match ch {
        '\n' => Some("n"),
        '\r' => Some("r"),
        '\u{2028}' => Some("u2028"),
        '\u{2029}' => Some("u2029"),
        _ => None,
    }
}

fn regexp_flags(flags: &str) -> String {
    let mut kept = String::with_capacity(flags.len());
    for flag in flags.chars() {
        if JS_REGEXP_FLAGS.contains(flag) && !kept.contains(flag) {
            kept.push(flag);
        }
    }
    kept
}

/// Flags in `flags` that [`format_regexp`] drops, each reported once.
#[must_use]
pub fn unsupported_regexp_flags(flags: &str) -> Vec<char> {
    let mut dropped = Vec::new();
    for flag in flags.chars() {
        if !JS_REGEXP_FLAGS.contains(flag) && !dropped.contains(&flag) {
            dropped.push(flag);
        }
    }
    dropped
}
