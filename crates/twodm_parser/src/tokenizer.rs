//! Line tokenization.
//!
//! Converts a raw 2DM line into its ordered data tokens.

/// Returns true for the whitespace characters that separate 2DM fields:
/// space, tab, line feed, carriage return, form feed and vertical tab.
#[must_use]
pub const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c' | '\x0b')
}

/// Returns the data portion of a line: everything before the first `#`.
///
/// There is no escaping or quoting; the first `#` always starts a comment.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    }
}

/// Splits a line into data tokens.
///
/// - Discards the trailing comment
/// - Splits on runs of field separators (see [`is_separator`])
/// - Never yields empty tokens; a blank or comment-only line yields none
#[must_use]
pub fn tokenize(line: &str) -> Vec<&str> {
    strip_comment(line)
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}
