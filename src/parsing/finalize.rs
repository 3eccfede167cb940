//! Message body normalization.
//!
//! While an entry is being assembled its message keeps every raw line
//! terminator. Finalizing removes the terminator of the last line and, for
//! messages that spanned several physical lines, the pair of quote characters
//! LINE wraps around them.

use super::line::strip_terminator;

/// Normalizes a raw message body.
///
/// 1. Removes exactly one trailing `\n` (or `\r\n`).
/// 2. If `multiline` is set, removes the first and last character.
///
/// Step 2 does not check that those characters are quotes. A multiline body
/// shorter than two characters finalizes to an empty string.
///
/// # Example
///
/// ```
/// use line_history::parsing::finalize_message;
///
/// assert_eq!(finalize_message("Hello\n".to_string(), false), "Hello");
/// assert_eq!(finalize_message("\"Line1\nLine2\"\n".to_string(), true), "Line1\nLine2");
/// ```
pub fn finalize_message(mut raw: String, multiline: bool) -> String {
    let kept = strip_terminator(&raw).len();
    raw.truncate(kept);

    if multiline {
        // Unconditional: the quote pair is assumed, never verified.
        strip_boundary_chars(&raw).to_string()
    } else {
        raw
    }
}

fn strip_boundary_chars(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
