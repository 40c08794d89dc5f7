//! Escape sequence processing.
//!
//! Shared by character and string literals. Recognized escapes:
//! `\n`, `\r`, `\b`, `\t`, `\f`. Any other escaped character stands
//! for itself, so `\\` is a backslash and `\'` is a quote.

use tali_ir::Position;

use crate::lex_error::LexError;

/// Resolve a single escaped character to its replacement.
#[inline]
pub(crate) fn resolve_escape(c: char) -> char {
    match c {
        'n' => '\n',
        'r' => '\r',
        'b' => '\u{8}',
        't' => '\t',
        'f' => '\u{C}',
        other => other,
    }
}

/// Resolve a single escaped byte to its replacement.
#[inline]
pub(crate) fn resolve_escape_byte(b: u8) -> u8 {
    match b {
        b'n' => b'\n',
        b'r' => b'\r',
        b'b' => 0x08,
        b't' => b'\t',
        b'f' => 0x0C,
        other => other,
    }
}

/// Expand every escape in `text`, left to right.
///
/// A `\` at the very end of the input escapes nothing and is an error.
pub(crate) fn expand(text: &str, position: Position) -> Result<String, LexError> {
    let mut expanded = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => expanded.push(resolve_escape(escaped)),
                None => return Err(LexError::trailing_backslash(position)),
            }
        } else {
            expanded.push(c);
        }
    }

    Ok(expanded)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_named_escapes() {
        assert_eq!(resolve_escape('n'), '\n');
        assert_eq!(resolve_escape('r'), '\r');
        assert_eq!(resolve_escape('b'), '\u{8}');
        assert_eq!(resolve_escape('t'), '\t');
        assert_eq!(resolve_escape('f'), '\u{C}');
    }

    #[test]
    fn test_unrecognized_escapes_stand_for_themselves() {
        assert_eq!(resolve_escape('\\'), '\\');
        assert_eq!(resolve_escape('\''), '\'');
        assert_eq!(resolve_escape('q'), 'q');
        assert_eq!(resolve_escape_byte(b'z'), b'z');
    }

    #[test]
    fn test_expand_plain_text() {
        let position = Position::FIRST;
        assert_eq!(expand("hello", position).unwrap(), "hello");
        assert_eq!(expand("", position).unwrap(), "");
    }

    #[test]
    fn test_expand_mixed_escapes() {
        let position = Position::FIRST;
        assert_eq!(expand(r"a\tb", position).unwrap(), "a\tb");
        assert_eq!(expand(r"line\nnext", position).unwrap(), "line\nnext");
        assert_eq!(expand(r"a\\b", position).unwrap(), "a\\b");
        assert_eq!(expand(r"\q", position).unwrap(), "q");
    }

    #[test]
    fn test_trailing_backslash_is_an_error() {
        let err = expand("oops\\", Position::new(2, 4)).unwrap_err();
        assert_eq!(err.position, Position::new(2, 4));
    }
}
