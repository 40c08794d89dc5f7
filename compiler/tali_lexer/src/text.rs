//! Character and string literal decoding.
//!
//! Quoting is controlled by the classifier's configuration: the scanner
//! that feeds this crate may be built to hand over literals with their
//! quotes already dropped, in which case the bare forms are accepted.

use tali_ir::LexemeBase;

use crate::escape::{self, resolve_escape_byte};
use crate::lex_error::LexError;

/// Decode a character literal span to its byte value.
///
/// Accepted shapes, by text length:
/// - 1: a bare character (only when quotes may be omitted; `\` alone
///   is rejected)
/// - 2: a bare escape, `\x` (only when quotes may be omitted)
/// - 3: `'x'` where `x` is not a backslash
/// - 4: `'\x'`
pub(crate) fn decode_char(base: &LexemeBase, bare_allowed: bool) -> Result<u8, LexError> {
    let bytes = base.text.as_bytes();
    let position = base.position;

    match bytes.len() {
        1 => {
            if !bare_allowed {
                return Err(LexError::char_quotes_required(position, &base.text));
            }
            if bytes[0] == b'\\' {
                return Err(LexError::bare_backslash(position));
            }
            Ok(bytes[0])
        }
        2 => {
            if !bare_allowed {
                return Err(LexError::char_quotes_required(position, &base.text));
            }
            if bytes[0] != b'\\' {
                return Err(LexError::bad_char_length(position, &base.text));
            }
            Ok(resolve_escape_byte(bytes[1]))
        }
        3 => {
            if bytes[0] != b'\'' || bytes[2] != b'\'' {
                return Err(LexError::malformed_char_quotes(position, &base.text));
            }
            if bytes[1] == b'\\' {
                return Err(LexError::malformed_char_quotes(position, &base.text));
            }
            Ok(bytes[1])
        }
        4 => {
            if bytes[0] != b'\'' || bytes[1] != b'\\' || bytes[3] != b'\'' {
                return Err(LexError::malformed_char_quotes(position, &base.text));
            }
            Ok(resolve_escape_byte(bytes[2]))
        }
        _ => Err(LexError::bad_char_length(position, &base.text)),
    }
}

/// Decode a string literal span to its expanded text.
///
/// A span that starts and ends with `"` has both quotes stripped;
/// anything else is accepted as-is only when quotes may be omitted.
/// Escapes are then expanded left to right.
pub(crate) fn decode_string(base: &LexemeBase, bare_allowed: bool) -> Result<String, LexError> {
    let text = base.text.as_str();
    let position = base.position;

    let inner = if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else if bare_allowed {
        text
    } else {
        return Err(LexError::string_quotes_required(position, text));
    };

    escape::expand(inner, position)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::LexErrorKind;
    use pretty_assertions::assert_eq;

    fn base(text: &str) -> LexemeBase {
        LexemeBase::new(1, 1, text)
    }

    #[test]
    fn test_quoted_char() {
        assert_eq!(decode_char(&base("'a'"), false).unwrap(), b'a');
        assert_eq!(decode_char(&base("'0'"), false).unwrap(), b'0');
    }

    #[test]
    fn test_quoted_escaped_char() {
        assert_eq!(decode_char(&base(r"'\n'"), false).unwrap(), b'\n');
        assert_eq!(decode_char(&base(r"'\t'"), false).unwrap(), b'\t');
        // Unrecognized escapes stand for themselves.
        assert_eq!(decode_char(&base(r"'\q'"), false).unwrap(), b'q');
        assert_eq!(decode_char(&base(r"'\\'"), false).unwrap(), b'\\');
    }

    #[test]
    fn test_bare_char_needs_permission() {
        assert_eq!(decode_char(&base("a"), true).unwrap(), 97);
        assert!(matches!(
            decode_char(&base("a"), false),
            Err(LexError {
                kind: LexErrorKind::CharQuotesRequired { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_bare_escape_needs_permission_and_backslash() {
        assert_eq!(decode_char(&base(r"\n"), true).unwrap(), b'\n');
        assert!(decode_char(&base(r"\n"), false).is_err());
        // Two characters without a leading backslash never form a char.
        assert!(decode_char(&base("ab"), true).is_err());
    }

    #[test]
    fn test_bare_backslash_rejected() {
        assert!(matches!(
            decode_char(&base("\\"), true),
            Err(LexError {
                kind: LexErrorKind::BareBackslash,
                ..
            })
        ));
    }

    #[test]
    fn test_quoted_shape_violations() {
        // Length 4 without a backslash in second position.
        assert!(decode_char(&base("'ab'"), false).is_err());
        // Length 3 with a backslash payload.
        assert!(decode_char(&base(r"'\'"), false).is_err());
        // Wrong quote characters.
        assert!(decode_char(&base("\"a\""), false).is_err());
    }

    #[test]
    fn test_char_length_violations() {
        assert!(decode_char(&base(""), true).is_err());
        assert!(decode_char(&base("'long'"), false).is_err());
    }

    #[test]
    fn test_quoted_string_expands_escapes() {
        assert_eq!(decode_string(&base("\"a\\tb\""), false).unwrap(), "a\tb");
        assert_eq!(decode_string(&base("\"plain\""), false).unwrap(), "plain");
        assert_eq!(decode_string(&base("\"\""), false).unwrap(), "");
    }

    #[test]
    fn test_bare_string_needs_permission() {
        assert_eq!(decode_string(&base("bare"), true).unwrap(), "bare");
        assert!(matches!(
            decode_string(&base("bare"), false),
            Err(LexError {
                kind: LexErrorKind::StringQuotesRequired { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_trailing_backslash_rejected() {
        assert!(matches!(
            decode_string(&base("\"oops\\\""), false),
            // The closing quote is stripped first, leaving `oops\`.
            Err(LexError {
                kind: LexErrorKind::TrailingBackslash,
                ..
            })
        ));
    }

    #[test]
    fn test_lone_quote_is_not_a_quoted_string() {
        // A single `"` cannot carry both quotes.
        assert!(decode_string(&base("\""), false).is_err());
        assert_eq!(decode_string(&base("\""), true).unwrap(), "\"");
    }
}
