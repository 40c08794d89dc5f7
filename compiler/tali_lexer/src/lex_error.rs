//! Classification errors.
//!
//! Every error names the offending text (or character) and carries the
//! span's start position, so the driver can report exactly where the
//! current compilation failed.

use std::fmt;

use tali_ir::{Position, Radix};

/// A malformed token span.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexError {
    /// Where the offending span starts.
    pub position: Position,
    /// What went wrong.
    pub kind: LexErrorKind,
}

/// What kind of classification error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    // === Keyword/Operator Errors ===
    /// The text is not a reserved word.
    UnknownKeyword { text: String },
    /// The text is not an operator.
    UnknownOperator { text: String },

    // === Integer Errors ===
    /// An integer span with no characters at all.
    EmptyInteger,
    /// A character that is not a digit of the literal's base.
    InvalidDigit { found: char, radix: Radix },
    /// A `0x` prefix with nothing after it.
    MissingHexDigits,

    // === Char Errors ===
    /// A char span of an impossible length (0 or more than 4).
    BadCharLength { text: String },
    /// An unquoted char span when quotes are required.
    CharQuotesRequired { text: String },
    /// A quoted span that is not `'x'` or `'\x'`.
    MalformedCharQuotes { text: String },
    /// A bare `\` with nothing to escape.
    BareBackslash,

    // === String Errors ===
    /// An unquoted string span when quotes are required.
    StringQuotesRequired { text: String },
    /// A `\` at the very end of the text, escaping nothing.
    TrailingBackslash,
}

impl LexError {
    /// Create an unknown-keyword error.
    #[cold]
    pub fn unknown_keyword(position: Position, text: impl Into<String>) -> Self {
        LexError {
            position,
            kind: LexErrorKind::UnknownKeyword { text: text.into() },
        }
    }

    /// Create an unknown-operator error.
    #[cold]
    pub fn unknown_operator(position: Position, text: impl Into<String>) -> Self {
        LexError {
            position,
            kind: LexErrorKind::UnknownOperator { text: text.into() },
        }
    }

    /// Create an empty-integer error.
    #[cold]
    pub fn empty_integer(position: Position) -> Self {
        LexError {
            position,
            kind: LexErrorKind::EmptyInteger,
        }
    }

    /// Create an invalid-digit error.
    #[cold]
    pub fn invalid_digit(position: Position, found: char, radix: Radix) -> Self {
        LexError {
            position,
            kind: LexErrorKind::InvalidDigit { found, radix },
        }
    }

    /// Create a missing-hex-digits error.
    #[cold]
    pub fn missing_hex_digits(position: Position) -> Self {
        LexError {
            position,
            kind: LexErrorKind::MissingHexDigits,
        }
    }

    /// Create a bad-char-length error.
    #[cold]
    pub fn bad_char_length(position: Position, text: impl Into<String>) -> Self {
        LexError {
            position,
            kind: LexErrorKind::BadCharLength { text: text.into() },
        }
    }

    /// Create a char-quotes-required error.
    #[cold]
    pub fn char_quotes_required(position: Position, text: impl Into<String>) -> Self {
        LexError {
            position,
            kind: LexErrorKind::CharQuotesRequired { text: text.into() },
        }
    }

    /// Create a malformed-char-quotes error.
    #[cold]
    pub fn malformed_char_quotes(position: Position, text: impl Into<String>) -> Self {
        LexError {
            position,
            kind: LexErrorKind::MalformedCharQuotes { text: text.into() },
        }
    }

    /// Create a bare-backslash error.
    #[cold]
    pub fn bare_backslash(position: Position) -> Self {
        LexError {
            position,
            kind: LexErrorKind::BareBackslash,
        }
    }

    /// Create a string-quotes-required error.
    #[cold]
    pub fn string_quotes_required(position: Position, text: impl Into<String>) -> Self {
        LexError {
            position,
            kind: LexErrorKind::StringQuotesRequired { text: text.into() },
        }
    }

    /// Create a trailing-backslash error.
    #[cold]
    pub fn trailing_backslash(position: Position) -> Self {
        LexError {
            position,
            kind: LexErrorKind::TrailingBackslash,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnknownKeyword { text } => {
                write!(f, "`{text}` is not a keyword")?;
            }
            LexErrorKind::UnknownOperator { text } => {
                write!(f, "`{text}` is not an operator")?;
            }
            LexErrorKind::EmptyInteger => {
                write!(f, "empty integer literal")?;
            }
            LexErrorKind::InvalidDigit { found, radix } => {
                write!(f, "`{found}` is not a valid digit in {radix}")?;
            }
            LexErrorKind::MissingHexDigits => {
                write!(f, "hexadecimal literal needs at least one digit after `0x`")?;
            }
            LexErrorKind::BadCharLength { text } => {
                write!(f, "`{text}` is not a character literal")?;
            }
            LexErrorKind::CharQuotesRequired { text } => {
                write!(f, "character literal `{text}` must be quoted")?;
            }
            LexErrorKind::MalformedCharQuotes { text } => {
                write!(f, "`{text}` is not a quoted character literal")?;
            }
            LexErrorKind::BareBackslash => {
                write!(f, "`\\` escapes nothing")?;
            }
            LexErrorKind::StringQuotesRequired { text } => {
                write!(f, "string literal `{text}` must be quoted")?;
            }
            LexErrorKind::TrailingBackslash => {
                write!(f, "`\\` at end of literal escapes nothing")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_text_and_position() {
        let err = LexError::unknown_keyword(Position::new(4, 2), "begn");
        let msg = format!("{err}");
        assert!(msg.contains("begn"));
        assert!(msg.contains("4:2"));
    }

    #[test]
    fn test_invalid_digit_names_radix() {
        let err = LexError::invalid_digit(Position::new(1, 1), '8', Radix::Octal);
        let msg = format!("{err}");
        assert!(msg.contains('8'));
        assert!(msg.contains("base 8"));
    }

    #[test]
    fn test_error_equality() {
        let a = LexError::empty_integer(Position::new(1, 1));
        let b = LexError::empty_integer(Position::new(1, 1));
        let c = LexError::empty_integer(Position::new(1, 2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
