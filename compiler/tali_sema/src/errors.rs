//! Semantic analysis errors.
//!
//! All of these are unrecoverable: the batch compiler aborts the
//! current input with the error's message, which names the offending
//! construct and, where one is known, its source position.

use std::fmt;

use tali_ir::{GrammarError, Position};

/// A failure while classifying constants over the parse tree.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SemanticsError {
    /// The source position of the offending construct, when known.
    pub position: Option<Position>,
    /// What went wrong.
    pub kind: SemanticsErrorKind,
}

/// What kind of semantic error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum SemanticsErrorKind {
    /// An expression (or something it names) did not resolve in the
    /// arena.
    UnresolvedReference(GrammarError),
    /// A literal expression whose lexeme does not carry the matching
    /// payload.
    MalformedLiteral { expected: &'static str },
    /// An integer literal beyond the 32-bit range of constants.
    LiteralTooLarge { text: String },
    /// A value accessor used against the wrong tag.
    ValueTagMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl SemanticsError {
    /// Wrap an arena fault.
    #[cold]
    pub fn unresolved(err: GrammarError) -> Self {
        SemanticsError {
            position: None,
            kind: SemanticsErrorKind::UnresolvedReference(err),
        }
    }

    /// Create a malformed-literal error.
    #[cold]
    pub fn malformed_literal(position: Position, expected: &'static str) -> Self {
        SemanticsError {
            position: Some(position),
            kind: SemanticsErrorKind::MalformedLiteral { expected },
        }
    }

    /// Create a literal-too-large error.
    #[cold]
    pub fn literal_too_large(position: Position, text: impl Into<String>) -> Self {
        SemanticsError {
            position: Some(position),
            kind: SemanticsErrorKind::LiteralTooLarge { text: text.into() },
        }
    }

    /// Create a value-tag-mismatch error.
    #[cold]
    pub fn tag_mismatch(expected: &'static str, actual: &'static str) -> Self {
        SemanticsError {
            position: None,
            kind: SemanticsErrorKind::ValueTagMismatch { expected, actual },
        }
    }
}

impl fmt::Display for SemanticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(position) = self.position {
            write!(f, " at {position}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SemanticsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticsErrorKind::UnresolvedReference(err) => write!(f, "{err}"),
            SemanticsErrorKind::MalformedLiteral { expected } => write!(
                f,
                "literal expression does not carry a matching payload (expected {expected})"
            ),
            SemanticsErrorKind::LiteralTooLarge { text } => {
                write!(f, "integer literal `{text}` does not fit in 32 bits")
            }
            SemanticsErrorKind::ValueTagMismatch { expected, actual } => {
                write!(f, "expected an {expected} constant, found {actual}")
            }
        }
    }
}

impl std::error::Error for SemanticsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            SemanticsErrorKind::UnresolvedReference(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GrammarError> for SemanticsError {
    fn from(err: GrammarError) -> Self {
        SemanticsError::unresolved(err)
    }
}
