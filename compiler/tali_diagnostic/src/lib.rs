//! Diagnostic rendering for the Tali compiler front end.
//!
//! The front end is fail-fast: the first [`LexError`], [`GrammarError`],
//! or [`SemanticsError`] aborts the current compilation. This crate
//! gives the driver one uniform value to print for any of them — a
//! severity, a message, and the source position when one is known.
//! Terminal painting and batch reporting belong to the driver, not here.

use std::fmt;

use tali_ir::{GrammarError, Position};
use tali_lexer::LexError;
use tali_sema::SemanticsError;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
            Severity::Help => write!(f, "help"),
        }
    }
}

/// A renderable diagnostic.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    /// How serious this is.
    pub severity: Severity,
    /// What went wrong.
    pub message: String,
    /// Where, when the failing construct has a source position.
    pub position: Option<Position>,
    /// Follow-up lines rendered beneath the main message.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error-severity diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            position: None,
            notes: Vec::new(),
        }
    }

    /// Create a warning-severity diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            position: None,
            notes: Vec::new(),
        }
    }

    /// Attach a source position.
    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach a follow-up note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(position) = self.position {
            write!(f, " at {position}")?;
        }
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl From<&LexError> for Diagnostic {
    fn from(err: &LexError) -> Self {
        Diagnostic::error(err.kind.to_string()).at(err.position)
    }
}

impl From<&GrammarError> for Diagnostic {
    fn from(err: &GrammarError) -> Self {
        Diagnostic::error(err.to_string())
            .with_note("this is an internal parse-tree consistency fault")
    }
}

impl From<&SemanticsError> for Diagnostic {
    fn from(err: &SemanticsError) -> Self {
        let diagnostic = Diagnostic::error(err.kind.to_string());
        match err.position {
            Some(position) => diagnostic.at(position),
            None => diagnostic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_with_position() {
        let diagnostic = Diagnostic::error("`x` is not a keyword").at(Position::new(2, 5));
        assert_eq!(
            format!("{diagnostic}"),
            "error: `x` is not a keyword at 2:5"
        );
    }

    #[test]
    fn test_render_with_notes() {
        let diagnostic = Diagnostic::warning("something odd").with_note("look here");
        let rendered = format!("{diagnostic}");
        assert!(rendered.starts_with("warning: something odd"));
        assert!(rendered.contains("note: look here"));
    }

    #[test]
    fn test_lex_error_conversion() {
        let err = LexError::unknown_operator(Position::new(1, 3), "!");
        let diagnostic = Diagnostic::from(&err);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert!(diagnostic.message.contains('!'));
        assert_eq!(diagnostic.position, Some(Position::new(1, 3)));
        assert_eq!(
            format!("{diagnostic}"),
            "error: `!` is not an operator at 1:3"
        );
    }

    #[test]
    fn test_grammar_error_conversion() {
        let err = GrammarError::out_of_bounds("expression", 9, 4);
        let diagnostic = Diagnostic::from(&err);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.notes.len(), 1);
    }

    #[test]
    fn test_semantics_error_conversion() {
        let err = SemanticsError::literal_too_large(Position::new(4, 1), "4294967296");
        let diagnostic = Diagnostic::from(&err);
        assert!(diagnostic.message.contains("4294967296"));
    }
}
