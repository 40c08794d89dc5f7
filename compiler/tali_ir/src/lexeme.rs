//! Lexemes: classified, validated tokens.
//!
//! A lexeme is immutable once constructed. It pairs the raw source span
//! (`LexemeBase`) with the classified payload (`LexemeKind`). The
//! classifiers that build lexemes live in `tali_lexer`; this module is
//! the data model only.

use crate::grammar::ids::define_node_id;
use crate::{IntDigits, Keyword, Operator, Position};

define_node_id! {
    /// Index into the grammar's lexeme table.
    LexemeId
}

/// The raw span a lexeme was classified from: where it starts and the
/// exact source text it covers.
///
/// End coordinates are derived, never stored: the end line adds the
/// number of embedded newlines, and the end column is one past the
/// length of the text after the last newline.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct LexemeBase {
    pub position: Position,
    pub text: String,
}

impl LexemeBase {
    /// Create a base span.
    pub fn new(line: u32, column: u32, text: impl Into<String>) -> Self {
        LexemeBase {
            position: Position::new(line, column),
            text: text.into(),
        }
    }

    /// 1-based line the span starts on.
    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    /// 1-based column the span starts at.
    #[inline]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// 1-based line the span ends on.
    pub fn line_end(&self) -> u32 {
        let newlines = self.text.matches('\n').count() as u32;
        self.position.line + newlines
    }

    /// Column one past the last character, counted on the end line.
    pub fn column_end(&self) -> u32 {
        // rsplit always yields at least one item: the text after the
        // last newline, or the whole text if there is none.
        let tail = self.text.rsplit('\n').next().unwrap_or(&self.text);
        tail.chars().count() as u32 + 1
    }
}

/// The classified payload of a lexeme.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexemeKind {
    /// A name: variable, routine, type, or field.
    Identifier,
    /// A reserved word. `uppercase` records that the source spelled it
    /// entirely in capitals (display only; mixed case never resolves).
    Keyword { keyword: Keyword, uppercase: bool },
    /// An operator or punctuation token.
    Operator(Operator),
    /// An integer literal of arbitrary magnitude.
    Integer(IntDigits),
    /// A character literal, decoded to a single byte.
    Char { value: u8 },
    /// A string literal with quotes stripped and escapes expanded.
    String { expanded: String },
    /// A comment span; carried through so tooling can see it.
    Comment,
    /// A whitespace span between tokens.
    Whitespace,
}

impl LexemeKind {
    /// True for spans that carry no syntax (comments and whitespace).
    pub fn is_trivia(&self) -> bool {
        matches!(self, LexemeKind::Comment | LexemeKind::Whitespace)
    }
}

/// A classified token with its source span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Lexeme {
    pub base: LexemeBase,
    pub kind: LexemeKind,
}

impl Lexeme {
    /// Pair a base span with its classified payload.
    pub fn new(base: LexemeBase, kind: LexemeKind) -> Self {
        Lexeme { base, kind }
    }

    /// The start position of the underlying span.
    #[inline]
    pub fn position(&self) -> Position {
        self.base.position
    }
}
