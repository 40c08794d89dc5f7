//! Lexeme classification for the Tali compiler front end.
//!
//! The character-level scanner (an external collaborator) splits raw
//! source into token spans; this crate turns each pre-segmented
//! `LexemeBase` into a strongly typed, validated [`Lexeme`]: keywords,
//! operators, arbitrary-magnitude integers, characters, strings,
//! identifiers, comments, and whitespace.
//!
//! Classification is pure and synchronous: every call either returns a
//! finished lexeme or fails fast with a [`LexError`] naming the
//! offending text and its position.

mod escape;
mod integer;
mod keywords;
mod lex_error;
mod operators;
mod text;

pub use lex_error::{LexError, LexErrorKind};

use tali_ir::{Lexeme, LexemeBase, LexemeKind};

/// Build-time switches for literal quoting.
///
/// A scanner may be built to strip quotes from character and string
/// literals before handing the spans over; these flags tell the
/// classifier to accept the bare forms. Explicit configuration, passed
/// to [`Classifier::new`] — never process-wide state.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ClassifyConfig {
    /// Accept character literals without surrounding `'` quotes.
    pub bare_chars: bool,
    /// Accept string literals without surrounding `"` quotes.
    pub bare_strings: bool,
}

/// Turns pre-segmented token spans into classified lexemes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Classifier {
    config: ClassifyConfig,
}

impl Classifier {
    /// Create a classifier with the given quoting configuration.
    pub fn new(config: ClassifyConfig) -> Self {
        Classifier { config }
    }

    /// The quoting configuration this classifier was built with.
    pub fn config(&self) -> ClassifyConfig {
        self.config
    }

    /// Wrap an identifier span. Identifiers carry no payload beyond
    /// their text, so this cannot fail.
    pub fn classify_identifier(&self, base: LexemeBase) -> Lexeme {
        Lexeme::new(base, LexemeKind::Identifier)
    }

    /// Wrap a comment span, unvalidated.
    pub fn classify_comment(&self, base: LexemeBase) -> Lexeme {
        Lexeme::new(base, LexemeKind::Comment)
    }

    /// Wrap a whitespace span, unvalidated.
    pub fn classify_whitespace(&self, base: LexemeBase) -> Lexeme {
        Lexeme::new(base, LexemeKind::Whitespace)
    }

    /// Resolve a keyword span.
    ///
    /// A non-empty spelling consisting entirely of upper-case letters
    /// is folded to lower case before lookup and remembered as
    /// upper-case for display. Anything else must match a canonical
    /// spelling exactly; mixed case never resolves.
    pub fn classify_keyword(&self, base: LexemeBase) -> Result<Lexeme, LexError> {
        let text = base.text.as_str();
        let uppercase = !text.is_empty() && text.chars().all(|c| c.is_ascii_uppercase());

        let keyword = if uppercase {
            keywords::lookup(&text.to_ascii_lowercase())
        } else {
            keywords::lookup(text)
        };

        match keyword {
            Some(keyword) => Ok(Lexeme::new(base, LexemeKind::Keyword { keyword, uppercase })),
            None => Err(LexError::unknown_keyword(base.position, text)),
        }
    }

    /// Resolve an operator span by exact text.
    pub fn classify_operator(&self, base: LexemeBase) -> Result<Lexeme, LexError> {
        match operators::lookup(base.text.as_str()) {
            Some(operator) => Ok(Lexeme::new(base, LexemeKind::Operator(operator))),
            None => Err(LexError::unknown_operator(base.position, base.text.as_str())),
        }
    }

    /// Decode an integer span into base-2^64 digit groups.
    pub fn classify_integer(&self, base: LexemeBase) -> Result<Lexeme, LexError> {
        let digits = integer::decode(&base)?;
        Ok(Lexeme::new(base, LexemeKind::Integer(digits)))
    }

    /// Decode a character literal span to its byte value.
    pub fn classify_char(&self, base: LexemeBase) -> Result<Lexeme, LexError> {
        let value = text::decode_char(&base, self.config.bare_chars)?;
        Ok(Lexeme::new(base, LexemeKind::Char { value }))
    }

    /// Decode a string literal span to its expanded text.
    pub fn classify_string(&self, base: LexemeBase) -> Result<Lexeme, LexError> {
        let expanded = text::decode_string(&base, self.config.bare_strings)?;
        Ok(Lexeme::new(base, LexemeKind::String { expanded }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tali_ir::{Keyword, Operator};

    fn classifier() -> Classifier {
        Classifier::new(ClassifyConfig::default())
    }

    fn bare_classifier() -> Classifier {
        Classifier::new(ClassifyConfig {
            bare_chars: true,
            bare_strings: true,
        })
    }

    #[test]
    fn test_keyword_canonical_spelling() {
        let lexeme = classifier()
            .classify_keyword(LexemeBase::new(1, 1, "begin"))
            .unwrap();
        assert_eq!(
            lexeme.kind,
            LexemeKind::Keyword {
                keyword: Keyword::Begin,
                uppercase: false,
            }
        );
    }

    #[test]
    fn test_keyword_all_uppercase_folds_and_records_flag() {
        let lexeme = classifier()
            .classify_keyword(LexemeBase::new(1, 1, "BEGIN"))
            .unwrap();
        assert_eq!(
            lexeme.kind,
            LexemeKind::Keyword {
                keyword: Keyword::Begin,
                uppercase: true,
            }
        );
    }

    #[test]
    fn test_keyword_mixed_case_fails() {
        let err = classifier()
            .classify_keyword(LexemeBase::new(2, 5, "Begin"))
            .unwrap_err();
        assert_eq!(
            err.kind,
            LexErrorKind::UnknownKeyword {
                text: "Begin".into()
            }
        );
        assert_eq!(err.position.line, 2);
        assert_eq!(err.position.column, 5);
    }

    #[test]
    fn test_keyword_unknown_uppercase_fails() {
        assert!(classifier()
            .classify_keyword(LexemeBase::new(1, 1, "WRITELN"))
            .is_err());
    }

    #[test]
    fn test_operator_resolution() {
        let lexeme = classifier()
            .classify_operator(LexemeBase::new(1, 1, ":="))
            .unwrap();
        assert_eq!(lexeme.kind, LexemeKind::Operator(Operator::Assign));
        assert!(classifier()
            .classify_operator(LexemeBase::new(1, 1, "=>"))
            .is_err());
    }

    #[test]
    fn test_integer_classification() {
        let lexeme = classifier()
            .classify_integer(LexemeBase::new(3, 1, "0x1A"))
            .unwrap();
        match lexeme.kind {
            LexemeKind::Integer(digits) => {
                assert_eq!(digits.first, 26);
                assert_eq!(digits.radix, tali_ir::Radix::Hex);
            }
            other => panic!("expected Integer, got {other:?}"),
        }
    }

    #[test]
    fn test_char_classification_respects_config() {
        let quoted = classifier()
            .classify_char(LexemeBase::new(1, 1, r"'\n'"))
            .unwrap();
        assert_eq!(quoted.kind, LexemeKind::Char { value: 10 });

        let bare = bare_classifier()
            .classify_char(LexemeBase::new(1, 1, "a"))
            .unwrap();
        assert_eq!(bare.kind, LexemeKind::Char { value: 97 });

        assert!(classifier()
            .classify_char(LexemeBase::new(1, 1, "a"))
            .is_err());
    }

    #[test]
    fn test_string_classification() {
        let lexeme = classifier()
            .classify_string(LexemeBase::new(1, 1, "\"a\\tb\""))
            .unwrap();
        assert_eq!(
            lexeme.kind,
            LexemeKind::String {
                expanded: "a\tb".into()
            }
        );
    }

    #[test]
    fn test_trivia_classifiers_wrap_anything() {
        let comment = classifier().classify_comment(LexemeBase::new(1, 1, "{ anything }"));
        assert_eq!(comment.kind, LexemeKind::Comment);
        let space = classifier().classify_whitespace(LexemeBase::new(1, 13, "  \n\t"));
        assert_eq!(space.kind, LexemeKind::Whitespace);
        assert!(space.kind.is_trivia());
    }

    #[test]
    fn test_classified_lexeme_keeps_its_span() {
        let lexeme = classifier()
            .classify_keyword(LexemeBase::new(7, 3, "while"))
            .unwrap();
        assert_eq!(lexeme.position(), tali_ir::Position::new(7, 3));
        assert_eq!(lexeme.base.text, "while");
    }
}
