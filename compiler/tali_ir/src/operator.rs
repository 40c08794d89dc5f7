//! The operator vocabulary of Tali.

use std::fmt;

/// An operator or punctuation token.
///
/// Every distinct source text maps to a distinct variant; in particular
/// `|` (`Pipe`) and `/` (`Slash`) are separate identities.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Plus,     // +
    Minus,    // -
    Star,     // *
    Slash,    // /
    Amp,      // &
    Pipe,     // |
    Tilde,    // ~
    Eq,       // =
    NotEq,    // <>
    Lt,       // <
    LtEq,     // <=
    Gt,       // >
    GtEq,     // >=
    Dot,      // .
    Comma,    // ,
    Colon,    // :
    Semicolon, // ;
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    Assign,   // :=
    Percent,  // %
}

impl Operator {
    /// The source text of this operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Amp => "&",
            Operator::Pipe => "|",
            Operator::Tilde => "~",
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Dot => ".",
            Operator::Comma => ",",
            Operator::Colon => ":",
            Operator::Semicolon => ";",
            Operator::LParen => "(",
            Operator::RParen => ")",
            Operator::LBracket => "[",
            Operator::RBracket => "]",
            Operator::Assign => ":=",
            Operator::Percent => "%",
        }
    }

    /// Every operator, in declaration order.
    pub const ALL: [Operator; 23] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Star,
        Operator::Slash,
        Operator::Amp,
        Operator::Pipe,
        Operator::Tilde,
        Operator::Eq,
        Operator::NotEq,
        Operator::Lt,
        Operator::LtEq,
        Operator::Gt,
        Operator::GtEq,
        Operator::Dot,
        Operator::Comma,
        Operator::Colon,
        Operator::Semicolon,
        Operator::LParen,
        Operator::RParen,
        Operator::LBracket,
        Operator::RBracket,
        Operator::Assign,
        Operator::Percent,
    ];
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texts_are_distinct() {
        let mut texts: Vec<_> = Operator::ALL.iter().map(|op| op.as_str()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), Operator::ALL.len());
    }

    #[test]
    fn test_pipe_and_slash_are_distinct() {
        assert_ne!(Operator::Pipe, Operator::Slash);
        assert_ne!(Operator::Pipe.as_str(), Operator::Slash.as_str());
    }
}
