//! Operator resolution.
//!
//! Exact-text lookup only; there are no case or folding concerns.

use tali_ir::Operator;

/// Look up an operator by its exact source text.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Operator> {
    match text {
        "+" => Some(Operator::Plus),
        "-" => Some(Operator::Minus),
        "*" => Some(Operator::Star),
        "/" => Some(Operator::Slash),
        "&" => Some(Operator::Amp),
        "|" => Some(Operator::Pipe),
        "~" => Some(Operator::Tilde),
        "=" => Some(Operator::Eq),
        "<>" => Some(Operator::NotEq),
        "<" => Some(Operator::Lt),
        "<=" => Some(Operator::LtEq),
        ">" => Some(Operator::Gt),
        ">=" => Some(Operator::GtEq),
        "." => Some(Operator::Dot),
        "," => Some(Operator::Comma),
        ":" => Some(Operator::Colon),
        ";" => Some(Operator::Semicolon),
        "(" => Some(Operator::LParen),
        ")" => Some(Operator::RParen),
        "[" => Some(Operator::LBracket),
        "]" => Some(Operator::RBracket),
        ":=" => Some(Operator::Assign),
        "%" => Some(Operator::Percent),
        _ => None,
    }
}
