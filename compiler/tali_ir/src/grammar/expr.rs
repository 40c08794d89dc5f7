//! Expression nodes.
//!
//! One sum-typed nonterminal covers the whole expression grammar after
//! precedence has been resolved by the parser: the operator forms,
//! the three literal kinds, calls, the four built-in functions, and
//! lvalue reads.

use std::fmt;

use crate::grammar::ids::{CallId, ExprId, LvalueId};
use crate::LexemeId;

/// A binary operator form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Subtract,
    Or,
    Multiply,
    Divide,
    Modulo,
    And,
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl BinaryOp {
    /// The operator's source text.
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Or => "|",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::And => "&",
            BinaryOp::Equal => "=",
            BinaryOp::NotEqual => "<>",
            BinaryOp::Less => "<",
            BinaryOp::LessOrEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unary operator form.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `+expr` (identity).
    Plus,
    /// `-expr`.
    Negate,
    /// `~expr`.
    Not,
}

impl UnaryOp {
    /// The operator's source text.
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Negate => "-",
            UnaryOp::Not => "~",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the four built-in functions.
///
/// These are recognized by name at parse time and always evaluated at
/// run time, even over literal arguments.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    Chr,
    Ord,
    Pred,
    Succ,
}

impl Builtin {
    /// The built-in's name.
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Chr => "chr",
            Builtin::Ord => "ord",
            Builtin::Pred => "pred",
            Builtin::Succ => "succ",
        }
    }

    /// Resolve a name to a built-in.
    pub fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "chr" => Some(Builtin::Chr),
            "ord" => Some(Builtin::Ord),
            "pred" => Some(Builtin::Pred),
            "succ" => Some(Builtin::Succ),
            _ => None,
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An expression node, one variant per production.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// `lhs op rhs` for any binary operator form.
    Binary {
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    },
    /// `op operand` for any unary operator form.
    Unary { op: UnaryOp, operand: ExprId },
    /// `( inner )`.
    Parenthesized { inner: ExprId },
    /// An integer literal; the lexeme carries the decoded digit groups.
    IntLiteral(LexemeId),
    /// A character literal; the lexeme carries the decoded byte.
    CharLiteral(LexemeId),
    /// A string literal; the lexeme carries the expanded text.
    StringLiteral(LexemeId),
    /// A call to a user routine in expression position.
    Invoke(CallId),
    /// A call to one of the four built-ins.
    Builtin { builtin: Builtin, argument: ExprId },
    /// A read of a variable, field, or array element.
    Lvalue(LvalueId),
}
