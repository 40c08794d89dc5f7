//! Statement nodes, calls, and lvalues.

use crate::grammar::ids::{
    AccessorId, AssignId, CallId, CompoundId, ExprId, ForId, IfId, LvalueId, StatementId, WhileId,
};
use crate::grammar::list::{ListId, OptId};
use crate::LexemeId;

/// A statement, one variant per production.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Statement {
    /// `target := value`.
    Assign(AssignId),
    /// A procedure call in statement position.
    Invoke(CallId),
    /// `begin ... end`.
    Compound(CompoundId),
    /// `if ... then ... [else ...]`.
    If(IfId),
    /// `while ... do ...`.
    While(WhileId),
    /// `for ... := ... to|downto ... do ...`.
    For(ForId),
    /// The empty statement (a bare `;`).
    Empty,
}

/// An assignment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Assign {
    pub target: LvalueId,
    pub value: ExprId,
}

/// A `begin ... end` sequence.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Compound {
    pub statements: ListId<StatementId>,
}

/// An `if` statement; the `else` branch is optional.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct If {
    pub condition: ExprId,
    pub then_branch: StatementId,
    pub else_branch: OptId<StatementId>,
}

/// A `while` loop.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct While {
    pub condition: ExprId,
    pub body: StatementId,
}

/// Which way a `for` loop counts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ForDirection {
    To,
    Downto,
}

/// A counting loop over a control variable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct For {
    /// The control variable's identifier lexeme.
    pub control: LexemeId,
    pub direction: ForDirection,
    pub from: ExprId,
    pub to: ExprId,
    pub body: StatementId,
}

/// A call: callee identifier plus argument expressions.
///
/// Shared between statement position (procedure call) and expression
/// position (function call); the surrounding node decides which.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Call {
    pub callee: LexemeId,
    pub args: ListId<ExprId>,
}

/// A variable reference with accessor clauses.
///
/// `x` is a bare lvalue (empty accessor list); `x.f[i]` chains a field
/// accessor and an index accessor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Lvalue {
    pub name: LexemeId,
    pub accessors: ListId<AccessorId>,
}

/// One accessor clause on an lvalue.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Accessor {
    /// `.field`.
    Field(LexemeId),
    /// `[index]`.
    Index(ExprId),
}
