//! Tali IR - core data types for the Tali compiler front end.
//!
//! This crate contains the data structures shared by the front end:
//! - Positions for 1-based source locations
//! - Lexemes: classified, validated tokens with decoded payloads
//! - The keyword and operator vocabularies
//! - Multi-precision integer payloads as base-2^64 digit groups
//! - The grammar arena: append-only, index-based storage for the
//!   concrete syntax tree
//!
//! # Design Philosophy
//!
//! - **Flatten everything**: no `Box` trees, nodes are referenced by
//!   `u32` index newtypes into per-nonterminal tables
//! - **Append only**: tables never delete or mutate an existing record,
//!   so an index stays valid for the lifetime of the [`Grammar`]
//! - **No validation at construction**: factories store exactly what
//!   they are given; checked `try_` accessors serve consumers that
//!   cannot trust their references

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod digits;
mod error;
pub mod grammar;
mod keyword;
mod lexeme;
mod operator;
mod position;

pub use digits::{IntDigits, Radix};
pub use error::{GrammarError, GrammarErrorKind};
pub use grammar::{
    Accessor, AccessorId, Assign, AssignId, BinaryOp, Block, BlockId, Builtin, Call, CallId,
    Compound, CompoundId, ConstDecl, ConstDeclId, ConstSection, ConstSectionId, Expr, ExprId, For,
    ForDirection, ForId, FuncDecl, FuncDeclId, Grammar, If, IfId, ListId, ListNode, ListTable,
    Lvalue, LvalueId, OptId, OptNode, OptTable, ParamGroup, ParamGroupId, ParamList, ParamListId,
    ProcDecl, ProcDeclId, Program, ProgramId, Routine, RoutineId, Statement, StatementId, TypeDecl,
    TypeDeclId, TypeExpr, TypeExprId, TypeSection, TypeSectionId, UnaryOp, VarDecl, VarDeclId,
    VarSection, VarSectionId, While, WhileId,
};
pub use keyword::Keyword;
pub use lexeme::{Lexeme, LexemeBase, LexemeId, LexemeKind};
pub use operator::Operator;
pub use position::Position;
