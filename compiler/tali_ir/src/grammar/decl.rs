//! Declaration nodes: the program shell, blocks, sections, routines,
//! and type expressions.

use crate::grammar::ids::{
    BlockId, CompoundId, ConstDeclId, ConstSectionId, ExprId, FuncDeclId, ParamGroupId, ParamListId,
    ProcDeclId, RoutineId, TypeDeclId, TypeExprId, TypeSectionId, VarDeclId, VarSectionId,
};
use crate::grammar::list::{ListId, OptId};
use crate::LexemeId;

/// The root node: `program Name ; Block .`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Program {
    pub name: LexemeId,
    pub block: BlockId,
}

/// A block: optional declaration sections, routines, then the body.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub consts: OptId<ConstSectionId>,
    pub types: OptId<TypeSectionId>,
    pub vars: OptId<VarSectionId>,
    pub routines: ListId<RoutineId>,
    pub body: CompoundId,
}

/// A `const` section.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstSection {
    pub decls: ListId<ConstDeclId>,
}

/// One constant declaration: `name = expr ;`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ConstDecl {
    pub name: LexemeId,
    pub value: ExprId,
}

/// A `type` section.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeSection {
    pub decls: ListId<TypeDeclId>,
}

/// One type declaration: `name = type-expr ;`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDecl {
    pub name: LexemeId,
    pub ty: TypeExprId,
}

/// A `var` section.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarSection {
    pub decls: ListId<VarDeclId>,
}

/// One variable declaration: `a, b, c : type-expr ;`
///
/// Also reused for record fields, which share the same shape.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct VarDecl {
    pub names: ListId<LexemeId>,
    pub ty: TypeExprId,
}

/// A type expression, one variant per production.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExpr {
    /// A reference to a named type.
    Named(LexemeId),
    /// `array [ len ] of element`.
    Array { len: ExprId, element: TypeExprId },
    /// `record ... end`.
    Record { fields: ListId<VarDeclId> },
}

/// A routine, one variant per production.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Routine {
    Procedure(ProcDeclId),
    Function(FuncDeclId),
}

/// A procedure declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProcDecl {
    pub name: LexemeId,
    pub params: OptId<ParamListId>,
    pub block: BlockId,
}

/// A function declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FuncDecl {
    pub name: LexemeId,
    pub params: OptId<ParamListId>,
    pub return_ty: TypeExprId,
    pub block: BlockId,
}

/// A parenthesized parameter list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParamList {
    pub groups: ListId<ParamGroupId>,
}

/// One parameter group: `a, b : type-expr`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParamGroup {
    pub names: ListId<LexemeId>,
    pub ty: TypeExprId,
}
