//! The parse-tree arena.
//!
//! [`Grammar`] owns the lexeme sequence and one append-only table per
//! nonterminal. The parser builds the tree bottom-up through the
//! factory operations (`push_*`, `*_list_empty`/`*_list_cons`,
//! `*_none`/`*_some`); each call appends one record and returns a fresh
//! typed index that stays valid for the lifetime of the arena.
//!
//! Factories perform **no validation** of the references they are
//! given: the parser controls its own calls, so defensive checks are
//! deferred to consumers, which use the checked `try_*` accessors and
//! receive a [`GrammarError`] for a reference that does not resolve.
//!
//! # Module Structure
//!
//! - `ids`: typed `u32` index newtypes, one per nonterminal
//! - `expr`: expression nodes and operator enums
//! - `stmt`: statement nodes, calls, lvalues, accessors
//! - `decl`: program, block, sections, routines, type expressions
//! - `list`: the generic `Empty | Cons` and `Empty | Value` patterns

mod decl;
mod expr;
pub(crate) mod ids;
mod list;
mod stmt;

pub use decl::{
    Block, ConstDecl, ConstSection, FuncDecl, ParamGroup, ParamList, ProcDecl, Program, Routine,
    TypeDecl, TypeExpr, TypeSection, VarDecl, VarSection,
};
pub use expr::{BinaryOp, Builtin, Expr, UnaryOp};
pub use ids::{
    AccessorId, AssignId, BlockId, CallId, CompoundId, ConstDeclId, ConstSectionId, ExprId, ForId,
    FuncDeclId, IfId, LvalueId, ParamGroupId, ParamListId, ProcDeclId, ProgramId, RoutineId,
    StatementId, TypeDeclId, TypeExprId, TypeSectionId, VarDeclId, VarSectionId, WhileId,
};
pub use list::{ListId, ListNode, ListTable, OptId, OptNode, OptTable};
pub use stmt::{Accessor, Assign, Call, Compound, For, ForDirection, If, Lvalue, Statement, While};

use crate::error::GrammarError;
use crate::{Lexeme, LexemeId};

/// Convert a table length to a fresh u32 index.
///
/// # Panics
/// Panics if the table has reached `u32::MAX` entries; no real source
/// file produces a tree anywhere near that size.
#[inline]
pub(crate) fn to_u32(len: usize, what: &'static str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} table exceeds u32::MAX entries"))
}

/// The parse tree: the lexeme sequence plus every nonterminal table.
///
/// Strictly additive; no existing entry is ever altered, so already
/// created nodes may be read freely while construction continues.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grammar {
    lexemes: Vec<Lexeme>,

    // One main table per nonterminal.
    programs: Vec<Program>,
    blocks: Vec<Block>,
    const_sections: Vec<ConstSection>,
    const_decls: Vec<ConstDecl>,
    type_sections: Vec<TypeSection>,
    type_decls: Vec<TypeDecl>,
    var_sections: Vec<VarSection>,
    var_decls: Vec<VarDecl>,
    type_exprs: Vec<TypeExpr>,
    routines: Vec<Routine>,
    proc_decls: Vec<ProcDecl>,
    func_decls: Vec<FuncDecl>,
    param_lists: Vec<ParamList>,
    param_groups: Vec<ParamGroup>,
    statements: Vec<Statement>,
    assigns: Vec<Assign>,
    compounds: Vec<Compound>,
    ifs: Vec<If>,
    whiles: Vec<While>,
    fors: Vec<For>,
    calls: Vec<Call>,
    lvalues: Vec<Lvalue>,
    accessors: Vec<Accessor>,
    exprs: Vec<Expr>,

    // List-shaped nonterminals, one instantiation per element type.
    lexeme_lists: ListTable<LexemeId>,
    const_decl_lists: ListTable<ConstDeclId>,
    type_decl_lists: ListTable<TypeDeclId>,
    var_decl_lists: ListTable<VarDeclId>,
    routine_lists: ListTable<RoutineId>,
    param_group_lists: ListTable<ParamGroupId>,
    statement_lists: ListTable<StatementId>,
    accessor_lists: ListTable<AccessorId>,
    expr_lists: ListTable<ExprId>,

    // Optional nonterminals.
    const_section_opts: OptTable<ConstSectionId>,
    type_section_opts: OptTable<TypeSectionId>,
    var_section_opts: OptTable<VarSectionId>,
    param_list_opts: OptTable<ParamListId>,
    statement_opts: OptTable<StatementId>,
}

impl Grammar {
    /// Create an empty arena.
    pub fn new() -> Self {
        Grammar {
            lexemes: Vec::new(),
            programs: Vec::new(),
            blocks: Vec::new(),
            const_sections: Vec::new(),
            const_decls: Vec::new(),
            type_sections: Vec::new(),
            type_decls: Vec::new(),
            var_sections: Vec::new(),
            var_decls: Vec::new(),
            type_exprs: Vec::new(),
            routines: Vec::new(),
            proc_decls: Vec::new(),
            func_decls: Vec::new(),
            param_lists: Vec::new(),
            param_groups: Vec::new(),
            statements: Vec::new(),
            assigns: Vec::new(),
            compounds: Vec::new(),
            ifs: Vec::new(),
            whiles: Vec::new(),
            fors: Vec::new(),
            calls: Vec::new(),
            lvalues: Vec::new(),
            accessors: Vec::new(),
            exprs: Vec::new(),
            lexeme_lists: ListTable::new("identifier list"),
            const_decl_lists: ListTable::new("constant declaration list"),
            type_decl_lists: ListTable::new("type declaration list"),
            var_decl_lists: ListTable::new("variable declaration list"),
            routine_lists: ListTable::new("routine list"),
            param_group_lists: ListTable::new("parameter group list"),
            statement_lists: ListTable::new("statement list"),
            accessor_lists: ListTable::new("accessor list"),
            expr_lists: ListTable::new("expression list"),
            const_section_opts: OptTable::new("optional constant section"),
            type_section_opts: OptTable::new("optional type section"),
            var_section_opts: OptTable::new("optional variable section"),
            param_list_opts: OptTable::new("optional parameter list"),
            statement_opts: OptTable::new("optional statement"),
        }
    }

    // === Lexemes ===

    /// Append a classified lexeme to the token stream.
    pub fn push_lexeme(&mut self, lexeme: Lexeme) -> LexemeId {
        let id = LexemeId::new(to_u32(self.lexemes.len(), "lexeme"));
        self.lexemes.push(lexeme);
        id
    }

    /// Read a lexeme, trusting the reference.
    #[inline]
    pub fn lexeme(&self, id: LexemeId) -> &Lexeme {
        &self.lexemes[id.index()]
    }

    /// Read a lexeme, reporting a fault for an unresolvable reference.
    pub fn try_lexeme(&self, id: LexemeId) -> Result<&Lexeme, GrammarError> {
        self.lexemes
            .get(id.index())
            .ok_or_else(|| GrammarError::out_of_bounds("lexeme", id.raw(), self.lexemes.len() as u32))
    }

    /// The classified token stream, in source order.
    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    /// Number of lexemes in the stream.
    pub fn lexeme_count(&self) -> usize {
        self.lexemes.len()
    }

    // === Single-production nonterminals ===

    /// Factory for `program Name ; Block .`
    pub fn push_program(&mut self, node: Program) -> ProgramId {
        let id = ProgramId::new(to_u32(self.programs.len(), "program"));
        self.programs.push(node);
        id
    }

    /// Read a program node.
    #[inline]
    pub fn program(&self, id: ProgramId) -> &Program {
        &self.programs[id.index()]
    }

    /// Factory for a block.
    pub fn push_block(&mut self, node: Block) -> BlockId {
        let id = BlockId::new(to_u32(self.blocks.len(), "block"));
        self.blocks.push(node);
        id
    }

    /// Read a block node.
    #[inline]
    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    /// Factory for a `const` section.
    pub fn push_const_section(&mut self, node: ConstSection) -> ConstSectionId {
        let id = ConstSectionId::new(to_u32(self.const_sections.len(), "constant section"));
        self.const_sections.push(node);
        id
    }

    /// Read a `const` section node.
    #[inline]
    pub fn const_section(&self, id: ConstSectionId) -> &ConstSection {
        &self.const_sections[id.index()]
    }

    /// Factory for one constant declaration.
    pub fn push_const_decl(&mut self, node: ConstDecl) -> ConstDeclId {
        let id = ConstDeclId::new(to_u32(self.const_decls.len(), "constant declaration"));
        self.const_decls.push(node);
        id
    }

    /// Read a constant declaration node.
    #[inline]
    pub fn const_decl(&self, id: ConstDeclId) -> &ConstDecl {
        &self.const_decls[id.index()]
    }

    /// Read a constant declaration node, reporting a fault for an
    /// unresolvable reference.
    pub fn try_const_decl(&self, id: ConstDeclId) -> Result<&ConstDecl, GrammarError> {
        self.const_decls.get(id.index()).ok_or_else(|| {
            GrammarError::out_of_bounds("constant declaration", id.raw(), self.const_decls.len() as u32)
        })
    }

    /// Factory for a `type` section.
    pub fn push_type_section(&mut self, node: TypeSection) -> TypeSectionId {
        let id = TypeSectionId::new(to_u32(self.type_sections.len(), "type section"));
        self.type_sections.push(node);
        id
    }

    /// Read a `type` section node.
    #[inline]
    pub fn type_section(&self, id: TypeSectionId) -> &TypeSection {
        &self.type_sections[id.index()]
    }

    /// Factory for one type declaration.
    pub fn push_type_decl(&mut self, node: TypeDecl) -> TypeDeclId {
        let id = TypeDeclId::new(to_u32(self.type_decls.len(), "type declaration"));
        self.type_decls.push(node);
        id
    }

    /// Read a type declaration node.
    #[inline]
    pub fn type_decl(&self, id: TypeDeclId) -> &TypeDecl {
        &self.type_decls[id.index()]
    }

    /// Factory for a `var` section.
    pub fn push_var_section(&mut self, node: VarSection) -> VarSectionId {
        let id = VarSectionId::new(to_u32(self.var_sections.len(), "variable section"));
        self.var_sections.push(node);
        id
    }

    /// Read a `var` section node.
    #[inline]
    pub fn var_section(&self, id: VarSectionId) -> &VarSection {
        &self.var_sections[id.index()]
    }

    /// Factory for one variable (or record field) declaration.
    pub fn push_var_decl(&mut self, node: VarDecl) -> VarDeclId {
        let id = VarDeclId::new(to_u32(self.var_decls.len(), "variable declaration"));
        self.var_decls.push(node);
        id
    }

    /// Read a variable declaration node.
    #[inline]
    pub fn var_decl(&self, id: VarDeclId) -> &VarDecl {
        &self.var_decls[id.index()]
    }

    /// Factory for a type expression (any production).
    pub fn push_type_expr(&mut self, node: TypeExpr) -> TypeExprId {
        let id = TypeExprId::new(to_u32(self.type_exprs.len(), "type expression"));
        self.type_exprs.push(node);
        id
    }

    /// Read a type expression node.
    #[inline]
    pub fn type_expr(&self, id: TypeExprId) -> &TypeExpr {
        &self.type_exprs[id.index()]
    }

    /// Factory for a routine (either production).
    pub fn push_routine(&mut self, node: Routine) -> RoutineId {
        let id = RoutineId::new(to_u32(self.routines.len(), "routine"));
        self.routines.push(node);
        id
    }

    /// Read a routine node.
    #[inline]
    pub fn routine(&self, id: RoutineId) -> &Routine {
        &self.routines[id.index()]
    }

    /// Factory for a procedure declaration.
    pub fn push_proc_decl(&mut self, node: ProcDecl) -> ProcDeclId {
        let id = ProcDeclId::new(to_u32(self.proc_decls.len(), "procedure declaration"));
        self.proc_decls.push(node);
        id
    }

    /// Read a procedure declaration node.
    #[inline]
    pub fn proc_decl(&self, id: ProcDeclId) -> &ProcDecl {
        &self.proc_decls[id.index()]
    }

    /// Factory for a function declaration.
    pub fn push_func_decl(&mut self, node: FuncDecl) -> FuncDeclId {
        let id = FuncDeclId::new(to_u32(self.func_decls.len(), "function declaration"));
        self.func_decls.push(node);
        id
    }

    /// Read a function declaration node.
    #[inline]
    pub fn func_decl(&self, id: FuncDeclId) -> &FuncDecl {
        &self.func_decls[id.index()]
    }

    /// Factory for a parameter list.
    pub fn push_param_list(&mut self, node: ParamList) -> ParamListId {
        let id = ParamListId::new(to_u32(self.param_lists.len(), "parameter list"));
        self.param_lists.push(node);
        id
    }

    /// Read a parameter list node.
    #[inline]
    pub fn param_list(&self, id: ParamListId) -> &ParamList {
        &self.param_lists[id.index()]
    }

    /// Factory for one parameter group.
    pub fn push_param_group(&mut self, node: ParamGroup) -> ParamGroupId {
        let id = ParamGroupId::new(to_u32(self.param_groups.len(), "parameter group"));
        self.param_groups.push(node);
        id
    }

    /// Read a parameter group node.
    #[inline]
    pub fn param_group(&self, id: ParamGroupId) -> &ParamGroup {
        &self.param_groups[id.index()]
    }

    /// Factory for a statement (any production).
    pub fn push_statement(&mut self, node: Statement) -> StatementId {
        let id = StatementId::new(to_u32(self.statements.len(), "statement"));
        self.statements.push(node);
        id
    }

    /// Read a statement node.
    #[inline]
    pub fn statement(&self, id: StatementId) -> &Statement {
        &self.statements[id.index()]
    }

    /// Factory for an assignment.
    pub fn push_assign(&mut self, node: Assign) -> AssignId {
        let id = AssignId::new(to_u32(self.assigns.len(), "assignment"));
        self.assigns.push(node);
        id
    }

    /// Read an assignment node.
    #[inline]
    pub fn assign(&self, id: AssignId) -> &Assign {
        &self.assigns[id.index()]
    }

    /// Factory for a `begin ... end` sequence.
    pub fn push_compound(&mut self, node: Compound) -> CompoundId {
        let id = CompoundId::new(to_u32(self.compounds.len(), "compound statement"));
        self.compounds.push(node);
        id
    }

    /// Read a compound node.
    #[inline]
    pub fn compound(&self, id: CompoundId) -> &Compound {
        &self.compounds[id.index()]
    }

    /// Factory for an `if` statement.
    pub fn push_if(&mut self, node: If) -> IfId {
        let id = IfId::new(to_u32(self.ifs.len(), "if statement"));
        self.ifs.push(node);
        id
    }

    /// Read an `if` node.
    #[inline]
    pub fn if_stmt(&self, id: IfId) -> &If {
        &self.ifs[id.index()]
    }

    /// Factory for a `while` loop.
    pub fn push_while(&mut self, node: While) -> WhileId {
        let id = WhileId::new(to_u32(self.whiles.len(), "while statement"));
        self.whiles.push(node);
        id
    }

    /// Read a `while` node.
    #[inline]
    pub fn while_stmt(&self, id: WhileId) -> &While {
        &self.whiles[id.index()]
    }

    /// Factory for a `for` loop.
    pub fn push_for(&mut self, node: For) -> ForId {
        let id = ForId::new(to_u32(self.fors.len(), "for statement"));
        self.fors.push(node);
        id
    }

    /// Read a `for` node.
    #[inline]
    pub fn for_stmt(&self, id: ForId) -> &For {
        &self.fors[id.index()]
    }

    /// Factory for a call.
    pub fn push_call(&mut self, node: Call) -> CallId {
        let id = CallId::new(to_u32(self.calls.len(), "call"));
        self.calls.push(node);
        id
    }

    /// Read a call node, trusting the reference.
    #[inline]
    pub fn call(&self, id: CallId) -> &Call {
        &self.calls[id.index()]
    }

    /// Read a call node, reporting a fault for an unresolvable reference.
    pub fn try_call(&self, id: CallId) -> Result<&Call, GrammarError> {
        self.calls
            .get(id.index())
            .ok_or_else(|| GrammarError::out_of_bounds("call", id.raw(), self.calls.len() as u32))
    }

    /// Factory for an lvalue.
    pub fn push_lvalue(&mut self, node: Lvalue) -> LvalueId {
        let id = LvalueId::new(to_u32(self.lvalues.len(), "lvalue"));
        self.lvalues.push(node);
        id
    }

    /// Read an lvalue node, trusting the reference.
    #[inline]
    pub fn lvalue(&self, id: LvalueId) -> &Lvalue {
        &self.lvalues[id.index()]
    }

    /// Read an lvalue node, reporting a fault for an unresolvable reference.
    pub fn try_lvalue(&self, id: LvalueId) -> Result<&Lvalue, GrammarError> {
        self.lvalues
            .get(id.index())
            .ok_or_else(|| GrammarError::out_of_bounds("lvalue", id.raw(), self.lvalues.len() as u32))
    }

    /// Factory for an accessor clause.
    pub fn push_accessor(&mut self, node: Accessor) -> AccessorId {
        let id = AccessorId::new(to_u32(self.accessors.len(), "accessor"));
        self.accessors.push(node);
        id
    }

    /// Read an accessor node.
    #[inline]
    pub fn accessor(&self, id: AccessorId) -> &Accessor {
        &self.accessors[id.index()]
    }

    /// Factory for an expression (any production).
    pub fn push_expr(&mut self, node: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expression"));
        self.exprs.push(node);
        id
    }

    /// Read an expression node, trusting the reference.
    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Read an expression node, reporting a fault for an unresolvable
    /// reference.
    pub fn try_expr(&self, id: ExprId) -> Result<&Expr, GrammarError> {
        self.exprs
            .get(id.index())
            .ok_or_else(|| GrammarError::out_of_bounds("expression", id.raw(), self.exprs.len() as u32))
    }

    /// Number of expression nodes created so far.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // === List-shaped nonterminals ===

    /// Factory for an empty identifier list.
    pub fn lexeme_list_empty(&mut self) -> ListId<LexemeId> {
        self.lexeme_lists.empty()
    }

    /// Factory extending an identifier list by one name.
    pub fn lexeme_list_cons(&mut self, list: ListId<LexemeId>, item: LexemeId) -> ListId<LexemeId> {
        self.lexeme_lists.cons(list, item)
    }

    /// Read access to the identifier list table.
    pub fn lexeme_lists(&self) -> &ListTable<LexemeId> {
        &self.lexeme_lists
    }

    /// Factory for an empty constant declaration list.
    pub fn const_decl_list_empty(&mut self) -> ListId<ConstDeclId> {
        self.const_decl_lists.empty()
    }

    /// Factory extending a constant declaration list.
    pub fn const_decl_list_cons(
        &mut self,
        list: ListId<ConstDeclId>,
        item: ConstDeclId,
    ) -> ListId<ConstDeclId> {
        self.const_decl_lists.cons(list, item)
    }

    /// Read access to the constant declaration list table.
    pub fn const_decl_lists(&self) -> &ListTable<ConstDeclId> {
        &self.const_decl_lists
    }

    /// Factory for an empty type declaration list.
    pub fn type_decl_list_empty(&mut self) -> ListId<TypeDeclId> {
        self.type_decl_lists.empty()
    }

    /// Factory extending a type declaration list.
    pub fn type_decl_list_cons(
        &mut self,
        list: ListId<TypeDeclId>,
        item: TypeDeclId,
    ) -> ListId<TypeDeclId> {
        self.type_decl_lists.cons(list, item)
    }

    /// Read access to the type declaration list table.
    pub fn type_decl_lists(&self) -> &ListTable<TypeDeclId> {
        &self.type_decl_lists
    }

    /// Factory for an empty variable declaration list.
    pub fn var_decl_list_empty(&mut self) -> ListId<VarDeclId> {
        self.var_decl_lists.empty()
    }

    /// Factory extending a variable declaration list.
    pub fn var_decl_list_cons(
        &mut self,
        list: ListId<VarDeclId>,
        item: VarDeclId,
    ) -> ListId<VarDeclId> {
        self.var_decl_lists.cons(list, item)
    }

    /// Read access to the variable declaration list table.
    pub fn var_decl_lists(&self) -> &ListTable<VarDeclId> {
        &self.var_decl_lists
    }

    /// Factory for an empty routine list.
    pub fn routine_list_empty(&mut self) -> ListId<RoutineId> {
        self.routine_lists.empty()
    }

    /// Factory extending a routine list.
    pub fn routine_list_cons(&mut self, list: ListId<RoutineId>, item: RoutineId) -> ListId<RoutineId> {
        self.routine_lists.cons(list, item)
    }

    /// Read access to the routine list table.
    pub fn routine_lists(&self) -> &ListTable<RoutineId> {
        &self.routine_lists
    }

    /// Factory for an empty parameter group list.
    pub fn param_group_list_empty(&mut self) -> ListId<ParamGroupId> {
        self.param_group_lists.empty()
    }

    /// Factory extending a parameter group list.
    pub fn param_group_list_cons(
        &mut self,
        list: ListId<ParamGroupId>,
        item: ParamGroupId,
    ) -> ListId<ParamGroupId> {
        self.param_group_lists.cons(list, item)
    }

    /// Read access to the parameter group list table.
    pub fn param_group_lists(&self) -> &ListTable<ParamGroupId> {
        &self.param_group_lists
    }

    /// Factory for an empty statement list.
    pub fn statement_list_empty(&mut self) -> ListId<StatementId> {
        self.statement_lists.empty()
    }

    /// Factory extending a statement list.
    pub fn statement_list_cons(
        &mut self,
        list: ListId<StatementId>,
        item: StatementId,
    ) -> ListId<StatementId> {
        self.statement_lists.cons(list, item)
    }

    /// Read access to the statement list table.
    pub fn statement_lists(&self) -> &ListTable<StatementId> {
        &self.statement_lists
    }

    /// Factory for an empty accessor list.
    pub fn accessor_list_empty(&mut self) -> ListId<AccessorId> {
        self.accessor_lists.empty()
    }

    /// Factory extending an accessor list.
    pub fn accessor_list_cons(
        &mut self,
        list: ListId<AccessorId>,
        item: AccessorId,
    ) -> ListId<AccessorId> {
        self.accessor_lists.cons(list, item)
    }

    /// Read access to the accessor list table.
    pub fn accessor_lists(&self) -> &ListTable<AccessorId> {
        &self.accessor_lists
    }

    /// Factory for an empty expression list.
    pub fn expr_list_empty(&mut self) -> ListId<ExprId> {
        self.expr_lists.empty()
    }

    /// Factory extending an expression list.
    pub fn expr_list_cons(&mut self, list: ListId<ExprId>, item: ExprId) -> ListId<ExprId> {
        self.expr_lists.cons(list, item)
    }

    /// Read access to the expression list table.
    pub fn expr_lists(&self) -> &ListTable<ExprId> {
        &self.expr_lists
    }

    // === Optional nonterminals ===

    /// Factory for an absent `const` section.
    pub fn const_section_none(&mut self) -> OptId<ConstSectionId> {
        self.const_section_opts.empty()
    }

    /// Factory for a present `const` section.
    pub fn const_section_some(&mut self, section: ConstSectionId) -> OptId<ConstSectionId> {
        self.const_section_opts.value(section)
    }

    /// Read access to the optional `const` section table.
    pub fn const_section_opts(&self) -> &OptTable<ConstSectionId> {
        &self.const_section_opts
    }

    /// Factory for an absent `type` section.
    pub fn type_section_none(&mut self) -> OptId<TypeSectionId> {
        self.type_section_opts.empty()
    }

    /// Factory for a present `type` section.
    pub fn type_section_some(&mut self, section: TypeSectionId) -> OptId<TypeSectionId> {
        self.type_section_opts.value(section)
    }

    /// Read access to the optional `type` section table.
    pub fn type_section_opts(&self) -> &OptTable<TypeSectionId> {
        &self.type_section_opts
    }

    /// Factory for an absent `var` section.
    pub fn var_section_none(&mut self) -> OptId<VarSectionId> {
        self.var_section_opts.empty()
    }

    /// Factory for a present `var` section.
    pub fn var_section_some(&mut self, section: VarSectionId) -> OptId<VarSectionId> {
        self.var_section_opts.value(section)
    }

    /// Read access to the optional `var` section table.
    pub fn var_section_opts(&self) -> &OptTable<VarSectionId> {
        &self.var_section_opts
    }

    /// Factory for an absent parameter list.
    pub fn param_list_none(&mut self) -> OptId<ParamListId> {
        self.param_list_opts.empty()
    }

    /// Factory for a present parameter list.
    pub fn param_list_some(&mut self, list: ParamListId) -> OptId<ParamListId> {
        self.param_list_opts.value(list)
    }

    /// Read access to the optional parameter list table.
    pub fn param_list_opts(&self) -> &OptTable<ParamListId> {
        &self.param_list_opts
    }

    /// Factory for an absent statement (e.g. a missing `else` branch).
    pub fn statement_none(&mut self) -> OptId<StatementId> {
        self.statement_opts.empty()
    }

    /// Factory for a present statement.
    pub fn statement_some(&mut self, statement: StatementId) -> OptId<StatementId> {
        self.statement_opts.value(statement)
    }

    /// Read access to the optional statement table.
    pub fn statement_opts(&self) -> &OptTable<StatementId> {
        &self.statement_opts
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}
