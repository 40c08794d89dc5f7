//! The memoized constant classifier.
//!
//! Walks expression subtrees of the [`Grammar`] and decides, for each
//! node, whether it is a compile-time constant and of what kind.
//! Results are memoized per expression node; since each node is one
//! syntactic occurrence, evaluated in one fixed lexical scope, the
//! cache is keyed by node index alone.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use tali_ir::{ConstDeclId, Expr, ExprId, Grammar, LexemeId, LexemeKind};

use crate::errors::SemanticsError;
use crate::scope::ConstScope;
use crate::value::ConstValue;

/// Classifies expressions as static or dynamic, memoizing per node.
///
/// # Caller Invariant
///
/// The cache ignores which scope produced an answer: a node classified
/// once is never reconsidered. Each classifier instance must therefore
/// only see scopes that agree on every name its expressions mention —
/// in practice, one instance per lexical scope.
pub struct ConstClassifier<'g> {
    grammar: &'g Grammar,
    cache: FxHashMap<ExprId, ConstValue>,
}

impl<'g> ConstClassifier<'g> {
    /// Create a classifier over a finished parse tree.
    pub fn new(grammar: &'g Grammar) -> Self {
        ConstClassifier {
            grammar,
            cache: FxHashMap::default(),
        }
    }

    /// Number of expressions classified so far.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Classify one expression under the given scope.
    ///
    /// Returns the expression's [`ConstValue`] — never
    /// [`ConstValue::Null`] — or fails for an expression reference that
    /// does not resolve, a malformed literal payload, or an integer
    /// literal beyond the 32-bit constant range.
    pub fn classify(
        &mut self,
        expr: ExprId,
        scope: &ConstScope,
    ) -> Result<ConstValue, SemanticsError> {
        if let Some(value) = self.cache.get(&expr) {
            trace!(expr = expr.raw(), "constant classification cache hit");
            return Ok(value.clone());
        }
        let value = self.compute(expr, scope)?;
        self.cache.insert(expr, value.clone());
        debug!(expr = expr.raw(), %value, "classified expression");
        Ok(value)
    }

    /// Classify the right-hand side of a constant declaration.
    ///
    /// Convenience for the declaration-section walk that seeds scopes.
    pub fn classify_const_decl(
        &mut self,
        decl: ConstDeclId,
        scope: &ConstScope,
    ) -> Result<ConstValue, SemanticsError> {
        let value = self.grammar.try_const_decl(decl)?.value;
        self.classify(value, scope)
    }

    fn compute(&mut self, expr: ExprId, scope: &ConstScope) -> Result<ConstValue, SemanticsError> {
        let node = *self.grammar.try_expr(expr)?;
        match node {
            Expr::IntLiteral(lexeme) => self.int_literal(lexeme),
            Expr::CharLiteral(lexeme) => self.char_literal(lexeme),
            Expr::StringLiteral(lexeme) => self.string_literal(lexeme),

            // An operator form is static iff every operand is; the
            // folded result is not computed yet, so the leading
            // operand's value stands in for it.
            Expr::Binary { lhs, rhs, .. } => {
                let left = self.classify(lhs, scope)?;
                let right = self.classify(rhs, scope)?;
                if left.is_static() && right.is_static() {
                    Ok(left)
                } else {
                    Ok(ConstValue::Dynamic)
                }
            }
            Expr::Unary { operand, .. } => {
                let value = self.classify(operand, scope)?;
                if value.is_static() {
                    Ok(value)
                } else {
                    Ok(ConstValue::Dynamic)
                }
            }
            Expr::Parenthesized { inner } => {
                let value = self.classify(inner, scope)?;
                if value.is_static() {
                    Ok(value)
                } else {
                    Ok(ConstValue::Dynamic)
                }
            }

            // Calls and the four built-ins are evaluated at run time
            // even over literal arguments.
            Expr::Invoke(_) | Expr::Builtin { .. } => Ok(ConstValue::Dynamic),

            Expr::Lvalue(lvalue) => {
                let lvalue = *self.grammar.try_lvalue(lvalue)?;
                let accessors = self.grammar.accessor_lists().try_collect(lvalue.accessors)?;
                if !accessors.is_empty() {
                    // Any `.field` or `[index]` clause forces dynamic.
                    return Ok(ConstValue::Dynamic);
                }
                let name = self.grammar.try_lexeme(lvalue.name)?;
                match scope.lookup(&name.base.text) {
                    Some(value) if value.is_static() => Ok(value.clone()),
                    _ => Ok(ConstValue::Dynamic),
                }
            }
        }
    }

    fn int_literal(&self, id: LexemeId) -> Result<ConstValue, SemanticsError> {
        let lexeme = self.grammar.try_lexeme(id)?;
        let LexemeKind::Integer(digits) = &lexeme.kind else {
            return Err(SemanticsError::malformed_literal(
                lexeme.position(),
                "integer",
            ));
        };
        if !digits.is_single_group() || digits.first > u64::from(u32::MAX) {
            return Err(SemanticsError::literal_too_large(
                lexeme.position(),
                lexeme.base.text.clone(),
            ));
        }
        Ok(ConstValue::Int(digits.first as u32))
    }

    fn char_literal(&self, id: LexemeId) -> Result<ConstValue, SemanticsError> {
        let lexeme = self.grammar.try_lexeme(id)?;
        let LexemeKind::Char { value } = lexeme.kind else {
            return Err(SemanticsError::malformed_literal(lexeme.position(), "char"));
        };
        Ok(ConstValue::Char(value))
    }

    fn string_literal(&self, id: LexemeId) -> Result<ConstValue, SemanticsError> {
        let lexeme = self.grammar.try_lexeme(id)?;
        let LexemeKind::String { expanded } = &lexeme.kind else {
            return Err(SemanticsError::malformed_literal(
                lexeme.position(),
                "string",
            ));
        };
        Ok(ConstValue::Str(expanded.clone()))
    }
}
