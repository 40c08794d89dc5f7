//! End-to-end tests: lexemes through the arena into the classifier.

#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use tali_ir::{
    Accessor, BinaryOp, Builtin, Call, ConstDecl, Expr, ExprId, Grammar, LexemeBase, LexemeId,
    Position, UnaryOp,
};
use tali_lexer::{Classifier, ClassifyConfig};

use crate::{ConstClassifier, ConstScope, ConstValue, SemanticsErrorKind};

fn classifier() -> Classifier {
    Classifier::new(ClassifyConfig::default())
}

fn ident(grammar: &mut Grammar, name: &str) -> LexemeId {
    grammar.push_lexeme(classifier().classify_identifier(LexemeBase::new(1, 1, name)))
}

fn int_literal_at(grammar: &mut Grammar, line: u32, column: u32, text: &str) -> ExprId {
    let lexeme = classifier()
        .classify_integer(LexemeBase::new(line, column, text))
        .unwrap();
    let id = grammar.push_lexeme(lexeme);
    grammar.push_expr(Expr::IntLiteral(id))
}

fn int_literal(grammar: &mut Grammar, text: &str) -> ExprId {
    int_literal_at(grammar, 1, 1, text)
}

fn char_literal(grammar: &mut Grammar, text: &str) -> ExprId {
    let lexeme = classifier()
        .classify_char(LexemeBase::new(1, 1, text))
        .unwrap();
    let id = grammar.push_lexeme(lexeme);
    grammar.push_expr(Expr::CharLiteral(id))
}

fn string_literal(grammar: &mut Grammar, text: &str) -> ExprId {
    let lexeme = classifier()
        .classify_string(LexemeBase::new(1, 1, text))
        .unwrap();
    let id = grammar.push_lexeme(lexeme);
    grammar.push_expr(Expr::StringLiteral(id))
}

/// A bare variable reference: no field or index accessors.
fn bare_lvalue(grammar: &mut Grammar, name: &str) -> ExprId {
    let name = ident(grammar, name);
    let accessors = grammar.accessor_list_empty();
    let lvalue = grammar.push_lvalue(tali_ir::Lvalue { name, accessors });
    grammar.push_expr(Expr::Lvalue(lvalue))
}

#[test]
fn test_int_literal_is_static_with_decoded_value() {
    let mut grammar = Grammar::new();
    let expr = int_literal(&mut grammar, "41");
    let mut sema = ConstClassifier::new(&grammar);
    let value = sema.classify(expr, &ConstScope::new()).unwrap();
    assert_eq!(value, ConstValue::Int(41));
}

#[test]
fn test_char_and_string_literals_are_static() {
    let mut grammar = Grammar::new();
    let c = char_literal(&mut grammar, "'a'");
    let s = string_literal(&mut grammar, "\"a\\tb\"");
    let mut sema = ConstClassifier::new(&grammar);
    let scope = ConstScope::new();
    assert_eq!(sema.classify(c, &scope).unwrap(), ConstValue::Char(97));
    assert_eq!(
        sema.classify(s, &scope).unwrap(),
        ConstValue::Str("a\tb".into())
    );
}

#[test]
fn test_int_literal_beyond_32_bits_is_fatal() {
    let mut grammar = Grammar::new();
    // 2^32: one digit group, but over the 32-bit constant range.
    let expr = int_literal_at(&mut grammar, 3, 7, "4294967296");
    let mut sema = ConstClassifier::new(&grammar);
    let err = sema.classify(expr, &ConstScope::new()).unwrap_err();
    assert!(matches!(
        err.kind,
        SemanticsErrorKind::LiteralTooLarge { .. }
    ));
    assert_eq!(err.position, Some(Position::new(3, 7)));
}

#[test]
fn test_multi_group_literal_is_fatal() {
    let mut grammar = Grammar::new();
    // 2^64 spans two digit groups.
    let expr = int_literal(&mut grammar, "18446744073709551616");
    let mut sema = ConstClassifier::new(&grammar);
    assert!(matches!(
        sema.classify(expr, &ConstScope::new()).unwrap_err().kind,
        SemanticsErrorKind::LiteralTooLarge { .. }
    ));
}

#[test]
fn test_operator_forms_static_iff_operands_static() {
    let mut grammar = Grammar::new();
    let one = int_literal(&mut grammar, "1");
    let two = int_literal(&mut grammar, "2");
    let sum = grammar.push_expr(Expr::Binary {
        op: BinaryOp::Add,
        lhs: one,
        rhs: two,
    });
    let x = bare_lvalue(&mut grammar, "x");
    let mixed = grammar.push_expr(Expr::Binary {
        op: BinaryOp::Less,
        lhs: one,
        rhs: x,
    });
    let negated = grammar.push_expr(Expr::Unary {
        op: UnaryOp::Negate,
        operand: two,
    });
    let grouped = grammar.push_expr(Expr::Parenthesized { inner: sum });

    let mut sema = ConstClassifier::new(&grammar);
    let scope = ConstScope::new();
    assert!(sema.classify(sum, &scope).unwrap().is_static());
    assert_eq!(sema.classify(mixed, &scope).unwrap(), ConstValue::Dynamic);
    assert!(sema.classify(negated, &scope).unwrap().is_static());
    assert!(sema.classify(grouped, &scope).unwrap().is_static());
}

#[test]
fn test_builtins_are_dynamic_over_static_arguments() {
    let mut grammar = Grammar::new();
    // chr(ord('a')): the inner literal is static, the calls never are.
    let a = char_literal(&mut grammar, "'a'");
    let ord = grammar.push_expr(Expr::Builtin {
        builtin: Builtin::Ord,
        argument: a,
    });
    let chr = grammar.push_expr(Expr::Builtin {
        builtin: Builtin::Chr,
        argument: ord,
    });

    let mut sema = ConstClassifier::new(&grammar);
    let scope = ConstScope::new();
    assert_eq!(sema.classify(chr, &scope).unwrap(), ConstValue::Dynamic);
    assert_eq!(sema.classify(a, &scope).unwrap(), ConstValue::Char(97));
}

#[test]
fn test_calls_are_dynamic_over_literal_arguments() {
    let mut grammar = Grammar::new();
    let callee = ident(&mut grammar, "double");
    let one = int_literal(&mut grammar, "1");
    let args = grammar.expr_list_empty();
    let args = grammar.expr_list_cons(args, one);
    let call = grammar.push_call(Call { callee, args });
    let expr = grammar.push_expr(Expr::Invoke(call));

    let mut sema = ConstClassifier::new(&grammar);
    assert_eq!(
        sema.classify(expr, &ConstScope::new()).unwrap(),
        ConstValue::Dynamic
    );
}

#[test]
fn test_scoped_identifier_is_static_with_stored_value() {
    let mut grammar = Grammar::new();
    let n = bare_lvalue(&mut grammar, "n");
    let mut scope = ConstScope::new();
    scope.define("n", ConstValue::Int(100));

    let mut sema = ConstClassifier::new(&grammar);
    assert_eq!(sema.classify(n, &scope).unwrap(), ConstValue::Int(100));
}

#[test]
fn test_unknown_identifier_is_dynamic() {
    let mut grammar = Grammar::new();
    let n = bare_lvalue(&mut grammar, "n");
    let mut sema = ConstClassifier::new(&grammar);
    assert_eq!(
        sema.classify(n, &ConstScope::new()).unwrap(),
        ConstValue::Dynamic
    );
}

#[test]
fn test_accessor_forces_dynamic_even_in_scope() {
    let mut grammar = Grammar::new();
    // x[0] where x is a known constant: the accessor wins.
    let name = ident(&mut grammar, "x");
    let zero = int_literal(&mut grammar, "0");
    let index = grammar.push_accessor(Accessor::Index(zero));
    let accessors = grammar.accessor_list_empty();
    let accessors = grammar.accessor_list_cons(accessors, index);
    let lvalue = grammar.push_lvalue(tali_ir::Lvalue { name, accessors });
    let expr = grammar.push_expr(Expr::Lvalue(lvalue));

    let mut scope = ConstScope::new();
    scope.define("x", ConstValue::Int(1));
    let mut sema = ConstClassifier::new(&grammar);
    assert_eq!(sema.classify(expr, &scope).unwrap(), ConstValue::Dynamic);
}

#[test]
fn test_cache_wins_regardless_of_scope() {
    let mut grammar = Grammar::new();
    let n = bare_lvalue(&mut grammar, "n");
    let mut sema = ConstClassifier::new(&grammar);

    let mut scope = ConstScope::new();
    scope.define("n", ConstValue::Int(5));
    assert_eq!(sema.classify(n, &scope).unwrap(), ConstValue::Int(5));

    // Same node, different scope: the memoized answer stands.
    assert_eq!(
        sema.classify(n, &ConstScope::new()).unwrap(),
        ConstValue::Int(5)
    );
}

#[test]
fn test_classification_is_idempotent() {
    let mut grammar = Grammar::new();
    let one = int_literal(&mut grammar, "1");
    let two = int_literal(&mut grammar, "2");
    let sum = grammar.push_expr(Expr::Binary {
        op: BinaryOp::Add,
        lhs: one,
        rhs: two,
    });

    let mut sema = ConstClassifier::new(&grammar);
    let scope = ConstScope::new();
    let first = sema.classify(sum, &scope).unwrap();
    let count = sema.cached_count();
    let second = sema.classify(sum, &scope).unwrap();
    assert_eq!(first, second);
    assert_eq!(sema.cached_count(), count);
}

#[test]
fn test_out_of_bounds_expression_fails() {
    let grammar = Grammar::new();
    let mut sema = ConstClassifier::new(&grammar);
    let err = sema.classify(ExprId::new(99), &ConstScope::new()).unwrap_err();
    assert!(matches!(
        err.kind,
        SemanticsErrorKind::UnresolvedReference(_)
    ));
}

#[test]
fn test_literal_with_wrong_payload_fails() {
    let mut grammar = Grammar::new();
    // An integer literal node pointing at an identifier lexeme.
    let bogus = ident(&mut grammar, "notanumber");
    let expr = grammar.push_expr(Expr::IntLiteral(bogus));
    let mut sema = ConstClassifier::new(&grammar);
    assert!(matches!(
        sema.classify(expr, &ConstScope::new()).unwrap_err().kind,
        SemanticsErrorKind::MalformedLiteral { expected: "integer" }
    ));
}

#[test]
fn test_classify_const_decl_seeds_scopes() {
    let mut grammar = Grammar::new();
    // const n = 2 + 3;
    let two = int_literal(&mut grammar, "2");
    let three = int_literal(&mut grammar, "3");
    let sum = grammar.push_expr(Expr::Binary {
        op: BinaryOp::Add,
        lhs: two,
        rhs: three,
    });
    let name = ident(&mut grammar, "n");
    let decl = grammar.push_const_decl(ConstDecl { name, value: sum });

    let mut sema = ConstClassifier::new(&grammar);
    let value = sema.classify_const_decl(decl, &ConstScope::new()).unwrap();
    assert!(value.is_static());
}
