//! Integration tests for the front end.
//!
//! These tests drive the public API the way a downstream evaluator or
//! tooling would: source text through tokenization and parsing to the AST.

use std::rc::Rc;

use doend::{
    ast::{
        ast::{Expr, ExprType, Node},
        printer::{program_to_sexpr, to_sexpr},
    },
    errors::errors::ErrorImpl,
    format_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::{parse, parse_source},
};

const PROGRAM: &str = "\
// Fibonacci, the slow way
let fib = fn |n|
    if n < 2 then n else fib(n - 1) + fib(n - 2) end
end

let greeting = \"hello\"
let loud = !false and 1 <= 2
fib(10)
";

#[test]
fn test_parse_full_program() {
    let program = parse_source(PROGRAM, Some("fib.do".to_string())).unwrap();

    assert_eq!(program.len(), 4);
    assert_eq!(
        program_to_sexpr(&program, PROGRAM),
        "(let fib (fn (params n) (do (if (< n 2) (do n) (do (+ (call fib (- n 1)) (call fib (- n 2))))))))\n\
         (let greeting \"hello\")\n\
         (let loud (and (! false) (<= 1 2)))\n\
         (call fib 10)"
    );
}

#[test]
fn test_tokens_alone_serve_tooling() {
    // Token kinds and spans are enough to highlight source without parsing
    let tokens = tokenize(PROGRAM, None).unwrap();

    let keywords: Vec<&str> = tokens
        .iter()
        .filter(|token| {
            matches!(
                token.kind,
                TokenKind::Let | TokenKind::Fn | TokenKind::If | TokenKind::Then
            )
        })
        .map(|token| token.lexeme(PROGRAM))
        .collect();

    assert_eq!(keywords, vec!["let", "fn", "if", "then", "let", "let"]);
}

#[test]
fn test_evaluator_view_of_nodes() {
    let source = "if ready then go() else wait(1, 2) end";
    let program = parse_source(source, None).unwrap();

    let node: Node = program[0].to_node();
    assert_eq!(node.kind(), Some(TokenKind::If));

    let [condition, then_branch, else_branch] = node.children.as_slice() else {
        panic!("if has three children");
    };
    assert_eq!(condition.operator.unwrap().lexeme(source), "ready");
    assert_eq!(then_branch.kind(), Some(TokenKind::Do));
    assert_eq!(else_branch.kind(), Some(TokenKind::Do));

    let call = &else_branch.children[0];
    assert_eq!(call.kind(), Some(TokenKind::LeftParen));
    assert_eq!(call.children.len(), 3);
    assert_eq!(call.children[0].operator.unwrap().lexeme(source), "wait");
}

#[test]
fn test_block_tags_are_canonical() {
    let source = "do if a then b else c end end fn |x| x end";
    let program = parse_source(source, None).unwrap();

    fn collect_blocks(node: &Node, tags: &mut Vec<TokenKind>) {
        if matches!(node.kind(), Some(TokenKind::Do)) {
            tags.push(TokenKind::Do);
        }
        for child in &node.children {
            collect_blocks(child, tags);
        }
    }

    let mut tags = vec![];
    for expr in &program {
        collect_blocks(&expr.to_node(), &mut tags);
    }

    // outer do, then, else, fn body
    assert_eq!(tags.len(), 4);
}

#[test]
fn test_comment_skipping_end_to_end() {
    let source = "1 // ignored\n2";
    let tokens = tokenize(source, None).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Number, TokenKind::EOF]);

    let (_, program) = parse(tokens, Rc::new("shell".to_string()));
    let program = program.unwrap();
    assert_eq!(program.len(), 2);
    assert!(program
        .iter()
        .all(|expr| expr.get_expr_type() == ExprType::Literal));
}

#[test]
fn test_lexical_error_surfaces_from_parse_source() {
    let error = parse_source("let s = \"abc", Some("bad.do".to_string())).unwrap_err();

    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedString);
    assert!(error.is_lexical());
    assert_eq!(error.get_position().0, 8);
    assert_eq!(error.get_position().1.as_str(), "bad.do");
}

#[test]
fn test_syntax_error_report() {
    let source = "let x = 1\nif x 2 else 3 end";
    let error = parse_source(source, Some("report.do".to_string())).unwrap_err();

    assert_eq!(
        error.get_kind(),
        &ErrorImpl::ExpectedThen {
            found: TokenKind::Number
        }
    );

    let report = format_error(&error, source);
    assert!(report.contains("-> report.do"));
    assert!(report.contains("2 | if x 2 else 3 end"));
    assert!(report.ends_with("| -----^"));
}

#[test]
fn test_precedence_end_to_end() {
    let source = "1 + 2 * 3";
    let program = parse_source(source, None).unwrap();

    let Expr::Binary(sum) = &program[0] else {
        panic!("expected binary, got {:?}", program[0]);
    };
    assert_eq!(sum.operator.kind, TokenKind::Plus);
    assert_eq!(to_sexpr(&sum.left, source), "1");
    assert_eq!(to_sexpr(&sum.right, source), "(* 2 3)");
}

#[test]
fn test_rescanning_is_deterministic() {
    assert_eq!(tokenize(PROGRAM, None), tokenize(PROGRAM, None));
    assert_eq!(parse_source(PROGRAM, None), parse_source(PROGRAM, None));
}
