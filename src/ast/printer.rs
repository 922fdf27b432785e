//! S-expression rendering of the AST, for debugging and tests.
//!
//! `1 + 2 * 3` renders as `(+ 1 (* 2 3))`, `f(x)` as `(call f x)` and
//! `fn |a| a end` as `(fn (params a) (do a))`. An omitted parameter
//! list renders as `()`.

use crate::lexer::tokens::TokenKind;

use super::ast::{Expr, Node};

pub fn to_sexpr(expr: &Expr, source: &str) -> String {
    let mut out = String::new();
    write_node(&expr.to_node(), source, &mut out);
    out
}

/// Renders every top-level expression on its own line.
pub fn program_to_sexpr(program: &[Expr], source: &str) -> String {
    program
        .iter()
        .map(|expr| to_sexpr(expr, source))
        .collect::<Vec<String>>()
        .join("\n")
}

fn write_node(node: &Node, source: &str, out: &mut String) {
    let Some(operator) = node.operator else {
        out.push_str("()");
        return;
    };

    if operator.kind.is_literal() || operator.kind == TokenKind::Identifier {
        out.push_str(operator.lexeme(source));
        return;
    }

    out.push('(');
    out.push_str(match operator.kind {
        TokenKind::LeftParen => "call",
        TokenKind::Pipe => "params",
        kind => kind.symbol(),
    });
    for child in &node.children {
        out.push(' ');
        write_node(child, source, out);
    }
    out.push(')');
}
