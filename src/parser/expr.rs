use tracing::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{BinaryExpr, CallExpr, LiteralExpr, SymbolExpr, UnaryExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

const ATOM_KINDS: &[TokenKind] = &[
    TokenKind::True,
    TokenKind::False,
    TokenKind::Nil,
    TokenKind::Number,
    TokenKind::String,
    TokenKind::Identifier,
];

/// expression := let-form | fn-form | do-form | if-form | logical
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.nested(|parser| {
        let kind = parser.current_token_kind();

        match parser.get_form_lookup().get(&kind).copied() {
            Some(form_fn) => {
                trace!(form = %kind, "form");
                form_fn(parser)
            }
            None => parse_logical(parser),
        }
    })
}

pub fn parse_logical(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, BindingPower::Logical)
}

/// Parses one precedence level: `operand (op operand)*`, folding to the left.
pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_operand(parser, bp)?;

    while parser.accept(bp.operators())? {
        let operator = parser.previous()?;
        let right = parse_operand(parser, bp)?;

        left = Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

fn parse_operand(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    match bp.next() {
        Some(next) => parse_binary_expr(parser, next),
        None => parse_unary_expr(parser),
    }
}

/// unary := ("!" | "-") unary | call
pub fn parse_unary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if !parser.accept(&[TokenKind::Bang, TokenKind::Minus])? {
        return parse_call_expr(parser);
    }

    let operator = parser.previous()?;
    let operand = parser.nested(parse_unary_expr)?;

    Ok(Expr::Unary(UnaryExpr {
        operator,
        operand: Box::new(operand),
    }))
}

/// call := atom ("(" arguments ")")*
///
/// Arguments are expressions separated by optional commas; a trailing
/// comma is allowed.
pub fn parse_call_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut callee = parse_atom(parser)?;

    while parser.accept(&[TokenKind::LeftParen])? {
        let operator = parser.previous()?;
        let mut arguments = vec![];

        while !parser.accept(&[TokenKind::RightParen])? {
            if parser.is_at_end() {
                return Err(parser.error(ErrorImpl::ExpectedClosingParen {
                    found: parser.current_token_kind(),
                }));
            }

            arguments.push(parse_expr(parser)?);
            parser.accept(&[TokenKind::Comma])?;
        }

        callee = Expr::Call(CallExpr {
            operator,
            callee: Box::new(callee),
            arguments,
        });
    }

    Ok(callee)
}

/// atom := literal | identifier | "(" expression ")"
pub fn parse_atom(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.accept(ATOM_KINDS)? {
        let token = parser.previous()?;

        return Ok(if token.kind == TokenKind::Identifier {
            Expr::Symbol(SymbolExpr { token })
        } else {
            Expr::Literal(LiteralExpr { token })
        });
    }

    if parser.accept(&[TokenKind::LeftParen])? {
        let expr = parse_expr(parser)?;

        if !parser.accept(&[TokenKind::RightParen])? {
            return Err(parser.error(ErrorImpl::ExpectedClosingParen {
                found: parser.current_token_kind(),
            }));
        }

        return Ok(expr);
    }

    Err(parser.error(ErrorImpl::ExpectedExpression {
        found: parser.current_token_kind(),
    }))
}
