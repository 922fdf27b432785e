//! Keyword-led forms: blocks, conditionals, let-bindings and function
//! literals. Each handler is entered with its keyword as the current token.

use crate::{
    ast::{
        ast::Expr,
        expressions::{BlockExpr, FnExpr, IfExpr, LetExpr, ParamList, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_expr, expr::parse_logical, parser::Parser};

/// Parses expressions up to and including the next `end` or `else`.
///
/// Returns the block, tagged `Do` whatever `opener` was, together with the
/// terminator that closed it.
pub fn parse_block(parser: &mut Parser, opener: Token) -> Result<(BlockExpr, Token), Error> {
    let mut body = vec![];

    loop {
        if parser.accept(&[TokenKind::End, TokenKind::Else])? {
            let block = BlockExpr {
                operator: opener.with_kind(TokenKind::Do),
                body,
            };
            return Ok((block, parser.previous()?));
        }

        if parser.is_at_end() {
            return Err(parser.error(ErrorImpl::UnexpectedEndOfTokens));
        }

        body.push(parse_expr(parser)?);
    }
}

/// Parses the block following `then` or `else`.
///
/// A body starting with `do` is that explicit block. Otherwise the body is
/// an implicit block opened by the token just consumed.
pub fn parse_body(parser: &mut Parser) -> Result<(BlockExpr, Token), Error> {
    if parser.accept(&[TokenKind::Do])? {
        let opener = parser.previous()?;
        return parse_block(parser, opener);
    }

    let opener = parser.previous()?;
    parse_block(parser, opener)
}

pub fn parse_do_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let opener = parser.advance()?;
    let (block, _) = parse_block(parser, opener)?;

    Ok(Expr::Block(block))
}

/// `if condition then <block> <block>`
///
/// When the then-branch is closed by `end`, a single `else` may follow
/// before the else-branch.
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance()?;
    let condition = parse_logical(parser)?;

    if !parser.accept(&[TokenKind::Then])? {
        return Err(parser.error(ErrorImpl::ExpectedThen {
            found: parser.current_token_kind(),
        }));
    }

    let (then_branch, terminator) = parse_body(parser)?;

    if terminator.kind == TokenKind::End {
        parser.accept(&[TokenKind::Else])?;
    }

    let (else_branch, _) = parse_body(parser)?;

    Ok(Expr::If(IfExpr {
        operator,
        condition: Box::new(condition),
        then_branch,
        else_branch,
    }))
}

/// `let name [=] value`
///
/// The value may be a block, conditional or function literal, otherwise a
/// logical expression. It cannot be another `let`.
pub fn parse_let_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance()?;

    if !parser.accept(&[TokenKind::Identifier])? {
        return Err(parser.error(ErrorImpl::ExpectedIdentifier {
            found: parser.current_token_kind(),
        }));
    }

    let name = SymbolExpr {
        token: parser.previous()?,
    };

    parser.accept(&[TokenKind::Equal])?;

    let kind = parser.current_token_kind();
    let value = match parser.get_form_lookup().get(&kind).copied() {
        Some(form_fn) if kind != TokenKind::Let => parser.nested(form_fn)?,
        _ => parse_logical(parser)?,
    };

    Ok(Expr::Let(LetExpr {
        operator,
        name,
        value: Box::new(value),
    }))
}

/// `fn [|a, b, ...|] <block>`
///
/// The body is always an implicit block opened by `fn` or the closing `|`,
/// so a leading `do` is an expression inside it.
pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance()?;

    let params = if parser.accept(&[TokenKind::Pipe])? {
        let pipe = parser.previous()?;
        let mut params = vec![];

        while parser.accept(&[TokenKind::Identifier])? {
            params.push(SymbolExpr {
                token: parser.previous()?,
            });
            parser.accept(&[TokenKind::Comma])?;
        }

        if !parser.accept(&[TokenKind::Pipe])? {
            return Err(parser.error(ErrorImpl::ExpectedClosingPipe {
                found: parser.current_token_kind(),
            }));
        }

        ParamList {
            operator: Some(pipe),
            params,
        }
    } else {
        ParamList::default()
    };

    let opener = parser.previous()?;
    let (body, _) = parse_block(parser, opener)?;

    Ok(Expr::Fn(FnExpr {
        operator,
        params,
        body,
    }))
}
