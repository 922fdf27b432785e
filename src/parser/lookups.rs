use std::collections::HashMap;

use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{forms::*, parser::Parser};

/// Binary precedence levels, loosest first. Every level is
/// left-associative and takes its operands from the next tighter level;
/// operands of `Factor` are unary expressions.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Logical,
    Equality,
    Comparison,
    Term,
    Factor,
}

impl BindingPower {
    pub fn operators(&self) -> &'static [TokenKind] {
        match self {
            BindingPower::Logical => &[TokenKind::And, TokenKind::Or],
            BindingPower::Equality => &[TokenKind::BangEqual, TokenKind::EqualEqual],
            BindingPower::Comparison => &[
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Greater,
                TokenKind::GreaterEqual,
            ],
            BindingPower::Term => &[TokenKind::Minus, TokenKind::Plus],
            BindingPower::Factor => &[TokenKind::Slash, TokenKind::Star],
        }
    }

    /// The next tighter level, `None` below `Factor`.
    pub fn next(&self) -> Option<BindingPower> {
        match self {
            BindingPower::Logical => Some(BindingPower::Equality),
            BindingPower::Equality => Some(BindingPower::Comparison),
            BindingPower::Comparison => Some(BindingPower::Term),
            BindingPower::Term => Some(BindingPower::Factor),
            BindingPower::Factor => None,
        }
    }
}

/// Handles a form whose keyword is the current token.
pub type FormHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    parser.form(TokenKind::Let, parse_let_expr);
    parser.form(TokenKind::Fn, parse_fn_expr);
    parser.form(TokenKind::Do, parse_do_expr);
    parser.form(TokenKind::If, parse_if_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type FormLookup = HashMap<TokenKind, FormHandler>;
