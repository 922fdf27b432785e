use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A lexical or syntax error. The first one encountered aborts the whole
/// scan or parse.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedCharacter { .. }
                | ErrorImpl::UnterminatedString
                | ErrorImpl::ExpectedDigitAfterDecimal
                | ErrorImpl::UnexpectedEndOfInput
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::ExpectedDigitAfterDecimal => "ExpectedDigitAfterDecimal",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::ExpectedThen { .. } => "ExpectedThen",
            ErrorImpl::ExpectedIdentifier { .. } => "ExpectedIdentifier",
            ErrorImpl::ExpectedClosingPipe { .. } => "ExpectedClosingPipe",
            ErrorImpl::ExpectedClosingParen { .. } => "ExpectedClosingParen",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::UnexpectedEndOfTokens => "UnexpectedEndOfTokens",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("did you forget a closing `\"`?"))
            }
            ErrorImpl::ExpectedDigitAfterDecimal => ErrorTip::Suggestion(String::from(
                "a decimal point must be followed by at least one digit",
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::None,
            ErrorImpl::ExpectedThen { found } => ErrorTip::Suggestion(format!(
                "expected `then` after condition, found `{}`",
                found
            )),
            ErrorImpl::ExpectedIdentifier { found } => ErrorTip::Suggestion(format!(
                "expected identifier after `let`, found `{}`",
                found
            )),
            ErrorImpl::ExpectedClosingPipe { found } => ErrorTip::Suggestion(format!(
                "parameter lists are closed with `|`, found `{}`",
                found
            )),
            ErrorImpl::ExpectedClosingParen { found } => ErrorTip::Suggestion(format!(
                "expected `)`, found `{}`",
                found
            )),
            ErrorImpl::ExpectedExpression { found } => {
                ErrorTip::Suggestion(format!("`{}` cannot start an expression", found))
            }
            ErrorImpl::UnexpectedEndOfTokens => ErrorTip::Suggestion(String::from(
                "is a block missing its `end`?",
            )),
            ErrorImpl::NestingTooDeep { max } => ErrorTip::Suggestion(format!(
                "expressions may nest at most {} levels deep",
                max
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    // Lexical
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("expected digit after decimal point")]
    ExpectedDigitAfterDecimal,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    // Syntax
    #[error("expected then after condition, found {found}")]
    ExpectedThen { found: TokenKind },
    #[error("expected identifier after let, found {found}")]
    ExpectedIdentifier { found: TokenKind },
    #[error("expected closing pipe, found {found}")]
    ExpectedClosingPipe { found: TokenKind },
    #[error("expected right paren, found {found}")]
    ExpectedClosingParen { found: TokenKind },
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: TokenKind },
    #[error("unexpected end of tokens")]
    UnexpectedEndOfTokens,
    #[error("expression too deeply nested (maximum {max} levels)")]
    NestingTooDeep { max: usize },
}
