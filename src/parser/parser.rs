//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry
//! points. The parser is a recursive-descent parser with one token of
//! lookahead. Binary operators are parsed by precedence climbing over the
//! binding power table; keyword-led forms (`let`, `fn`, `do`, `if`) are
//! dispatched through the form lookup table.

use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position, MK_TOKEN,
};

use super::{
    expr::parse_expr,
    lookups::{create_token_lookups, FormHandler, FormLookup},
};

/// Maximum expression nesting depth before the parser bails out instead
/// of overflowing the stack on inputs like `((((...))))`.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed nesting of expressions, unary operators and blocks
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

/// The main parser structure that maintains parsing state.
///
/// A parser is single-use: it owns the token sequence and a cursor into it.
pub struct Parser {
    /// The list of tokens to parse, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Handlers for keyword-led forms
    form_lookup: FormLookup,
    config: ParserConfig,
    /// Current expression nesting depth
    nesting_depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A token sequence that does not end in `EOF` gets one appended after
    /// its last token.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>, config: ParserConfig) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens.last().map_or(0, Token::end);
            tokens.push(MK_TOKEN!(TokenKind::EOF, end, 0));
        }

        Parser {
            tokens,
            pos: 0,
            file,
            form_lookup: FormLookup::new(),
            config,
            nesting_depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Token {
        match self.tokens.get(self.pos) {
            Some(token) => *token,
            None => self.tokens[self.tokens.len() - 1],
        }
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the most recently consumed token.
    pub fn previous(&self) -> Result<Token, Error> {
        self.pos
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .copied()
            .ok_or_else(|| self.error(ErrorImpl::UnexpectedEndOfTokens))
    }

    /// Consumes the current token and returns it. `EOF` is never consumed.
    pub fn advance(&mut self) -> Result<Token, Error> {
        if self.is_at_end() {
            return Err(self.error(ErrorImpl::UnexpectedEndOfTokens));
        }

        self.pos += 1;
        self.previous()
    }

    /// Consumes the current token if its kind is one of `kinds`.
    pub fn accept(&mut self, kinds: &[TokenKind]) -> Result<bool, Error> {
        if !kinds.contains(&self.current_token_kind()) {
            return Ok(false);
        }

        self.advance()?;
        Ok(true)
    }

    /// True once the cursor rests on the final (`EOF`) token.
    pub fn is_at_end(&self) -> bool {
        self.pos + 1 >= self.tokens.len()
    }

    /// Index of the current token.
    pub fn get_cursor(&self) -> usize {
        self.pos
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        let start = u32::try_from(self.current_token().start).unwrap_or(u32::MAX);
        Position(start, Rc::clone(&self.file))
    }

    /// Builds an error located at the current token.
    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }

    /// Returns a reference to the form lookup table.
    pub fn get_form_lookup(&self) -> &FormLookup {
        &self.form_lookup
    }

    /// Registers the handler for a keyword-led form.
    pub fn form(&mut self, kind: TokenKind, form_fn: FormHandler) {
        self.form_lookup.insert(kind, form_fn);
    }

    /// Runs `parse_fn` one nesting level deeper, failing with
    /// `NestingTooDeep` past the configured maximum.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.nesting_depth >= self.config.max_nesting_depth {
            return Err(self.error(ErrorImpl::NestingTooDeep {
                max: self.config.max_nesting_depth,
            }));
        }

        self.nesting_depth += 1;
        let result = parse_fn(self);
        self.nesting_depth -= 1;

        result
    }
}

/// Parses a token sequence into a program with the default configuration.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the top-level expressions or the first Error
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Program, Error>) {
    parse_with_config(tokens, file, ParserConfig::default())
}

pub fn parse_with_config(
    tokens: Vec<Token>,
    file: Rc<String>,
    config: ParserConfig,
) -> (Parser, Result<Program, Error>) {
    let mut parser = Parser::new(tokens, file, config);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while !parser.is_at_end() {
        match parse_expr(&mut parser) {
            Ok(expr) => body.push(expr),
            Err(error) => return (parser, Err(error)),
        }
    }

    debug!(file = %parser.file, expressions = body.len(), "parsed program");
    (parser, Ok(body))
}

/// Tokenizes and parses `source` in one step.
pub fn parse_source(source: &str, file: Option<String>) -> Result<Program, Error> {
    let file_name = file.unwrap_or_else(|| String::from("shell"));
    let tokens = tokenize(source, Some(file_name.clone()))?;

    parse(tokens, Rc::new(file_name)).1
}
