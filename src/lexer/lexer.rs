use std::{collections::HashMap, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_OPERATOR_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, PUNCTUATION_LOOKUP, RESERVED_LOOKUP};

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref LETTER_RUN: Regex = Regex::new("^[a-zA-Z]+").unwrap();
}

/// Scans one lexeme starting at the lexer's cursor. Selected by the byte
/// under the cursor.
pub type LexHandler = fn(&mut Lexer) -> Result<(), Error>;

pub struct Lexer {
    handlers: HashMap<u8, LexHandler>,
    tokens: Vec<Token>,
    source: String,
    /// Offset of the first byte of the lexeme being scanned
    start: usize,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: &str, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut handlers: HashMap<u8, LexHandler> = HashMap::new();

        for byte in PUNCTUATION_LOOKUP.keys() {
            handlers.insert(*byte, punctuation_handler);
        }

        handlers.insert(b'!', MK_OPERATOR_HANDLER!(TokenKind::Bang, TokenKind::BangEqual));
        handlers.insert(b'=', MK_OPERATOR_HANDLER!(TokenKind::Equal, TokenKind::EqualEqual));
        handlers.insert(b'<', MK_OPERATOR_HANDLER!(TokenKind::Less, TokenKind::LessEqual));
        handlers.insert(b'>', MK_OPERATOR_HANDLER!(TokenKind::Greater, TokenKind::GreaterEqual));
        handlers.insert(b'/', slash_handler);
        handlers.insert(b'"', string_handler);

        for byte in b'0'..=b'9' {
            handlers.insert(byte, number_handler);
        }
        for byte in (b'a'..=b'z').chain(b'A'..=b'Z') {
            handlers.insert(byte, symbol_handler);
        }
        for byte in [b' ', b'\t', b'\r', b'\n'] {
            handlers.insert(byte, skip_handler);
        }

        Lexer {
            handlers,
            tokens: vec![],
            source: source.to_string(),
            start: 0,
            pos: 0,
            file: file_name,
        }
    }

    /// Byte under the cursor.
    pub fn at(&self) -> Result<u8, Error> {
        self.source
            .as_bytes()
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.error(ErrorImpl::UnexpectedEndOfInput))
    }

    /// Byte after the cursor.
    pub fn peek(&self) -> Result<u8, Error> {
        self.source
            .as_bytes()
            .get(self.pos + 1)
            .copied()
            .ok_or_else(|| self.error(ErrorImpl::UnexpectedEndOfInput))
    }

    pub fn advance(&mut self) -> Result<(), Error> {
        self.advance_n(1)
    }

    pub fn advance_n(&mut self, n: usize) -> Result<(), Error> {
        if self.pos + n > self.source.len() {
            return Err(self.error(ErrorImpl::UnexpectedEndOfInput));
        }

        self.pos += n;
        Ok(())
    }

    /// Emits a token spanning from the lexeme start to the cursor.
    pub fn push(&mut self, kind: TokenKind) {
        let token = MK_TOKEN!(kind, self.start, self.pos - self.start);
        trace!(kind = %token.kind, start = token.start, length = token.length, "token");
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        self.source.get(self.pos..).unwrap_or("")
    }

    pub fn lexeme(&self) -> &str {
        self.source.get(self.start..self.pos).unwrap_or("")
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        self.error_at(self.pos, error_impl)
    }

    fn error_at(&self, offset: usize, error_impl: ErrorImpl) -> Error {
        // Offsets past 4 GiB saturate
        let offset = u32::try_from(offset).unwrap_or(u32::MAX);
        Error::new(error_impl, Position(offset, Rc::clone(&self.file)))
    }

    fn unrecognised(&self) -> Error {
        let character = self.remainder().chars().next().unwrap_or('\0');
        self.error(ErrorImpl::UnrecognisedCharacter { character })
    }
}

fn punctuation_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let kind = match PUNCTUATION_LOOKUP.get(&lexer.at()?) {
        Some(kind) => *kind,
        None => return Err(lexer.unrecognised()),
    };

    lexer.advance()?;
    lexer.push(kind);
    Ok(())
}

fn slash_handler(lexer: &mut Lexer) -> Result<(), Error> {
    if lexer.peek()? != b'/' {
        lexer.advance()?;
        lexer.push(TokenKind::Slash);
        return Ok(());
    }

    // Line comment, the newline itself is left for skip_handler
    lexer.advance_n(2)?;
    while !lexer.at_eof() && lexer.at()? != b'\n' {
        lexer.advance()?;
    }

    Ok(())
}

fn string_handler(lexer: &mut Lexer) -> Result<(), Error> {
    lexer.advance()?;

    match lexer.remainder().find('"') {
        Some(closing) => {
            lexer.advance_n(closing + 1)?;
            lexer.push(TokenKind::String);
            Ok(())
        }
        None => Err(lexer.error_at(lexer.start, ErrorImpl::UnterminatedString)),
    }
}

fn number_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let whole = DIGIT_RUN.find(lexer.remainder()).map_or(0, |m| m.end());
    lexer.advance_n(whole)?;

    if !lexer.at_eof() && lexer.at()? == b'.' {
        lexer.advance()?;

        let fraction = DIGIT_RUN.find(lexer.remainder()).map_or(0, |m| m.end());
        if fraction == 0 {
            return Err(lexer.error(ErrorImpl::ExpectedDigitAfterDecimal));
        }
        lexer.advance_n(fraction)?;
    }

    lexer.push(TokenKind::Number);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer) -> Result<(), Error> {
    let run = LETTER_RUN.find(lexer.remainder()).map_or(0, |m| m.end());
    lexer.advance_n(run)?;

    let kind = RESERVED_LOOKUP
        .get(lexer.lexeme())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(kind);
    Ok(())
}

fn skip_handler(lexer: &mut Lexer) -> Result<(), Error> {
    lexer.advance()
}

/// Scans `source` into a token sequence terminated by a zero-length `EOF`
/// token at the end of the source.
///
/// `file` names the source in error positions and defaults to `"shell"`.
pub fn tokenize(source: &str, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        lex.start = lex.pos;

        let handler = match lex.handlers.get(&lex.at()?) {
            Some(handler) => *handler,
            None => return Err(lex.unrecognised()),
        };

        handler(&mut lex)?;
    }

    lex.start = lex.pos;
    lex.push(TokenKind::EOF);

    debug!(file = %lex.file, tokens = lex.tokens.len(), "tokenized source");
    Ok(lex.tokens)
}
