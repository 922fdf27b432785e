use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("fn", TokenKind::Fn);
        map.insert("do", TokenKind::Do);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("nil", TokenKind::Nil);
        // Reserved, no grammar yet
        map.insert("class", TokenKind::Class);
        map.insert("for", TokenKind::For);
        map.insert("print", TokenKind::Print);
        map.insert("return", TokenKind::Return);
        map.insert("super", TokenKind::Super);
        map.insert("this", TokenKind::This);
        map.insert("while", TokenKind::While);
        map
    };

    pub static ref PUNCTUATION_LOOKUP: HashMap<u8, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(b'(', TokenKind::LeftParen);
        map.insert(b')', TokenKind::RightParen);
        map.insert(b',', TokenKind::Comma);
        map.insert(b'.', TokenKind::Dot);
        map.insert(b'-', TokenKind::Minus);
        map.insert(b'+', TokenKind::Plus);
        map.insert(b';', TokenKind::Semicolon);
        map.insert(b'*', TokenKind::Star);
        map.insert(b'|', TokenKind::Pipe);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    LeftParen,
    RightParen,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Star,
    Slash,
    Pipe,

    Bang,         // !
    BangEqual,    // !=
    Equal,        // =
    EqualEqual,   // ==
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Keywords
    Let,
    Fn,
    Do,
    End,
    If,
    Then,
    Else,
    And,
    Or,
    True,
    False,
    Nil,

    // Reserved
    Class,
    For,
    Print,
    Return,
    Super,
    This,
    While,
}

impl TokenKind {
    /// Keywords the lexer recognises but no grammar rule consumes.
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::For
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::While
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::String | TokenKind::True | TokenKind::False | TokenKind::Nil
        )
    }

    /// Canonical source spelling of the kind, or its name for kinds
    /// without a fixed spelling.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Minus => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Pipe => "|",
            TokenKind::Bang => "!",
            TokenKind::BangEqual => "!=",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::Less => "<",
            TokenKind::LessEqual => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEqual => ">=",
            TokenKind::Let => "let",
            TokenKind::Fn => "fn",
            TokenKind::Do => "do",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Nil => "nil",
            TokenKind::Class => "class",
            TokenKind::For => "for",
            TokenKind::Print => "print",
            TokenKind::Return => "return",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::While => "while",
            TokenKind::EOF => "EOF",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme. `start` and `length` are byte offsets into the
/// source the token was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub length: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}..{}", self.kind, self.start, self.end())
    }
}

impl Token {
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Returns the source text this token was derived from.
    ///
    /// Out-of-range spans (a token paired with the wrong source) yield an
    /// empty string rather than panicking.
    pub fn lexeme<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end()).unwrap_or("")
    }

    /// Same token with a different kind. Used to give every block the
    /// canonical `do` tag whichever keyword opened it.
    pub fn with_kind(&self, kind: TokenKind) -> Token {
        Token { kind, ..*self }
    }
}
