//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a sequence of tokens for parsing. It handles:
//!
//! - Dispatch on the first byte of each lexeme through a handler table
//! - Recognition of keywords, identifiers, numbers and strings
//! - One and two character operators, `//` line comments and whitespace
//! - Byte-offset spans for every token

pub mod lexer;
pub mod tokens;
