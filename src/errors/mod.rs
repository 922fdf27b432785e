//! Error types and error handling for the front end.
//!
//! This module defines the error type shared by the lexer and the parser:
//!
//! - Error structures carrying the byte offset of the failure
//! - Lexical and syntax error variants
//! - Short suggestions for reporting

pub mod errors;
