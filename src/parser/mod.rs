//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a sequence of tokens
//! into a program: an ordered list of top-level expressions. It handles:
//!
//! - Keyword-led forms (`let`, `fn`, `do ... end`, `if ... then ... else`)
//! - Binary operators by precedence climbing, all left-associative
//! - Unary operators, chained calls, literals and grouping
//!
//! Parsing stops at the first error; there is no recovery.

pub mod expr;
pub mod forms;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod property_tests;
