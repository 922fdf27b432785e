//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_OPERATOR_HANDLER!` - Creates a lexer handler for one-or-two
//!   character operators (`!` / `!=`, `<` / `<=`, ...)

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$start` - Byte offset of the first byte of the lexeme
/// * `$length` - Length of the lexeme in bytes
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, 0, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $start:expr, $length:expr) => {
        Token {
            kind: $kind,
            start: $start,
            length: $length,
        }
    };
}

/// Creates a lexer handler for an operator that is either a single byte
/// or that byte followed by `=`.
///
/// The handler peeks one byte ahead; if it is `=` both bytes are consumed
/// and `$double` is emitted, otherwise one byte is consumed and `$single`
/// is emitted.
///
/// # Example
///
/// ```ignore
/// handlers.insert(b'<', MK_OPERATOR_HANDLER!(TokenKind::Less, TokenKind::LessEqual));
/// ```
#[macro_export]
macro_rules! MK_OPERATOR_HANDLER {
    ($single:expr, $double:expr) => {
        (|lexer: &mut Lexer| -> Result<(), Error> {
            if lexer.peek()? == b'=' {
                lexer.advance_n(2)?;
                lexer.push($double);
            } else {
                lexer.advance()?;
                lexer.push($single);
            }
            Ok(())
        }) as LexHandler
    };
}
