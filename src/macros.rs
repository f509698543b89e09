//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind, including its payload
/// * `$line` - The 1-based line the token was read on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number(42), 3);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $line:expr) => {
        Token {
            kind: $kind,
            line: $line,
        }
    };
}
