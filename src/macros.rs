//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a literal value

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal value (only for `INT` and `FLOAT`)
///
/// # Example
///
/// ```ignore
/// let plus = MK_TOKEN!(TokenKind::Plus);
/// let three = MK_TOKEN!(TokenKind::Int, Literal::Int(3));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr) => {
        Token {
            kind: $kind,
            value: None,
        }
    };
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: Some($value),
        }
    };
}
