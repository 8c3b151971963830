//! Scanner module.
//!
//! - `core` - Scanner state, dispatch loop and token emission
//! - `comment` - Slash disambiguation, line and nested block comments

mod comment;
mod core;

pub use self::core::Scanner;

use crate::token::Token;

/// Scans `source` into tokens, silently skipping anything unrecognized.
///
/// Never fails. The result always ends with exactly one `Eof` token whose
/// line is the number of lines seen.
///
/// # Example
///
/// ```
/// use loxc_lex::{scan, TokenKind};
///
/// let tokens = scan("// hello\n+");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].kind, TokenKind::Plus);
/// assert_eq!(tokens[0].line, 2);
/// assert_eq!(tokens[1].kind, TokenKind::Eof);
/// ```
pub fn scan(source: &str) -> Vec<Token<'_>> {
    Scanner::new(source).scan_tokens()
}
