//! loxc-lex - Lexical Scanner for the Lox Programming Language
//!
//! This crate turns source text into the flat token sequence consumed by the
//! parser. Scanning is a single linear pass with at most two characters of
//! lookahead and never fails: characters outside the token set are skipped,
//! and a block comment left open simply runs to the end of input.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan, Scanner, TokenKind};
//! use loxc_util::Handler;
//!
//! // One-shot
//! let tokens = scan("{ /* nested /* ok */ */ ; }");
//! assert_eq!(tokens.len(), 4);
//!
//! // With warnings for skipped input
//! let handler = Handler::new();
//! let tokens = Scanner::with_handler("( ? )", &handler).scan_tokens();
//! assert_eq!(tokens[1].kind, TokenKind::RightParen);
//! assert_eq!(handler.warning_count(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - The scanner and the [`scan`] entry point
//! - [`cursor`] - Character cursor for source traversal
//!
//! # Token Categories
//!
//! - **Delimiters**: `(` `)` `{` `}` `,` `.` `;`
//! - **Operators**: `-` `+` `*` `/`
//! - **Special**: `Eof`, emitted exactly once at the end
//!
//! Whitespace (space, tab, carriage return, newline), `//` line comments and
//! nestable `/* */` block comments produce no tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod scanner;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use scanner::{scan, Scanner};
pub use token::{Literal, Token, TokenKind};
