//! Token type definitions.
//!
//! [`TokenKind`] enumerates every lexical category of the Lox language so the
//! parser can match on a single closed set. The scanner in this crate only
//! produces the single-character punctuation kinds, `Slash` and `Eof`; the
//! remaining kinds are reserved for the literal and keyword scanning that
//! later phases add.

use std::fmt;

use loxc_util::Span;

/// The lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens.
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,

    // One or two character tokens.
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,

    // Literals.
    /// A user-defined name
    Identifier,
    /// A string literal
    String,
    /// A number literal
    Number,

    // Keywords.
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    /// End of input
    Eof,
}

impl TokenKind {
    /// The conventional upper-snake name of the kind, e.g. `LEFT_PAREN`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The runtime value carried by a literal token.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Numeric value of a `Number` token
    Number(f64),
    /// Unescaped contents of a `String` token
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// A classified slice of source text.
///
/// The lexeme borrows from the scanned source, so tokens remain valid after
/// the scanner that produced them is dropped.
///
/// # Example
///
/// ```
/// use loxc_lex::{scan, TokenKind};
///
/// let tokens = scan("(\n)");
/// assert_eq!(tokens[1].kind, TokenKind::RightParen);
/// assert_eq!(tokens[1].lexeme, ")");
/// assert_eq!(tokens[1].line, 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'src> {
    /// Lexical category
    pub kind: TokenKind,
    /// Exact source text of the token; empty for `Eof`
    pub lexeme: &'src str,
    /// Literal value; never set by this scanner
    pub literal: Option<Literal>,
    /// Line (1-based) on which the lexeme starts
    pub line: u32,
    /// Byte range of the lexeme in the source
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Creates a token without a literal value.
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Self {
            kind,
            lexeme,
            literal: None,
            line: span.line,
            span,
        }
    }

    /// Creates the end-of-input marker at byte `offset`.
    pub fn eof(offset: usize, line: u32) -> Self {
        Self::new(TokenKind::Eof, "", Span::point(offset, line))
    }

    /// Returns true for the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, " {}", literal)?;
        }
        Ok(())
    }
}
