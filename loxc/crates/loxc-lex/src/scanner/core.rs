//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, its per-character dispatch and
//! token emission.

use loxc_util::{DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Single-pass scanner for Lox source text.
///
/// Holds the whole scan state: the cursor (`current`), the start of the
/// lexeme being scanned (`start`) and the line counter. The scan is total:
/// characters it does not classify are consumed and dropped, and an
/// unterminated block comment simply runs to the end of input.
///
/// # Example
///
/// ```
/// use loxc_lex::{Scanner, TokenKind};
///
/// let kinds: Vec<TokenKind> = Scanner::new("(/* x */)")
///     .scan_tokens()
///     .into_iter()
///     .map(|t| t.kind)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     vec![TokenKind::LeftParen, TokenKind::RightParen, TokenKind::Eof]
/// );
/// ```
pub struct Scanner<'src, 'h> {
    /// Character cursor; its position is the `current` index.
    pub(super) cursor: Cursor<'src>,

    /// Optional sink for warnings about skipped input.
    pub(super) handler: Option<&'h Handler>,

    /// Byte offset of the first character of the current lexeme.
    pub(super) start: usize,

    /// Line number (1-based) of the next unread character.
    pub(super) line: u32,

    /// Set once the iterator has yielded `Eof`.
    finished: bool,
}

impl<'src, 'h> Scanner<'src, 'h> {
    /// Creates a scanner that silently skips anything it cannot classify.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler: None,
            start: 0,
            line: 1,
            finished: false,
        }
    }

    /// Creates a scanner that also reports skipped input to `handler`.
    ///
    /// The token stream is the same as with [`Scanner::new`]; the handler
    /// only receives warnings (`L0001` for a dropped character, `L0002` for
    /// a block comment left open at end of input). Tokens borrow only the
    /// source, so they may outlive `handler`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::Scanner;
    /// use loxc_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let tokens = Scanner::with_handler("+ @", &handler).scan_tokens();
    ///
    /// assert_eq!(tokens.len(), 2);
    /// assert_eq!(handler.warning_count(), 1);
    /// assert!(!handler.has_errors());
    /// ```
    pub fn with_handler(source: &'src str, handler: &'h Handler) -> Self {
        Self {
            handler: Some(handler),
            ..Self::new(source)
        }
    }

    /// Scans the whole input.
    ///
    /// The returned sequence always ends with exactly one `Eof` token.
    pub fn scan_tokens(mut self) -> Vec<Token<'src>> {
        let tokens: Vec<Token<'src>> = self.by_ref().collect();
        debug!(
            tokens = tokens.len(),
            lines = self.line,
            bytes = self.cursor.position(),
            "scan complete"
        );
        tokens
    }

    /// Returns the next token, or `Eof` once the input is exhausted.
    ///
    /// Calling this again after `Eof` yields another `Eof`.
    pub fn next_token(&mut self) -> Token<'src> {
        while !self.cursor.is_at_end() {
            self.start = self.cursor.position();
            if let Some(token) = self.scan_token() {
                return token;
            }
        }
        Token::eof(self.cursor.position(), self.line)
    }

    /// Consumes one character and whatever construct it begins.
    fn scan_token(&mut self) -> Option<Token<'src>> {
        let c = self.cursor.advance()?;

        match c {
            '(' => Some(self.make_token(TokenKind::LeftParen)),
            ')' => Some(self.make_token(TokenKind::RightParen)),
            '{' => Some(self.make_token(TokenKind::LeftBrace)),
            '}' => Some(self.make_token(TokenKind::RightBrace)),
            ',' => Some(self.make_token(TokenKind::Comma)),
            '.' => Some(self.make_token(TokenKind::Dot)),
            '-' => Some(self.make_token(TokenKind::Minus)),
            '+' => Some(self.make_token(TokenKind::Plus)),
            ';' => Some(self.make_token(TokenKind::Semicolon)),
            '*' => Some(self.make_token(TokenKind::Star)),
            '/' => self.lex_slash(),
            ' ' | '\r' | '\t' => None,
            '\n' => {
                self.line += 1;
                None
            },
            c => {
                self.skip_unexpected(c);
                None
            },
        }
    }

    /// Builds a token for the lexeme `[start, current)`.
    pub(super) fn make_token(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.cursor.slice_from(self.start), self.lexeme_span())
    }

    /// Span of the current lexeme.
    pub(super) fn lexeme_span(&self) -> Span {
        Span::new(self.start, self.cursor.position(), self.line)
    }

    fn skip_unexpected(&self, c: char) {
        trace!(line = self.line, offset = self.start, ?c, "skipping unexpected character");

        if let Some(handler) = self.handler {
            handler
                .build_warning(self.lexeme_span(), format!("unexpected character {:?}", c))
                .code(DiagnosticCode::L_UNEXPECTED_CHAR)
                .help("only punctuation and comments are tokenized; the character was skipped")
                .emit(handler);
        }
    }

    /// Returns the line number of the next unread character (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the byte offset at which the most recent lexeme started.
    pub fn token_start(&self) -> usize {
        self.start
    }
}

impl<'src> Iterator for Scanner<'src, '_> {
    type Item = Token<'src>;

    /// Yields every token followed by a single `Eof`, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Scanner<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(
            kinds("(){},.-+;*"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(kinds(" \t\r+ "), vec![TokenKind::Plus, TokenKind::Eof]);
    }

    #[test]
    fn test_newline_increments_line() {
        let tokens = Scanner::new("+\n\n-").scan_tokens();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 3);
        assert_eq!(tokens[2].line, 3);
    }

    #[test]
    fn test_unrecognized_characters_dropped() {
        assert_eq!(
            kinds("var x = 1;"),
            vec![TokenKind::Semicolon, TokenKind::Eof]
        );
    }

    #[test]
    fn test_lexeme_and_span() {
        let tokens = Scanner::new("  ;").scan_tokens();
        assert_eq!(tokens[0].lexeme, ";");
        assert_eq!(tokens[0].span, Span::new(2, 3, 1));
        assert_eq!(tokens[1].span, Span::point(3, 1));
    }

    #[test]
    fn test_next_token_repeats_eof() {
        let mut scanner = Scanner::new("");
        assert!(scanner.next_token().is_eof());
        assert!(scanner.next_token().is_eof());
    }

    #[test]
    fn test_iterator_fuses_after_eof() {
        let mut scanner = Scanner::new(".");
        assert_eq!(scanner.next().map(|t| t.kind), Some(TokenKind::Dot));
        assert_eq!(scanner.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_position_accessors() {
        let mut scanner = Scanner::new("\n (");
        let token = scanner.next_token();
        assert_eq!(token.kind, TokenKind::LeftParen);
        assert_eq!(scanner.token_start(), 2);
        assert_eq!(scanner.position(), 3);
        assert_eq!(scanner.line(), 2);
    }

    #[test]
    fn test_handler_reports_unexpected_character() {
        let handler = Handler::new();
        let tokens = Scanner::with_handler("(é)", &handler).scan_tokens();
        assert_eq!(tokens.len(), 3);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::L_UNEXPECTED_CHAR));
        assert_eq!(diags[0].span, Span::new(1, 3, 1));
        assert_eq!(diags[0].message, "unexpected character 'é'");
    }

    fn scan_with_local_handler(source: &str) -> (Vec<Token<'_>>, usize) {
        let handler = Handler::new();
        let tokens = Scanner::with_handler(source, &handler).scan_tokens();
        (tokens, handler.warning_count())
    }

    #[test]
    fn test_tokens_outlive_handler() {
        let (tokens, warnings) = scan_with_local_handler("{ ~ }");
        assert_eq!(warnings, 1);
        assert_eq!(tokens[0].lexeme, "{");
        assert_eq!(tokens[1].lexeme, "}");
        assert!(tokens[2].is_eof());
    }

    #[test]
    fn test_silent_scanner_has_no_handler() {
        let scanner = Scanner::new("#");
        assert!(scanner.handler.is_none());
        assert_eq!(scanner.scan_tokens().len(), 1);
    }
}
