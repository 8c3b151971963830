//! Slash and comment lexing.
//!
//! A `/` either starts a line comment, starts a (nestable) block comment, or
//! is a division token on its own.

use loxc_util::{DiagnosticCode, Span};
use tracing::trace;

use super::Scanner;
use crate::token::{Token, TokenKind};

impl<'src> Scanner<'src, '_> {
    /// Lexes whatever follows a consumed `/`.
    ///
    /// Handles: `/`, `//`, `/* */`
    pub(super) fn lex_slash(&mut self) -> Option<Token<'src>> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            None
        } else if self.cursor.match_char('*') {
            self.skip_block_comment();
            None
        } else {
            Some(self.make_token(TokenKind::Slash))
        }
    }

    /// Skips to the end of the line; the newline itself is left unread.
    fn skip_line_comment(&mut self) {
        while self.cursor.current_char() != '\n' && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }

    /// Skips a block comment whose opening `/*` was already consumed.
    ///
    /// Nesting is tracked with a depth counter. At each step the opener `/*`
    /// is tested before the closer `*/`.
    fn skip_block_comment(&mut self) {
        let open_line = self.line;
        let mut depth: u32 = 1;
        trace!(line = open_line, offset = self.start, "block comment");

        while depth > 0 && !self.cursor.is_at_end() {
            if self.cursor.current_char() == '\n' {
                self.line += 1;
            }

            if self.cursor.current_char() == '/' && self.cursor.peek_char(1) == '*' {
                self.cursor.advance();
                self.cursor.advance();
                depth += 1;
            } else if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                depth -= 1;
            } else {
                self.cursor.advance();
            }
        }

        if depth > 0 {
            trace!(depth, "block comment runs to end of input");
            self.report_unterminated_comment(open_line, depth);
        }
    }

    fn report_unterminated_comment(&self, open_line: u32, depth: u32) {
        let Some(handler) = self.handler else {
            return;
        };
        let span = Span::new(self.start, self.cursor.position(), open_line);
        let levels = if depth == 1 { "level" } else { "levels" };
        handler
            .build_warning(span, "unterminated block comment")
            .code(DiagnosticCode::L_UNTERMINATED_BLOCK_COMMENT)
            .note(format!("{} comment {} still open at end of input", depth, levels))
            .help("add `*/` to close the comment")
            .emit(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loxc_util::Handler;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_lone_slash() {
        let tokens = Scanner::new("/").scan_tokens();
        assert_eq!(tokens[0].kind, TokenKind::Slash);
        assert_eq!(tokens[0].lexeme, "/");
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_slash_followed_by_space() {
        assert_eq!(
            kinds("/ *"),
            vec![TokenKind::Slash, TokenKind::Star, TokenKind::Eof]
        );
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        let tokens = Scanner::new("// hello\n+").scan_tokens();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Plus);
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn test_line_comment_at_eof() {
        assert_eq!(kinds("+ // trailing"), vec![TokenKind::Plus, TokenKind::Eof]);
        assert_eq!(kinds("//"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(kinds("/* (){} */;"), vec![TokenKind::Semicolon, TokenKind::Eof]);
    }

    #[test]
    fn test_nested_block_comment() {
        assert_eq!(
            kinds("/* a /* b */ c */+"),
            vec![TokenKind::Plus, TokenKind::Eof]
        );
    }

    #[test]
    fn test_deeply_nested_block_comment() {
        let source = format!("{}{}-", "/*".repeat(500), "*/".repeat(500));
        assert_eq!(kinds(&source), vec![TokenKind::Minus, TokenKind::Eof]);
    }

    #[test]
    fn test_block_comment_counts_newlines() {
        let tokens = Scanner::new("/*\n\n*/+").scan_tokens();
        assert_eq!(tokens[0].kind, TokenKind::Plus);
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn test_unterminated_block_comment_is_silent() {
        assert_eq!(kinds("/* never closes"), vec![TokenKind::Eof]);
        assert_eq!(kinds("/*"), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_unterminated_block_comment_eof_line() {
        let tokens = Scanner::new("/*\n\n").scan_tokens();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn test_opener_checked_before_closer() {
        // "/*/" opens a second level instead of closing the first
        assert_eq!(kinds("/*/*/+"), vec![TokenKind::Eof]);
        // so both levels need a closer
        assert_eq!(kinds("/*/**/*/+"), vec![TokenKind::Plus, TokenKind::Eof]);
    }

    #[test]
    fn test_star_slash_outside_comment() {
        assert_eq!(kinds("*/"), vec![TokenKind::Star, TokenKind::Slash, TokenKind::Eof]);
    }

    #[test]
    fn test_handler_reports_unterminated_comment() {
        let handler = Handler::new();
        let source = "+\n/* a /* b */";
        let tokens = Scanner::with_handler(source, &handler).scan_tokens();
        assert_eq!(tokens.len(), 2);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].code,
            Some(DiagnosticCode::L_UNTERMINATED_BLOCK_COMMENT)
        );
        assert_eq!(diags[0].span, Span::new(2, source.len(), 2));
        assert_eq!(diags[0].notes, vec!["1 comment level still open at end of input"]);
    }

    #[test]
    fn test_handler_quiet_for_closed_comment() {
        let handler = Handler::new();
        Scanner::with_handler("/* ok */", &handler).scan_tokens();
        assert!(handler.is_empty());
    }
}
