//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains a byte position
//! while walking source text one `char` at a time. Positions always sit on
//! UTF-8 character boundaries, so any `[start, position)` range taken from a
//! cursor can be sliced out of the source without panicking.

/// A cursor for traversing source code character by character.
///
/// Lookahead past the end of input yields the sentinel `'\0'` instead of an
/// `Option`, which keeps the scanner's comparisons flat.
///
/// # Example
///
/// ```
/// use loxc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("(+)");
///
/// assert_eq!(cursor.current_char(), '(');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '+');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the character at the cursor position, or `'\0'` at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("/*");
    /// assert_eq!(cursor.peek_char(0), '/');
    /// assert_eq!(cursor.peek_char(1), '*');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let bytes = self.source.as_bytes();

        // Fast path: the whole lookahead window is ASCII
        let window = self
            .position
            .checked_add(offset)
            .and_then(|last| bytes.get(self.position..=last));
        if let Some(window) = window {
            if window.is_ascii() {
                return window[offset] as char;
            }
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes and returns the current character.
    ///
    /// Returns `None` and leaves the cursor in place if already at the end.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("//");
    /// assert!(cursor.match_char('/'));
    /// assert!(!cursor.match_char('*'));
    /// assert_eq!(cursor.position(), 1);
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.current_char() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from `start` up to the current position.
    ///
    /// `start` must be a position previously reported by this cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
