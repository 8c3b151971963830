//! Span module - Source location tracking.
//!
//! A [`Span`] is a half-open byte range `[start, end)` into a source buffer,
//! together with the 1-based line on which the range begins.
//!
//! # Examples
//!
//! ```
//! use loxc_util::span::Span;
//!
//! let source = "(+)";
//! let span = Span::new(1, 2, 1);
//! assert_eq!(span.slice(source).unwrap(), "+");
//! ```

use std::fmt;

use crate::error::{SpanError, SpanResult};

/// Source location span
///
/// Byte offsets always refer to UTF-8 character boundaries of the source
/// the span was produced from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based) at `start`
    pub line: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span
    ///
    /// The caller guarantees `start <= end`; use [`Span::try_new`] when the
    /// range comes from untrusted input.
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 3);
    /// assert_eq!(span.len(), 10);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create a span, rejecting inverted ranges.
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// assert!(Span::try_new(3, 1, 1).is_err());
    /// assert!(Span::try_new(1, 3, 1).is_ok());
    /// ```
    pub fn try_new(start: usize, end: usize, line: u32) -> SpanResult<Self> {
        if start > end {
            return Err(SpanError::InvalidSpan { start, end });
        }
        Ok(Self::new(start, end, line))
    }

    /// Create an empty span at a single offset
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::span::Span;
    ///
    /// let point = Span::point(7, 2);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32) -> Self {
        Self::new(offset, offset, line)
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Extracts the text covered by this span.
    ///
    /// # Errors
    ///
    /// Fails when the range is inverted, runs past the end of `source`, or
    /// splits a multi-byte character.
    pub fn slice<'s>(&self, source: &'s str) -> SpanResult<&'s str> {
        if self.start > self.end {
            return Err(SpanError::InvalidSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > source.len() {
            return Err(SpanError::OutOfBounds {
                source_len: source.len(),
                span_start: self.start,
                span_end: self.end,
            });
        }
        source
            .get(self.start..self.end)
            .ok_or(SpanError::NotCharBoundary {
                span_start: self.start,
                span_end: self.end,
            })
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.line, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(2, 5, 1);
        assert_eq!(span.start, 2);
        assert_eq!(span.end, 5);
        assert_eq!(span.line, 1);
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_span_try_new_inverted() {
        assert_eq!(
            Span::try_new(4, 2, 1),
            Err(SpanError::InvalidSpan { start: 4, end: 2 })
        );
    }

    #[test]
    fn test_span_point_is_empty() {
        let span = Span::point(3, 1);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_span_slice() {
        assert_eq!(Span::new(0, 2, 1).slice("();"), Ok("()"));
    }

    #[test]
    fn test_span_slice_out_of_bounds() {
        assert!(matches!(
            Span::new(0, 10, 1).slice("()"),
            Err(SpanError::OutOfBounds { source_len: 2, .. })
        ));
    }

    #[test]
    fn test_span_slice_splits_char() {
        // 'é' is two bytes
        assert!(matches!(
            Span::new(0, 1, 1).slice("é"),
            Err(SpanError::NotCharBoundary { .. })
        ));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(3, 4, 2).to_string(), "2:3..4");
    }
}
