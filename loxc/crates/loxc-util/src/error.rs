//! Core error types for loxc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for span operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for the source text
    #[error("Span out of bounds: source has {source_len} bytes, span is {span_start}..{span_end}")]
    OutOfBounds {
        source_len: usize,
        span_start: usize,
        span_end: usize,
    },

    /// Span boundary falls inside a multi-byte character
    #[error("Span {span_start}..{span_end} does not lie on character boundaries")]
    NotCharBoundary { span_start: usize, span_end: usize },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;
