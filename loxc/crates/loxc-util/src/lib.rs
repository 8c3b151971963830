//! loxc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the loxc toolchain. Every phase that needs to
//! point back into source text or report a problem to the user goes through
//! the types defined here.
//!
//! # Modules
//!
//! - [`span`] - Byte ranges into source text, tagged with a line number
//! - [`diagnostic`] - Errors, warnings and the [`Handler`] that collects them
//! - [`error`] - `thiserror` error types for fallible utility operations
//!
//! # Examples
//!
//! ```
//! use loxc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unexpected character '#'")
//!     .span(Span::new(4, 5, 1))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert!(!handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SpanError, SpanResult};
pub use span::Span;
