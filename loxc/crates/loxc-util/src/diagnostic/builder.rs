//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, including source code snippets.

use super::{Diagnostic, DiagnosticCode, Handler, Level, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the highlighted
/// range expressed in 1-based character columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content, without its line terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Build a snippet for the line on which `span` starts.
    ///
    /// A span that runs past the end of its first line is highlighted up to
    /// the end of that line. Returns `None` if the span does not fit in
    /// `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::SourceSnippet;
    /// use loxc_util::Span;
    ///
    /// let source = "()\n+ # -";
    /// let snippet = SourceSnippet::from_span(source, Span::new(5, 6, 2)).unwrap();
    /// assert_eq!(snippet.line, "+ # -");
    /// assert_eq!(snippet.start_column, 3);
    /// assert_eq!(snippet.end_column, 4);
    /// ```
    pub fn from_span(source: &str, span: Span) -> Option<Self> {
        if span.start > span.end || span.end > source.len() {
            return None;
        }
        let before = source.get(..span.start)?;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[span.start..]
            .find('\n')
            .map_or(source.len(), |i| span.start + i);
        let line = source[line_start..line_end].trim_end_matches('\r');

        let start_column = source[line_start..span.start].chars().count() + 1;
        let highlight_end = span.end.min(line_end);
        let end_column = source.get(line_start..highlight_end)?.chars().count() + 1;

        Some(Self {
            line: line.to_string(),
            line_number: span.line as usize,
            start_column,
            end_column,
            label: None,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its number, followed by a caret
    /// line marking the highlighted range.
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::SourceSnippet;
    ///
    /// let snippet = SourceSnippet::new("( # )", 1, 3, 4, Some("here"));
    /// assert_eq!(snippet.format(), "  1 | ( # )\n    |   ^ here");
    /// ```
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use loxc_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Warning, "unexpected character '@'")
///     .code(DiagnosticCode::L_UNEXPECTED_CHAR)
///     .span(Span::new(0, 1, 1))
///     .help("the character was skipped")
///     .build();
/// assert_eq!(diag.level, Level::Warning);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::warning("unterminated block comment").emit(&handler);
    /// assert_eq!(handler.warning_count(), 1);
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
