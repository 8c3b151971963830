//! Diagnostic codes for categorizing scanner warnings.
//!
//! Codes follow the format `{prefix}{number:04}`. The `L` prefix is reserved
//! for lexical diagnostics.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::L_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "L");
//! assert_eq!(code.number(), 1);
//! assert_eq!(code.as_str(), "L0001");
//! ```

/// A unique code identifying a diagnostic message
///
/// The `name` is a stable snake_case identifier suitable for machine
/// consumption (for example in JSON output or suppression lists).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "L" for lexical)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
    /// Stable snake_case name
    pub name: &'static str,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("L", 42, "something_odd");
    /// assert_eq!(code.as_str(), "L0042");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32, name: &'static str) -> Self {
        Self {
            prefix,
            number,
            name,
        }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the snake_case name
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the full code string (e.g., "L0001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL CODES (L0001-L9999)
    // =========================================================================

    /// L0001: Character the scanner does not classify; it was skipped
    pub const L_UNEXPECTED_CHAR: Self = Self::new("L", 1, "unexpected_character");
    /// L0002: Block comment still open at end of input
    pub const L_UNTERMINATED_BLOCK_COMMENT: Self =
        Self::new("L", 2, "unterminated_block_comment");
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_pads() {
        assert_eq!(DiagnosticCode::new("L", 7, "x").as_str(), "L0007");
        assert_eq!(DiagnosticCode::new("L", 1234, "x").as_str(), "L1234");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", DiagnosticCode::L_UNTERMINATED_BLOCK_COMMENT),
            "L0002"
        );
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", DiagnosticCode::L_UNEXPECTED_CHAR),
            "DiagnosticCode(L0001)"
        );
    }

    #[test]
    fn test_lexical_codes_are_distinct() {
        assert_ne!(
            DiagnosticCode::L_UNEXPECTED_CHAR,
            DiagnosticCode::L_UNTERMINATED_BLOCK_COMMENT
        );
        assert_eq!(DiagnosticCode::L_UNEXPECTED_CHAR.name(), "unexpected_character");
    }
}
