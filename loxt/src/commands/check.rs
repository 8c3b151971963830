//! Check command implementation.
//!
//! Scans with a diagnostic handler attached and reports every character that
//! was skipped and every block comment left open.

use std::fmt::Write as _;

use loxc_lex::Scanner;
use loxc_util::diagnostic::SourceSnippet;
use loxc_util::Handler;
use tracing::{debug, info};

use crate::commands::common::SourceInput;
use crate::commands::traits::Command;
use crate::error::{LoxtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Source to scan.
    pub input: SourceInput,
    /// Fail when any warning is reported.
    pub deny_warnings: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Outcome of a check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Rendered diagnostics followed by a summary line.
    pub rendered: String,
    /// Number of warnings reported.
    pub warnings: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Scan `source` and render its diagnostics.
    pub fn check_source(&self, source: &str) -> CheckReport {
        let handler = Handler::new();
        let tokens = Scanner::with_handler(source, &handler).scan_tokens();
        let warnings = handler.warning_count();
        debug!(tokens = tokens.len(), warnings, "checked");

        // Writing to a String cannot fail.
        let mut rendered = String::new();
        for diagnostic in handler.take_diagnostics() {
            let line = diagnostic.span.line;
            let diagnostic = match SourceSnippet::from_span(source, diagnostic.span) {
                Some(snippet) => diagnostic.with_snippet(snippet),
                None => diagnostic,
            };
            let _ = writeln!(rendered, "{}:{}: {}", self.args.input, line, diagnostic);
        }

        if warnings == 0 {
            let _ = writeln!(rendered, "{}: no diagnostics", self.args.input);
        } else {
            let _ = writeln!(rendered, "{}: {} warning(s) reported", self.args.input, warnings);
        }

        CheckReport { rendered, warnings }
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let source = self.args.input.read_to_string()?;
        if self.args.verbose {
            info!("Checking {} ({} bytes)", self.args.input, source.len());
        }
        Ok(self.check_source(&source))
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Execute the check command and print the report to stdout.
///
/// The report is printed before a denied warning turns into an error.
pub fn run_check(args: CheckArgs) -> Result<()> {
    debug!(command = CheckCommand::name(), input = %args.input, "running");
    let deny_warnings = args.deny_warnings;
    let report = CheckCommand::new(args).execute()?;
    print!("{}", report.rendered);

    if deny_warnings && report.warnings > 0 {
        return Err(LoxtError::Check(format!(
            "{} warning(s) reported",
            report.warnings
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn command() -> CheckCommand {
        CheckCommand::new(CheckArgs {
            input: SourceInput::File(PathBuf::from("a.lox")),
            deny_warnings: false,
            verbose: false,
        })
    }

    #[test]
    fn test_clean_source() {
        let report = command().check_source("(){} // fine\n/* also fine */");
        assert_eq!(report.warnings, 0);
        assert_eq!(report.rendered, "a.lox: no diagnostics\n");
    }

    #[test]
    fn test_unexpected_character() {
        let report = command().check_source("+\n( # )");
        assert_eq!(report.warnings, 1);
        assert!(report
            .rendered
            .starts_with("a.lox:2: warning[L0001]: unexpected character '#'\n"));
        assert!(report.rendered.contains("  2 | ( # )"));
        assert!(report.rendered.ends_with("a.lox: 1 warning(s) reported\n"));
    }

    #[test]
    fn test_unterminated_comment() {
        let report = command().check_source("; /* open /* nested */");
        assert_eq!(report.warnings, 1);
        assert!(report
            .rendered
            .contains("a.lox:1: warning[L0002]: unterminated block comment"));
        assert!(report
            .rendered
            .contains("= note: 1 comment level still open at end of input"));
    }

    #[test]
    fn test_warnings_counted_in_order() {
        let report = command().check_source("@\n$\n/*");
        assert_eq!(report.warnings, 3);
        let first = report.rendered.find("a.lox:1:").unwrap();
        let second = report.rendered.find("a.lox:2:").unwrap();
        let third = report.rendered.find("a.lox:3:").unwrap();
        assert!(first < second && second < third);
    }
}
