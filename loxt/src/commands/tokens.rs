//! Tokens command implementation.
//!
//! Scans a file or stdin and lists the resulting tokens as text or JSON.

use std::fmt::Write as _;

use loxc_lex::{scan, Token};
use tracing::{debug, info};

use crate::commands::common::{OutputFormat, SourceInput, TokenRecord};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source to scan.
    pub input: SourceInput,
    /// Listing format.
    pub format: OutputFormat,
    /// Whether to include the trailing `EOF` token.
    pub show_eof: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Render `source` as a token listing.
    pub fn render(&self, source: &str) -> Result<String> {
        let tokens: Vec<Token<'_>> = scan(source)
            .into_iter()
            .filter(|token| self.args.show_eof || !token.is_eof())
            .collect();
        debug!(count = tokens.len(), format = ?self.args.format, "rendering tokens");

        match self.args.format {
            OutputFormat::Text => Ok(render_text(&tokens)),
            OutputFormat::Json => {
                let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
                let mut json = serde_json::to_string_pretty(&records)?;
                json.push('\n');
                Ok(json)
            },
        }
    }
}

fn render_text(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{} {}", token.line, token);
    }
    out
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let source = self.args.input.read_to_string()?;
        if self.args.verbose {
            info!("Scanning {} ({} bytes)", self.args.input, source.len());
        }
        self.render(&source)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

/// Execute the tokens command and print the listing to stdout.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    debug!(command = TokensCommand::name(), input = %args.input, "running");
    let output = TokensCommand::new(args).execute()?;
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn command(format: OutputFormat, show_eof: bool) -> TokensCommand {
        TokensCommand::new(TokensArgs {
            input: SourceInput::Stdin,
            format,
            show_eof,
            verbose: false,
        })
    }

    #[test]
    fn test_render_text() {
        let output = command(OutputFormat::Text, true).render("(\n/* x */)").unwrap();
        assert_eq!(output, "1 LEFT_PAREN '('\n2 RIGHT_PAREN ')'\n2 EOF ''\n");
    }

    #[test]
    fn test_render_text_without_eof() {
        let output = command(OutputFormat::Text, false).render("+-").unwrap();
        assert_eq!(output, "1 PLUS '+'\n1 MINUS '-'\n");
    }

    #[test]
    fn test_render_json() {
        let output = command(OutputFormat::Json, true).render(" ;").unwrap();
        let records: Vec<TokenRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, "SEMICOLON");
        assert_eq!((records[0].start, records[0].end), (1, 2));
        assert_eq!(records[1].kind, "EOF");
        assert_eq!(records[1].lexeme, "");
    }

    #[test]
    fn test_render_empty_source() {
        let output = command(OutputFormat::Text, true).render("").unwrap();
        assert_eq!(output, "1 EOF ''\n");
    }

    #[test]
    fn test_execute_missing_file() {
        let cmd = TokensCommand::new(TokensArgs {
            input: SourceInput::File(PathBuf::from("/nonexistent/input.lox")),
            format: OutputFormat::Text,
            show_eof: true,
            verbose: false,
        });
        assert!(cmd.execute().is_err());
    }
}
