//! Common types and utilities for loxt commands.
//!
//! This module provides the input source abstraction, the token output
//! format and the serializable token record shared by the commands.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use loxc_lex::Token;
use serde::{Deserialize, Serialize};

use crate::error::{LoxtError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Output format for token listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `<line> <KIND> '<lexeme>'` line per token
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

// ============================================================================
// Source Input
// ============================================================================

/// Where source text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// Standard input, selected with `-`
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl SourceInput {
    /// Interpret a command-line path argument; `-` selects stdin.
    pub fn from_arg(path: &Path) -> Self {
        if path == Path::new("-") {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Read the whole input as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut source = String::new();
                std::io::stdin().read_to_string(&mut source)?;
                Ok(source)
            },
            Self::File(path) => {
                if !path.is_file() {
                    return Err(LoxtError::Validation(format!(
                        "input is not a file: {}",
                        path.display()
                    )));
                }
                Ok(std::fs::read_to_string(path)?)
            },
        }
    }
}

impl fmt::Display for SourceInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ============================================================================
// Token Records
// ============================================================================

/// Serializable view of a token for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Upper-snake kind name, e.g. `LEFT_PAREN`
    pub kind: String,
    /// Exact source text
    pub lexeme: String,
    /// 1-based line
    pub line: u32,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
}

impl From<&Token<'_>> for TokenRecord {
    fn from(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind.name().to_string(),
            lexeme: token.lexeme.to_string(),
            line: token.line,
            start: token.span.start,
            end: token.span.end,
        }
    }
}
