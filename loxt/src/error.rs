//! Error handling module for the loxt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the loxt CLI application.
#[derive(Error, Debug)]
pub enum LoxtError {
    /// Configuration could not be found, parsed or applied.
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input was rejected before scanning.
    #[error("Validation error: {0}")]
    Validation(String),

    /// `check` found diagnostics and was asked to fail on them.
    #[error("Check failed: {0}")]
    Check(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using LoxtError.
pub type Result<T> = std::result::Result<T, LoxtError>;
