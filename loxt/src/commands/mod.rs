//! Command modules for the loxt CLI.
//!
//! Each subcommand is implemented in its own file following the
//! [`traits::Command`] pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use self_test::run_self_test;
pub use tokens::{run_tokens, TokensArgs};
