//! Command trait for the loxt CLI.
//!
//! Every subcommand is a struct built from its arguments and executed once.

use crate::error::Result;

/// Standard command trait that all loxt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    ///
    /// Commands render their output instead of printing it; the `run_*`
    /// entry points write the result to stdout.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
