//! Loxt CLI - A command-line front end for the loxc scanner.
//!
//! This is the main entry point for the loxt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::{OutputFormat, SourceInput},
    run_check, run_self_test, run_tokens, CheckArgs, TokensArgs,
};
use config::Config;
use error::{LoxtError, Result};

/// Loxt - A CLI tool for scanning Lox source
///
/// Loxt lists the tokens of a Lox file, reports characters and comments the
/// scanner skipped, and checks that the scanner itself behaves.
#[derive(Parser, Debug)]
#[command(name = "loxt")]
#[command(author = "Lox Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for scanning Lox source", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LOXT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LOXT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LOXT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the loxt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of a source file
    ///
    /// Prints one `<line> <KIND> '<lexeme>'` line per token, or a JSON
    /// array with `--format json`.
    Tokens(TokensCommand),

    /// Report skipped characters and unterminated comments
    ///
    /// Scans with diagnostics enabled. The token stream is the same as for
    /// `tokens`; only the warnings are printed.
    Check(CheckCommand),

    /// Scan a built-in sample and verify the result
    SelfTest,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to scan, or `-` for stdin
    input: PathBuf,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit the trailing EOF token
    #[arg(long)]
    no_eof: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source file to check, or `-` for stdin
    input: PathBuf,

    /// Exit with an error if any warning is reported
    #[arg(long)]
    deny_warnings: bool,
}

/// Main entry point for the loxt CLI.
///
/// Errors are printed with their `Display` form and turn into a failing
/// exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Initialize logging, load configuration and run the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    // Initialize logging
    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token listings on stdout stay machine-readable.
/// `RUST_LOG` overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| LoxtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, verbose, &config),
        Commands::Check(args) => execute_check(args, verbose, &config),
        Commands::SelfTest => run_self_test(verbose),
    }
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, verbose: bool, config: &Config) -> Result<()> {
    let tokens_args = TokensArgs {
        input: SourceInput::from_arg(&args.input),
        format: args.format.unwrap_or(config.output.format),
        show_eof: config.output.show_eof && !args.no_eof,
        verbose,
    };
    run_tokens(tokens_args)
}

/// Execute the check command.
fn execute_check(args: CheckCommand, verbose: bool, config: &Config) -> Result<()> {
    let check_args = CheckArgs {
        input: SourceInput::from_arg(&args.input),
        deny_warnings: args.deny_warnings || config.check.deny_warnings,
        verbose,
    };
    run_check(check_args)
}
