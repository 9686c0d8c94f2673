//! CLI module for dtmfmatch
//!
//! This module provides the command-line interface for exercising grammar patterns.
//!
//! ## Commands
//!
//! - `check <pattern>` - Compile a pattern and report diagnostics
//! - `classify <pattern> <buffer>` - Classify one buffer
//! - `trace <pattern> <buffer>` - Replay a buffer keypress by keypress
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};
use dtmfmatch_core::MatcherConfig;

use crate::grammar::InputMode;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The grammar pattern itself is invalid.
    pub const PATTERN_ERROR: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Render a diagnostic through miette and attach the given exit code.
    pub fn diagnostic<D>(diagnostic: D, exit_code: ExitCode) -> Self
    where
        D: miette::Diagnostic + Send + Sync + 'static,
    {
        Self::new(format!("{:?}", miette::Report::new(diagnostic)), exit_code)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Incremental DTMF grammar matching
#[derive(Parser, Debug)]
#[command(name = "dtmfmatch")]
#[command(version = VERSION)]
#[command(about = "Classify keypad input against compiled DTMF grammar patterns", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Maximum compiled automaton size in bytes (0 = unbounded)
    #[arg(long, global = true, value_name = "BYTES")]
    pub size_limit: Option<usize>,
}

impl Cli {
    /// Matcher configuration derived from global flags.
    pub fn matcher_config(&self) -> MatcherConfig {
        match self.size_limit {
            Some(0) => MatcherConfig::new()
                .with_size_limit(None)
                .with_determinize_size_limit(None),
            Some(limit) => MatcherConfig::new().with_size_limit(Some(limit)),
            None => MatcherConfig::new(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a grammar pattern and report whether it is usable
    Check {
        /// Compiled grammar pattern
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },

    /// Classify a keypad buffer against a grammar pattern
    Classify {
        /// Compiled grammar pattern
        #[arg(value_name = "PATTERN")]
        pattern: String,
        /// Keypad buffer (symbols 0-9, #, *, A-D)
        #[arg(value_name = "BUFFER", default_value = "")]
        buffer: String,
        /// Input mode of the grammar
        #[arg(long, default_value = "dtmf")]
        mode: InputMode,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a buffer one keypress at a time
    Trace {
        /// Compiled grammar pattern
        #[arg(value_name = "PATTERN")]
        pattern: String,
        /// Keypad buffer (symbols 0-9, #, *, A-D)
        #[arg(value_name = "BUFFER")]
        buffer: String,
        /// Print the steps as JSON
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.matcher_config();
    match cli.command {
        Command::Check { pattern } => commands::check_pattern(&pattern, &config),
        Command::Classify {
            pattern,
            buffer,
            mode,
            json,
        } => commands::classify_buffer(&pattern, &buffer, mode, &config, json),
        Command::Trace { pattern, buffer, json } => commands::trace_buffer(&pattern, &buffer, &config, json),
    }
}
