//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use dtmfmatch_core::{IncrementalMatcher, MatcherConfig, PatternError, Symbol, parse_symbols};

use crate::grammar::{GrammarMatcher, InputMode};
use crate::trace;

use super::{CliError, CliResult, ExitCode};

fn pattern_error(err: PatternError) -> CliError {
    CliError::diagnostic(err, ExitCode::PATTERN_ERROR)
}

fn read_buffer(buffer: &str) -> CliResult<Vec<Symbol>> {
    parse_symbols(buffer).map_err(|e| CliError::diagnostic(e, ExitCode::FAILURE))
}

fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::failure(format!("failed to serialize output: {e}")))
}

/// Compile a pattern and report the result.
pub fn check_pattern(pattern: &str, config: &MatcherConfig) -> CliResult<ExitCode> {
    let matcher = IncrementalMatcher::compile_with(pattern, config).map_err(pattern_error)?;
    println!("ok: `{}` ({} bytes)", matcher.pattern(), matcher.memory_usage());
    Ok(ExitCode::SUCCESS)
}

/// Classify a whole buffer and print the outcome.
pub fn classify_buffer(
    pattern: &str,
    buffer: &str,
    mode: InputMode,
    config: &MatcherConfig,
    json: bool,
) -> CliResult<ExitCode> {
    let symbols = read_buffer(buffer)?;
    let grammar = GrammarMatcher::with_config(pattern, mode, config).map_err(pattern_error)?;
    let outcome = grammar.find_match_symbols(&symbols);

    tracing::info!(buffer, classification = %outcome.classification(), "classified buffer");

    if json {
        println!("{}", to_json(&outcome)?);
    } else {
        println!("{outcome}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Replay a buffer keypress by keypress and print each classification.
pub fn trace_buffer(pattern: &str, buffer: &str, config: &MatcherConfig, json: bool) -> CliResult<ExitCode> {
    let symbols = read_buffer(buffer)?;
    let matcher = IncrementalMatcher::compile_with(pattern, config).map_err(pattern_error)?;
    let steps = trace::trace(&matcher, &symbols);

    if steps.len() < symbols.len() {
        tracing::info!(
            consumed = steps.len(),
            ignored = symbols.len() - steps.len(),
            "collection stopped at a terminal classification"
        );
    }

    if json {
        println!("{}", to_json(&steps)?);
    } else if !steps.is_empty() {
        println!("{}", trace::render_trace(&steps));
    }
    Ok(ExitCode::SUCCESS)
}
