#![forbid(unsafe_code)]
//! Incremental DTMF grammar matching
//!
//! Classifies keypad buffers against grammars that an external grammar compiler has already
//! turned into regular expressions. The classifier core lives in `dtmfmatch_core`; this crate
//! adds the caller-facing result layer (match details and interpretations), collection traces,
//! and the command-line front end.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod grammar;
pub mod trace;

pub use dtmfmatch_core::{
    Classification, IncrementalMatcher, MatcherConfig, PatternError, Symbol, SymbolError, parse_symbols,
    symbols_to_string,
};

pub use grammar::{GrammarMatch, GrammarMatcher, InputMode, MatchOutcome};
