#![forbid(unsafe_code)]
//! Incremental classification of DTMF keypad buffers against compiled grammar patterns.
//!
//! A grammar compiler (outside this crate) turns a grammar into a regular expression. This crate
//! holds that pattern and answers, for a buffer that grows one keypress at a time, whether the
//! buffer can never match, could still match, matches, or matches and cannot be extended.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, no knowledge of grammar markup.
//! - Alphabet: `0`-`9`, `#`, `*`, `A`-`D` (see [`symbol`]).
//! - Matchers are immutable after construction and safe to share across threads.
//!
//! ## Examples
//! ```rust
//! use dtmfmatch_core::{Classification, IncrementalMatcher};
//!
//! let matcher = IncrementalMatcher::compile("[0-9]{3}").unwrap();
//! assert_eq!(matcher.classify_str("99"), Classification::PotentialMatch);
//! assert_eq!(matcher.classify_str("999"), Classification::MaxMatch);
//! ```

pub mod classification;
pub mod config;
pub mod errors;
pub mod matcher;
pub mod symbol;

pub use classification::Classification;
pub use config::MatcherConfig;
pub use errors::{PatternError, SymbolError};
pub use matcher::IncrementalMatcher;
pub use symbol::{Symbol, parse_symbols, symbols_to_string};
