//! Grammar result layer
//!
//! Wraps an [`IncrementalMatcher`] and turns its bare classifications into caller-visible
//! [`MatchOutcome`]s: full matches carry the input mode, a confidence, the utterance, and its
//! interpretation.
//!
//! ## Modules
//!
//! - `outcome` - Result types (`MatchOutcome`, `GrammarMatch`, `InputMode`)
//! - `interpretation` - Semantic tag lookup and spoken rendering of utterances

pub mod interpretation;
pub mod outcome;

use dtmfmatch_core::{Classification, IncrementalMatcher, MatcherConfig, PatternError, Symbol, symbols_to_string};
use regex::bytes::{Regex, RegexBuilder};
use regex_automata::util::syntax;

pub use outcome::{GrammarMatch, InputMode, MatchOutcome, UnknownModeError};

/// Matcher for one compiled grammar.
///
/// Holds the incremental classifier plus a capture-aware regex over the same pattern, used only to
/// read semantic tags out of completed utterances.
#[derive(Debug, Clone)]
pub struct GrammarMatcher {
    mode: InputMode,
    matcher: IncrementalMatcher,
    tags: Regex,
}

impl GrammarMatcher {
    /// Build a matcher for a compiled grammar pattern with the default configuration.
    ///
    /// ## Errors
    /// Returns [`PatternError`] when the pattern cannot be compiled.
    ///
    /// ## Examples
    /// ```rust
    /// use dtmfmatch::grammar::{GrammarMatcher, InputMode, MatchOutcome};
    ///
    /// let grammar = GrammarMatcher::new(r"[0-9]{4}#|\*9", InputMode::Dtmf).unwrap();
    /// assert_eq!(grammar.find_match("12"), MatchOutcome::PotentialMatch);
    /// assert_eq!(
    ///     grammar.find_match("*9").grammar_match().map(|m| m.interpretation.as_str()),
    ///     Some("dtmf-star dtmf-9")
    /// );
    /// ```
    pub fn new(pattern: &str, mode: InputMode) -> Result<Self, PatternError> {
        Self::with_config(pattern, mode, &MatcherConfig::default())
    }

    /// Build a matcher with an explicit configuration.
    #[tracing::instrument(skip_all, fields(mode = %mode))]
    pub fn with_config(pattern: &str, mode: InputMode, config: &MatcherConfig) -> Result<Self, PatternError> {
        let matcher = IncrementalMatcher::compile_with(pattern, config)?;

        // Anchor the canonical form rather than the raw text: a trailing `(?x)` comment in the raw
        // pattern would swallow the closing group.
        let hir = syntax::parse_with(pattern, &syntax::Config::new().unicode(false).utf8(false))
            .map_err(|e| PatternError::new(pattern, e))?;
        let mut builder = RegexBuilder::new(&format!("^(?:{hir})$"));
        builder.unicode(false);
        if let Some(limit) = config.size_limit {
            builder.size_limit(limit);
        }
        let tags = builder.build().map_err(|e| PatternError::new(pattern, e))?;

        Ok(Self { mode, matcher, tags })
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// The underlying classifier.
    pub fn matcher(&self) -> &IncrementalMatcher {
        &self.matcher
    }

    /// Check the grammar against the buffer collected so far.
    ///
    /// `PotentialMatch` means the buffer is valid but incomplete. `MaxMatch` differs from `Match` in
    /// that no further input can extend it.
    pub fn find_match(&self, buffer: &str) -> MatchOutcome {
        match self.matcher.classify_str(buffer) {
            Classification::NoMatch => MatchOutcome::NoMatch,
            Classification::PotentialMatch => MatchOutcome::PotentialMatch,
            Classification::Match => MatchOutcome::Match(self.match_for_buffer(buffer)),
            Classification::MaxMatch => MatchOutcome::MaxMatch(self.match_for_buffer(buffer)),
        }
    }

    /// [`find_match`](Self::find_match) for a validated symbol buffer.
    pub fn find_match_symbols(&self, buffer: &[Symbol]) -> MatchOutcome {
        self.find_match(&symbols_to_string(buffer))
    }

    fn match_for_buffer(&self, buffer: &str) -> GrammarMatch {
        GrammarMatch {
            mode: self.mode,
            confidence: self.mode.confidence(),
            utterance: buffer.to_string(),
            interpretation: interpretation::interpret(&self.tags, buffer),
        }
    }
}
