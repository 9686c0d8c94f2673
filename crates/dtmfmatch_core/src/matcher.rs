//! Incremental classification of DTMF buffers.
//!
//! A grammar pattern is compiled once into an anchored, all-matches dense DFA. Each
//! [`IncrementalMatcher::classify`] call walks that DFA from its start state with a local cursor:
//!
//! 1. Feed every buffer byte. A dead state means no extension can ever match (`NoMatch`).
//! 2. Take the end-of-input transition. A match state there means the whole buffer matches.
//! 3. On a full match, probe each of the 16 alphabet symbols (one transition plus end-of-input);
//!    the first one that still matches makes the result `Match`, otherwise it is `MaxMatch`.
//! 4. Without a full match, search the states reachable from the cursor (one byte per equivalence
//!    class) for one that accepts at end of input. Finding one makes the buffer a viable prefix (`PotentialMatch`).
//!
//! ## Notes
//! - The DFA is never mutated after construction, so a matcher is `Send + Sync` and can be shared
//!   across threads without locking.
//! - A call costs one pass over the buffer plus at most 16 single-step transitions for the probe.
//! - Extendability is defined by single-symbol extension only. Grammars whose terminals span
//!   several symbols are not supported by the max-match probe.

use std::collections::HashSet;
use std::fmt;

use regex_automata::dfa::{Automaton, StartKind, dense};
use regex_automata::util::primitives::StateID;
use regex_automata::util::{start, syntax};
use regex_automata::{Anchored, MatchKind};

use crate::classification::Classification;
use crate::config::MatcherConfig;
use crate::errors::PatternError;
use crate::symbol::Symbol;

/// Classifier for one compiled grammar pattern.
///
/// Owns its automaton exclusively and never changes after [`compile`](Self::compile); a different
/// pattern needs a new matcher.
#[derive(Clone)]
pub struct IncrementalMatcher {
    pattern: String,
    dfa: dense::DFA<Vec<u32>>,
    start: StateID,
    /// One byte per equivalence class; the reachability search only needs to try these.
    class_representatives: Vec<u8>,
}

impl IncrementalMatcher {
    /// Compile a grammar pattern with the default [`MatcherConfig`].
    ///
    /// ## Errors
    /// Returns [`PatternError`] when the pattern is not valid `regex` syntax, uses a construct the
    /// DFA cannot express, or exceeds the configured size limits.
    ///
    /// ## Examples
    /// ```rust
    /// use dtmfmatch_core::{Classification, IncrementalMatcher};
    ///
    /// let matcher = IncrementalMatcher::compile("1[0-9]").unwrap();
    /// assert_eq!(matcher.classify_str("1"), Classification::PotentialMatch);
    /// assert_eq!(matcher.classify_str("15"), Classification::MaxMatch);
    /// assert_eq!(matcher.classify_str("2"), Classification::NoMatch);
    /// ```
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_with(pattern, &MatcherConfig::default())
    }

    /// Compile a grammar pattern with an explicit configuration.
    #[tracing::instrument(skip_all, fields(pattern_len = pattern.len()))]
    pub fn compile_with(pattern: &str, config: &MatcherConfig) -> Result<Self, PatternError> {
        let dfa = dense::Builder::new()
            .configure(
                dense::Config::new()
                    // Every viable thread must survive so that a longer full match is never
                    // pruned in favour of a shorter, higher-priority one.
                    .match_kind(MatchKind::All)
                    .start_kind(StartKind::Anchored)
                    .minimize(config.minimize)
                    .dfa_size_limit(config.size_limit)
                    .determinize_size_limit(config.determinize_size_limit),
            )
            // Buffers are ASCII keypad characters; byte-oriented classes keep the DFA small.
            .syntax(syntax::Config::new().unicode(false).utf8(false))
            .build(pattern)
            .map_err(|e| PatternError::new(pattern, e))?;

        let start = dfa
            .start_state(&start::Config::new().anchored(Anchored::Yes))
            .map_err(|e| PatternError::new(pattern, e))?;

        let class_representatives: Vec<u8> = dfa
            .byte_classes()
            .representatives(0..=u8::MAX)
            .filter_map(|unit| unit.as_u8())
            .collect();

        tracing::debug!(
            memory_usage = dfa.memory_usage(),
            byte_classes = class_representatives.len(),
            "compiled grammar pattern"
        );

        Ok(Self {
            pattern: pattern.to_string(),
            dfa,
            start,
            class_representatives,
        })
    }

    /// The source pattern this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Heap bytes held by the compiled automaton.
    pub fn memory_usage(&self) -> usize {
        self.dfa.memory_usage()
    }

    /// Classify a validated symbol buffer.
    pub fn classify(&self, buffer: &[Symbol]) -> Classification {
        self.classify_bytes(buffer.iter().map(|s| s.as_byte()))
    }

    /// Classify an unvalidated keypad string.
    ///
    /// Characters outside the alphabet get no special treatment: they simply fail to match the
    /// pattern like any other unexpected input.
    pub fn classify_str(&self, buffer: &str) -> Classification {
        self.classify_bytes(buffer.bytes())
    }

    fn classify_bytes(&self, bytes: impl IntoIterator<Item = u8>) -> Classification {
        let mut state = self.start;
        let mut len = 0usize;
        for byte in bytes {
            state = self.dfa.next_state(state, byte);
            len += 1;
            if self.dfa.is_dead_state(state) {
                tracing::trace!(buffer_len = len, classification = "no_match", "dead state");
                return Classification::NoMatch;
            }
        }

        let result = if self.accepts_at_end(state) {
            if self.is_extendable(state) {
                Classification::Match
            } else {
                Classification::MaxMatch
            }
        } else if self.can_reach_accept(state) {
            Classification::PotentialMatch
        } else {
            Classification::NoMatch
        };

        tracing::trace!(buffer_len = len, classification = %result, "classified buffer");
        result
    }

    /// Check whether input ending in `state` is a full match.
    fn accepts_at_end(&self, state: StateID) -> bool {
        self.dfa.is_match_state(self.dfa.next_eoi_state(state))
    }

    /// Check whether appending a single alphabet symbol still yields a full match.
    ///
    /// Stops at the first extending symbol.
    fn is_extendable(&self, state: StateID) -> bool {
        Symbol::ALL.iter().any(|symbol| {
            let next = self.dfa.next_state(state, symbol.as_byte());
            !self.dfa.is_dead_state(next) && self.accepts_at_end(next)
        })
    }

    /// Check whether any continuation from `state` reaches a full match.
    ///
    /// Depth-first over one byte per equivalence class; bounded by the number of DFA states.
    fn can_reach_accept(&self, state: StateID) -> bool {
        if self.dfa.is_dead_state(state) {
            return false;
        }

        let mut seen = HashSet::from([state]);
        let mut stack = vec![state];
        while let Some(current) = stack.pop() {
            for &byte in &self.class_representatives {
                let next = self.dfa.next_state(current, byte);
                if self.dfa.is_dead_state(next) || !seen.insert(next) {
                    continue;
                }
                if self.accepts_at_end(next) {
                    return true;
                }
                stack.push(next);
            }
        }
        false
    }
}

impl fmt::Debug for IncrementalMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IncrementalMatcher")
            .field("pattern", &self.pattern)
            .field("memory_usage", &self.dfa.memory_usage())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::parse_symbols;

    fn classify(pattern: &str, buffer: &str) -> Classification {
        let matcher = IncrementalMatcher::compile(pattern).unwrap();
        matcher.classify(&parse_symbols(buffer).unwrap())
    }

    // ========================================
    // Reference scenarios
    // ========================================

    #[test]
    fn test_one_more_digit_is_potential() {
        assert_eq!(classify("1[0-9]", "1"), Classification::PotentialMatch);
    }

    #[test]
    fn test_fixed_length_is_max_match() {
        assert_eq!(classify("1[0-9]", "15"), Classification::MaxMatch);
    }

    #[test]
    fn test_open_repeat_is_match() {
        assert_eq!(classify("1[0-9]*", "15"), Classification::Match);
    }

    #[test]
    fn test_diverging_first_symbol_is_no_match() {
        assert_eq!(classify("1[0-9]", "2"), Classification::NoMatch);
    }

    #[test]
    fn test_counted_repeat() {
        assert_eq!(classify("[0-9]{3}", "99"), Classification::PotentialMatch);
        assert_eq!(classify("[0-9]{3}", "999"), Classification::MaxMatch);
        assert_eq!(classify("[0-9]{3}", "9999"), Classification::NoMatch);
    }

    // ========================================
    // Anchoring and priority
    // ========================================

    #[test]
    fn test_explicit_anchors_are_accepted() {
        assert_eq!(classify("^1[0-9]$", "15"), Classification::MaxMatch);
        assert_eq!(classify("^1[0-9]$", "1"), Classification::PotentialMatch);
    }

    #[test]
    fn test_match_is_anchored_at_both_ends() {
        // A substring match does not count.
        assert_eq!(classify("5", "15"), Classification::NoMatch);
        assert_eq!(classify("1", "15"), Classification::NoMatch);
    }

    #[test]
    fn test_lower_priority_alternative_still_matches() {
        // Leftmost-first would prefer `1` and never report `12`.
        assert_eq!(classify("1|12", "12"), Classification::MaxMatch);
        assert_eq!(classify("1|12", "1"), Classification::Match);
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(classify("6", ""), Classification::PotentialMatch);
        assert_eq!(classify("6?", ""), Classification::Match);
        assert_eq!(classify("", ""), Classification::MaxMatch);
    }

    #[test]
    fn test_extension_by_letter_symbols() {
        assert_eq!(classify("1[A-D]?", "1"), Classification::Match);
        assert_eq!(classify("1[A-D]?", "1C"), Classification::MaxMatch);
    }

    #[test]
    fn test_extension_only_outside_alphabet_is_max_match() {
        // `x` would extend the match, but it is not a keypad symbol.
        assert_eq!(classify("1x?", "1"), Classification::MaxMatch);
    }

    // ========================================
    // Unvalidated input
    // ========================================

    #[test]
    fn test_classify_str_out_of_alphabet_is_no_match() {
        let matcher = IncrementalMatcher::compile("1[0-9]").unwrap();
        assert_eq!(matcher.classify_str("1x"), Classification::NoMatch);
        assert_eq!(matcher.classify_str("x"), Classification::NoMatch);
    }

    #[test]
    fn test_classify_str_agrees_with_classify() {
        let matcher = IncrementalMatcher::compile("(\\*9|[0-9]{4}#)").unwrap();
        for buffer in ["", "*", "*9", "12", "1234", "1234#", "#"] {
            assert_eq!(
                matcher.classify_str(buffer),
                matcher.classify(&parse_symbols(buffer).unwrap()),
                "buffer {buffer:?}"
            );
        }
    }

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = IncrementalMatcher::compile("1[0-9").unwrap_err();
        assert_eq!(err.pattern, "1[0-9");
        assert!(!err.reason.is_empty());
    }

    #[test]
    fn test_size_limit_is_enforced() {
        let config = MatcherConfig::new().with_size_limit(Some(64));
        assert!(IncrementalMatcher::compile_with("[0-9]{50}#", &config).is_err());
    }

    #[test]
    fn test_minimized_matcher_agrees() {
        let config = MatcherConfig::new().with_minimize(true);
        let minimized = IncrementalMatcher::compile_with("1(6){0,3}", &config).unwrap();
        let plain = IncrementalMatcher::compile("1(6){0,3}").unwrap();
        for buffer in ["", "1", "16", "1666", "16666", "7"] {
            assert_eq!(minimized.classify_str(buffer), plain.classify_str(buffer));
        }
    }

    #[test]
    fn test_pattern_accessor() {
        let matcher = IncrementalMatcher::compile("[0-9]#").unwrap();
        assert_eq!(matcher.pattern(), "[0-9]#");
    }

    #[test]
    fn test_matcher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IncrementalMatcher>();
    }

    #[test]
    fn test_class_representatives_cover_distinct_transitions() {
        let matcher = IncrementalMatcher::compile("[0-9]{4}#").unwrap();
        let classes = matcher.dfa.byte_classes();
        let reps = &matcher.class_representatives;
        assert!(reps.len() < 256);
        for byte in 0..=u8::MAX {
            assert!(reps.iter().any(|&r| classes.get(r) == classes.get(byte)), "byte {byte}");
        }
    }

    #[test]
    fn test_long_viable_prefix_stays_potential() {
        let matcher = IncrementalMatcher::compile("([0-9]{4}#){100}").unwrap();
        assert_eq!(matcher.classify_str(""), Classification::PotentialMatch);
        assert_eq!(matcher.classify_str("1234#5"), Classification::PotentialMatch);
        assert_eq!(matcher.classify_str("1234##"), Classification::NoMatch);

        let wide = IncrementalMatcher::compile("[0-9A-D#*]{300}").unwrap();
        assert_eq!(wide.classify_str(""), Classification::PotentialMatch);
        assert_eq!(wide.classify_str(&"7".repeat(300)), Classification::MaxMatch);
    }

    #[test]
    fn test_concurrent_classification() {
        let matcher = IncrementalMatcher::compile("[0-9]{4}#").unwrap();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert_eq!(matcher.classify_str("1234"), Classification::PotentialMatch);
                    assert_eq!(matcher.classify_str("1234#"), Classification::MaxMatch);
                });
            }
        });
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn buffer_strategy() -> impl Strategy<Value = Vec<Symbol>> {
            prop::collection::vec(prop::sample::select(Symbol::ALL.to_vec()), 0..10)
        }

        proptest! {
            #[test]
            fn classify_agrees_with_classify_str(buffer in buffer_strategy()) {
                let matcher = IncrementalMatcher::compile(r"([0-9]{4}#|\*9)|1(6){0,3}|[A-D]+").unwrap();
                let text: String = buffer.iter().map(|s| s.as_char()).collect();
                prop_assert_eq!(matcher.classify(&buffer), matcher.classify_str(&text));
            }

            #[test]
            fn minimized_and_plain_dfas_agree(buffer in buffer_strategy()) {
                let pattern = "(65|72)[0-9]*|#{2,3}";
                let plain = IncrementalMatcher::compile(pattern).unwrap();
                let minimized =
                    IncrementalMatcher::compile_with(pattern, &MatcherConfig::new().with_minimize(true)).unwrap();
                prop_assert_eq!(plain.classify(&buffer), minimized.classify(&buffer));
            }
        }
    }
}
