//! Classification of an in-progress buffer against a grammar.

use std::fmt;

/// Result of classifying one buffer snapshot.
///
/// Produced fresh by every `classify` call; the buffer keeps growing between calls, so a
/// classification is never reused for a different buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The buffer can never match, whatever is appended.
    NoMatch,
    /// The buffer does not match yet, but some extension could.
    PotentialMatch,
    /// The buffer matches and at least one single-symbol extension also matches.
    Match,
    /// The buffer matches and no single-symbol extension does.
    MaxMatch,
}

impl Classification {
    /// Check whether the buffer fully matches (`Match` or `MaxMatch`).
    pub fn is_match(self) -> bool {
        matches!(self, Classification::Match | Classification::MaxMatch)
    }

    /// Check whether collecting more input can change the outcome.
    ///
    /// ## Returns
    /// - (`bool`): `true` for `NoMatch` and `MaxMatch`; a collection loop stops here.
    pub fn is_terminal(self) -> bool {
        matches!(self, Classification::NoMatch | Classification::MaxMatch)
    }

    /// Stable snake_case name, used for logging and machine-readable output.
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::NoMatch => "no_match",
            Classification::PotentialMatch => "potential_match",
            Classification::Match => "match",
            Classification::MaxMatch => "max_match",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
