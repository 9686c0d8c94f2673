//! Caller-visible match results.

use std::fmt;
use std::str::FromStr;

use dtmfmatch_core::Classification;
use serde::Serialize;
use thiserror::Error;

/// Input modality a grammar was written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Dtmf,
    Voice,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Dtmf => "dtmf",
            InputMode::Voice => "voice",
        }
    }

    /// Confidence reported for a match in this mode (keypad input is exact).
    pub fn confidence(self) -> u8 {
        match self {
            InputMode::Dtmf => 1,
            InputMode::Voice => 0,
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown input mode `{0}` (expected `dtmf` or `voice`)")]
pub struct UnknownModeError(pub String);

impl FromStr for InputMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dtmf" => Ok(InputMode::Dtmf),
            "voice" => Ok(InputMode::Voice),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

/// A complete match of a buffer against a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarMatch {
    pub mode: InputMode,
    pub confidence: u8,
    /// The buffer exactly as collected.
    pub utterance: String,
    /// Semantic tag literal, or the spoken rendering of the utterance when no tag applies.
    pub interpretation: String,
}

/// Classification of a buffer, with match details attached for full matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchOutcome {
    NoMatch,
    PotentialMatch,
    Match(GrammarMatch),
    /// A match that no further input can extend; collection should stop.
    MaxMatch(GrammarMatch),
}

impl MatchOutcome {
    /// The bare classification this outcome was built from.
    pub fn classification(&self) -> Classification {
        match self {
            MatchOutcome::NoMatch => Classification::NoMatch,
            MatchOutcome::PotentialMatch => Classification::PotentialMatch,
            MatchOutcome::Match(_) => Classification::Match,
            MatchOutcome::MaxMatch(_) => Classification::MaxMatch,
        }
    }

    /// Match details, for `Match` and `MaxMatch`.
    pub fn grammar_match(&self) -> Option<&GrammarMatch> {
        match self {
            MatchOutcome::Match(m) | MatchOutcome::MaxMatch(m) => Some(m),
            MatchOutcome::NoMatch | MatchOutcome::PotentialMatch => None,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.grammar_match() {
            Some(m) => write!(
                f,
                "{} (mode={}, confidence={}, utterance={:?}, interpretation={:?})",
                self.classification(),
                m.mode,
                m.confidence,
                m.utterance,
                m.interpretation
            ),
            None => write!(f, "{}", self.classification()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match() -> GrammarMatch {
        GrammarMatch {
            mode: InputMode::Dtmf,
            confidence: 1,
            utterance: "*9".to_string(),
            interpretation: "dtmf-star dtmf-9".to_string(),
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("dtmf".parse::<InputMode>().unwrap(), InputMode::Dtmf);
        assert_eq!("voice".parse::<InputMode>().unwrap(), InputMode::Voice);
        assert!("DTMF".parse::<InputMode>().is_err());
    }

    #[test]
    fn test_mode_confidence() {
        assert_eq!(InputMode::Dtmf.confidence(), 1);
        assert_eq!(InputMode::Voice.confidence(), 0);
    }

    #[test]
    fn test_outcome_classification() {
        assert_eq!(MatchOutcome::NoMatch.classification(), Classification::NoMatch);
        assert_eq!(
            MatchOutcome::MaxMatch(sample_match()).classification(),
            Classification::MaxMatch
        );
        assert!(MatchOutcome::PotentialMatch.grammar_match().is_none());
        assert_eq!(
            MatchOutcome::Match(sample_match()).grammar_match().map(|m| m.utterance.as_str()),
            Some("*9")
        );
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let json = serde_json::to_value(MatchOutcome::MaxMatch(sample_match())).unwrap();
        assert_eq!(json["kind"], "max_match");
        assert_eq!(json["mode"], "dtmf");
        assert_eq!(json["confidence"], 1);
        assert_eq!(json["interpretation"], "dtmf-star dtmf-9");

        let json = serde_json::to_value(MatchOutcome::PotentialMatch).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "potential_match" }));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(MatchOutcome::NoMatch.to_string(), "no_match");
        assert_eq!(
            MatchOutcome::Match(sample_match()).to_string(),
            r#"match (mode=dtmf, confidence=1, utterance="*9", interpretation="dtmf-star dtmf-9")"#
        );
    }
}
