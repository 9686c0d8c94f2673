//! Incremental collection traces
//!
//! Replays a buffer one keypress at a time, the way a collection loop would feed it, and records
//! the classification after each symbol. The replay stops at the first terminal classification.

use dtmfmatch_core::{Classification, IncrementalMatcher, Symbol};
use serde::{Serialize, Serializer};

/// Classification of one buffer prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub buffer: String,
    #[serde(serialize_with = "serialize_classification")]
    pub classification: Classification,
}

fn serialize_classification<S: Serializer>(classification: &Classification, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(classification.as_str())
}

/// Classify successive prefixes of `symbols`, stopping after the first `NoMatch` or `MaxMatch`.
pub fn trace(matcher: &IncrementalMatcher, symbols: &[Symbol]) -> Vec<TraceStep> {
    let mut steps = Vec::with_capacity(symbols.len());
    let mut buffer = String::with_capacity(symbols.len());
    for (len, symbol) in symbols.iter().enumerate() {
        buffer.push(symbol.as_char());
        let classification = matcher.classify(&symbols[..=len]);
        steps.push(TraceStep {
            buffer: buffer.clone(),
            classification,
        });
        if classification.is_terminal() {
            break;
        }
    }
    steps
}

/// Render steps one per line as `<buffer> => <classification>`.
pub fn render_trace(steps: &[TraceStep]) -> String {
    steps
        .iter()
        .map(|step| format!("{} => {}", step.buffer, step.classification))
        .collect::<Vec<_>>()
        .join("\n")
}
