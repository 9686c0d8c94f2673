//! Utterance interpretation.
//!
//! Grammars attach semantic tags to alternatives as named capture groups: a group named `_bar`
//! carries the tag literal `bar`. When a matched utterance passes through tag groups, the last
//! participating one wins. Without a tag, the interpretation spells the utterance out as
//! `dtmf-<spoken>` words, e.g. `*9#` becomes `dtmf-star dtmf-9 dtmf-pound`.

use dtmfmatch_core::Symbol;
use regex::bytes::Regex;

/// Prefix that marks a capture group as a semantic tag.
pub const TAG_PREFIX: char = '_';

/// Interpret a fully matched utterance.
pub fn interpret(tags: &Regex, utterance: &str) -> String {
    find_tag(tags, utterance).unwrap_or_else(|| spoken_utterance(utterance))
}

/// Find the literal of the last tag group that took part in matching `utterance`.
pub fn find_tag(tags: &Regex, utterance: &str) -> Option<String> {
    let captures = tags.captures(utterance.as_bytes())?;
    tags.capture_names()
        .enumerate()
        .filter_map(|(index, name)| {
            let tag = name?.strip_prefix(TAG_PREFIX)?;
            captures.get(index).map(|_| tag)
        })
        .last()
        .map(str::to_string)
}

/// Spell an utterance out as space-separated `dtmf-<spoken>` words.
pub fn spoken_utterance(utterance: &str) -> String {
    utterance
        .chars()
        .map(|c| match Symbol::from_char(c) {
            Some(symbol) => format!("dtmf-{}", symbol.spoken()),
            None => format!("dtmf-{c}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
