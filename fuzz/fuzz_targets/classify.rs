#![no_main]

use dtmfmatch_core::{Classification, IncrementalMatcher, Symbol};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First line is the pattern, the rest is the buffer (ignore invalid UTF-8)
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let (pattern, buffer) = s.split_once('\n').unwrap_or((s, ""));

    let Ok(matcher) = IncrementalMatcher::compile(pattern) else {
        return;
    };

    let classification = matcher.classify_str(buffer);
    if classification == Classification::NoMatch {
        for symbol in Symbol::ALL {
            let mut longer = buffer.to_string();
            longer.push(symbol.as_char());
            assert_eq!(matcher.classify_str(&longer), Classification::NoMatch);
        }
    }
});
