//! DTMF symbol vocabulary.
//!
//! This module defines the fixed 16-symbol keypad alphabet: digits `0`-`9`, `#`, `*`, and the
//! extended column letters `A`-`D`.
//!
//! ## Notes
//! - Lookup via [`Symbol::from_char`] is **case-sensitive**: only upper-case `A`-`D` are symbols.
//! - [`SYMBOLS`] is ordered `0123456789#*ABCD`; the matcher probes extensions in this order.
//!
//! ## Examples
//! ```rust
//! use dtmfmatch_core::symbol::{self, Symbol};
//!
//! assert_eq!(Symbol::from_char('#'), Some(Symbol::Pound));
//! assert_eq!(Symbol::Star.spoken(), "star");
//! assert_eq!(symbol::parse_symbols("1*").unwrap(), vec![Symbol::Digit1, Symbol::Star]);
//! ```

use std::fmt;

use crate::errors::SymbolError;

/// Stable identifier for a DTMF keypad symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Pound,
    Star,
    A,
    B,
    C,
    D,
}

/// Metadata for a DTMF symbol.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: Symbol,
    /// The keypad character, as it appears in buffers and grammar patterns.
    pub canonical: char,
    /// Name used when rendering an utterance interpretation (`dtmf-<spoken>`).
    pub spoken: &'static str,
}

/// Registry of all DTMF symbols, in probe order.
pub const SYMBOLS: &[SymbolInfo] = &[
    info(Symbol::Digit0, '0', "0"),
    info(Symbol::Digit1, '1', "1"),
    info(Symbol::Digit2, '2', "2"),
    info(Symbol::Digit3, '3', "3"),
    info(Symbol::Digit4, '4', "4"),
    info(Symbol::Digit5, '5', "5"),
    info(Symbol::Digit6, '6', "6"),
    info(Symbol::Digit7, '7', "7"),
    info(Symbol::Digit8, '8', "8"),
    info(Symbol::Digit9, '9', "9"),
    info(Symbol::Pound, '#', "pound"),
    info(Symbol::Star, '*', "star"),
    info(Symbol::A, 'A', "A"),
    info(Symbol::B, 'B', "B"),
    info(Symbol::C, 'C', "C"),
    info(Symbol::D, 'D', "D"),
];

const fn info(id: Symbol, canonical: char, spoken: &'static str) -> SymbolInfo {
    SymbolInfo { id, canonical, spoken }
}

impl Symbol {
    /// Every symbol of the alphabet, in probe order.
    pub const ALL: [Symbol; 16] = [
        Symbol::Digit0,
        Symbol::Digit1,
        Symbol::Digit2,
        Symbol::Digit3,
        Symbol::Digit4,
        Symbol::Digit5,
        Symbol::Digit6,
        Symbol::Digit7,
        Symbol::Digit8,
        Symbol::Digit9,
        Symbol::Pound,
        Symbol::Star,
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
    ];

    /// Look up registry metadata for this symbol.
    pub fn info(self) -> &'static SymbolInfo {
        // `SYMBOLS` is declared in enum order, so the discriminant is the table index.
        &SYMBOLS[self as usize]
    }

    /// Resolve a keypad character to its symbol, if it is one.
    pub fn from_char(c: char) -> Option<Symbol> {
        SYMBOLS.iter().find(|s| s.canonical == c).map(|s| s.id)
    }

    /// The keypad character for this symbol.
    pub fn as_char(self) -> char {
        self.info().canonical
    }

    /// The single ASCII byte fed to the matcher for this symbol.
    pub fn as_byte(self) -> u8 {
        // All canonical characters are ASCII.
        self.as_char() as u8
    }

    /// The spoken name used in utterance interpretations (`star`, `pound`, or the character itself).
    pub fn spoken(self) -> &'static str {
        self.info().spoken
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Symbol {
    type Error = SymbolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::from_char(c).ok_or(SymbolError { found: c, offset: None })
    }
}

/// Validate and convert a keypad string into a symbol buffer.
///
/// ## Errors
/// Returns [`SymbolError`] for the first character outside the alphabet, carrying its char offset.
pub fn parse_symbols(input: &str) -> Result<Vec<Symbol>, SymbolError> {
    input
        .chars()
        .enumerate()
        .map(|(offset, c)| {
            Symbol::from_char(c).ok_or(SymbolError {
                found: c,
                offset: Some(offset),
            })
        })
        .collect()
}

/// Render a symbol buffer back to its keypad string.
pub fn symbols_to_string(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.as_char()).collect()
}
