//! Error types shared by the matcher core and its callers.
//!
//! `compile` is the only fallible matcher operation. Classification is total, so there is no
//! runtime error kind; [`SymbolError`] exists for callers that validate buffers up front.

use miette::Diagnostic;
use thiserror::Error;

/// A grammar pattern could not be compiled into a matcher.
///
/// Fatal for the matcher being built: no partially-constructed matcher is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("cannot compile grammar pattern `{pattern}`: {reason}")]
#[diagnostic(
    code(dtmfmatch::pattern),
    help("the grammar compiler must emit a pattern in `regex` crate syntax")
)]
pub struct PatternError {
    /// The pattern as it was handed to `compile`.
    pub pattern: String,
    /// Engine-reported cause (syntax error, size limit, unsupported construct).
    pub reason: String,
}

impl PatternError {
    pub fn new(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }
}

/// A character outside the 16-symbol DTMF alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
#[error("`{found}`{} is not a DTMF symbol", describe_offset(.offset))]
#[diagnostic(code(dtmfmatch::symbol), help("valid symbols are 0-9, #, * and A-D"))]
pub struct SymbolError {
    pub found: char,
    /// Char offset of `found` within the rejected input. `None` when a lone character was
    /// converted, as with `Symbol::try_from`.
    pub offset: Option<usize>,
}

fn describe_offset(offset: &Option<usize>) -> String {
    offset.map(|o| format!(" at offset {o}")).unwrap_or_default()
}
