//! Error taxonomy shared by the guard and sequence helpers.

use thiserror::Error;

/// Rejection raised by an argument guard.
///
/// Every variant carries the name of the offending parameter so callers can
/// surface it without extra bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("parameter '{param}' must not be null")]
    Null { param: &'static str },
    #[error("parameter '{param}' must not be empty")]
    Empty { param: &'static str },
    #[error("parameter '{param}' must not be empty or whitespace")]
    Whitespace { param: &'static str },
    #[error("parameter '{param}' must not be the nil identifier")]
    NilIdentifier { param: &'static str },
    #[error("parameter '{param}' is {value}; expected a value in [{min}, {max}]")]
    OutOfRange {
        param: &'static str,
        value: String,
        min: String,
        max: String,
    },
    #[error("parameter '{param}' is {raw}, which is not a defined {kind}; expected one of: {expected:?}")]
    Undefined {
        param: &'static str,
        kind: &'static str,
        raw: i64,
        expected: &'static [&'static str],
    },
    #[error("parameter '{param}' is invalid: {reason}")]
    Invalid { param: &'static str, reason: String },
}

impl GuardError {
    /// Name of the parameter that failed validation.
    #[must_use]
    pub const fn param(&self) -> &'static str {
        match self {
            GuardError::Null { param }
            | GuardError::Empty { param }
            | GuardError::Whitespace { param }
            | GuardError::NilIdentifier { param }
            | GuardError::OutOfRange { param, .. }
            | GuardError::Undefined { param, .. }
            | GuardError::Invalid { param, .. } => param,
        }
    }
}

/// Cardinality violation observed while querying a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("sequence contains no elements")]
    NoElements,
    #[error("sequence contains no matching element")]
    NoMatch,
    #[error("sequence contains more than one element")]
    MoreThanOneElement,
    #[error("sequence contains more than one matching element")]
    MoreThanOneMatch,
}
