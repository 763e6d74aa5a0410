//! Tagged success/failure value.

use thiserror::Error;

/// Returned when an [`Outcome`] is read through the branch it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InactiveBranch {
    #[error("outcome holds a failure, not a value")]
    NotSuccess,
    #[error("outcome holds a value, not a failure")]
    NotFailure,
}

/// Outcome of a unit of work, captured instead of propagated.
///
/// This is a sum type that structurally distinguishes success from failure.
/// Unlike `Result` it is meant to be stored and inspected later, so the
/// accessors report wrong-branch reads as [`InactiveBranch`] rather than
/// returning `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrow the success payload.
    pub fn value(&self) -> Result<&T, InactiveBranch> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(InactiveBranch::NotSuccess),
        }
    }

    /// Borrow the failure payload.
    pub fn fault(&self) -> Result<&E, InactiveBranch> {
        match self {
            Outcome::Success(_) => Err(InactiveBranch::NotFailure),
            Outcome::Failure(fault) => Ok(fault),
        }
    }

    pub fn into_value(self) -> Result<T, InactiveBranch> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(InactiveBranch::NotSuccess),
        }
    }

    pub fn into_fault(self) -> Result<E, InactiveBranch> {
        match self {
            Outcome::Success(_) => Err(InactiveBranch::NotFailure),
            Outcome::Failure(fault) => Ok(fault),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(fault) => Outcome::Failure(fault),
        }
    }

    pub fn map_fault<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(fault) => Outcome::Failure(f(fault)),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(fault) => Err(fault),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(fault) => Outcome::Failure(fault),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
