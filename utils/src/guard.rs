//! Argument guards.
//!
//! Each guard returns its input unchanged when the condition holds, so calls
//! compose with `?` at the top of a function:
//!
//! ```
//! use ferrule_utils::guard::{in_range, not_null_or_whitespace};
//!
//! fn connect(host: Option<&str>, port: u32) -> Result<String, ferrule_utils::GuardError> {
//!     let host = not_null_or_whitespace(host, "host")?;
//!     let port = in_range(port, 1, 65_535, "port")?;
//!     Ok(format!("{host}:{port}"))
//! }
//!
//! assert_eq!(connect(Some("db"), 5432).unwrap(), "db:5432");
//! assert!(connect(Some("  "), 5432).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt::Debug;

use ferrule_types::{DefinedEnum, GuardError};
use uuid::Uuid;

fn reject(err: GuardError) -> GuardError {
    tracing::trace!(param = err.param(), "Argument rejected: {err}");
    err
}

/// Require a value to be present.
pub fn not_null<T>(value: Option<T>, param: &'static str) -> Result<T, GuardError> {
    value.ok_or_else(|| reject(GuardError::Null { param }))
}

/// Require a non-empty string.
pub fn not_empty<S: AsRef<str>>(value: S, param: &'static str) -> Result<S, GuardError> {
    if value.as_ref().is_empty() {
        return Err(reject(GuardError::Empty { param }));
    }
    Ok(value)
}

pub fn not_null_or_empty<S: AsRef<str>>(
    value: Option<S>,
    param: &'static str,
) -> Result<S, GuardError> {
    not_empty(not_null(value, param)?, param)
}

/// Require a string with at least one non-whitespace character.
pub fn not_whitespace<S: AsRef<str>>(value: S, param: &'static str) -> Result<S, GuardError> {
    if value.as_ref().trim().is_empty() {
        return Err(reject(GuardError::Whitespace { param }));
    }
    Ok(value)
}

pub fn not_null_or_whitespace<S: AsRef<str>>(
    value: Option<S>,
    param: &'static str,
) -> Result<S, GuardError> {
    not_whitespace(not_null(value, param)?, param)
}

/// Require a collection with at least one element.
pub fn not_empty_slice<C, T>(value: C, param: &'static str) -> Result<C, GuardError>
where
    C: AsRef<[T]>,
{
    if value.as_ref().is_empty() {
        return Err(reject(GuardError::Empty { param }));
    }
    Ok(value)
}

/// Require an identifier other than the nil UUID.
pub fn not_nil_uuid(value: Uuid, param: &'static str) -> Result<Uuid, GuardError> {
    if value.is_nil() {
        return Err(reject(GuardError::NilIdentifier { param }));
    }
    Ok(value)
}

/// Require `min <= value <= max` under the type's natural ordering.
///
/// Values that do not compare at all (e.g. `NaN`) are out of range.
pub fn in_range<T>(value: T, min: T, max: T, param: &'static str) -> Result<T, GuardError>
where
    T: PartialOrd + Debug,
{
    in_range_by(value, min, max, param, |a, b| {
        a.partial_cmp(b).unwrap_or(Ordering::Less)
    })
}

/// Require `min <= value <= max` under a caller-supplied ordering.
///
/// Both bounds are inclusive.
pub fn in_range_by<T, F>(
    value: T,
    min: T,
    max: T,
    param: &'static str,
    mut cmp: F,
) -> Result<T, GuardError>
where
    T: Debug,
    F: FnMut(&T, &T) -> Ordering,
{
    let above_min = cmp(&value, &min) != Ordering::Less;
    let below_max = cmp(&max, &value) != Ordering::Less;
    if above_min && below_max {
        return Ok(value);
    }
    Err(reject(GuardError::OutOfRange {
        param,
        value: format!("{value:?}"),
        min: format!("{min:?}"),
        max: format!("{max:?}"),
    }))
}

/// Map a raw discriminant to a defined variant of `E`.
pub fn defined<E: DefinedEnum>(raw: i64, param: &'static str) -> Result<E, GuardError> {
    E::from_raw(raw).ok_or_else(|| {
        reject(GuardError::Undefined {
            param,
            kind: E::KIND,
            raw,
            expected: E::NAMES,
        })
    })
}

/// Require an arbitrary predicate, reporting `reason` on failure.
pub fn ensure<T>(
    value: T,
    predicate: impl FnOnce(&T) -> bool,
    param: &'static str,
    reason: impl Into<String>,
) -> Result<T, GuardError> {
    if predicate(&value) {
        return Ok(value);
    }
    Err(reject(GuardError::Invalid {
        param,
        reason: reason.into(),
    }))
}
