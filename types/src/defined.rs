//! Mapping from raw discriminants to enum variants.

/// An enum whose variants can be recovered from a raw integer discriminant.
///
/// Implementors list their variant names in `NAMES` so that a rejected value
/// can be reported alongside the accepted set.
///
/// ```
/// use ferrule_types::DefinedEnum;
///
/// #[derive(Debug, PartialEq)]
/// enum Level {
///     Low = 1,
///     High = 2,
/// }
///
/// impl DefinedEnum for Level {
///     const KIND: &'static str = "level";
///     const NAMES: &'static [&'static str] = &["Low", "High"];
///
///     fn from_raw(raw: i64) -> Option<Self> {
///         match raw {
///             1 => Some(Level::Low),
///             2 => Some(Level::High),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Level::from_raw(2), Some(Level::High));
/// assert!(!Level::is_defined(0));
/// ```
pub trait DefinedEnum: Sized {
    /// Human-readable name of the enum, used in error messages.
    const KIND: &'static str;
    /// Names of every defined variant.
    const NAMES: &'static [&'static str];

    fn from_raw(raw: i64) -> Option<Self>;

    #[must_use]
    fn is_defined(raw: i64) -> bool {
        Self::from_raw(raw).is_some()
    }
}
