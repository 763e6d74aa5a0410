//! Minimum/maximum pair.

/// Both extremes of a sequence, computed in one traversal.
///
/// A `MinMax` always holds both ends. Queries over nullable items return
/// `Option<MinMax<T>>`, so "both absent" is the only empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

impl<T> MinMax<T> {
    #[must_use]
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Pair for a single-element sequence.
    #[must_use]
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            min: value.clone(),
            max: value,
        }
    }

    #[must_use]
    pub fn into_tuple(self) -> (T, T) {
        (self.min, self.max)
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> MinMax<U> {
        MinMax {
            min: f(self.min),
            max: f(self.max),
        }
    }
}

impl<T> From<(T, T)> for MinMax<T> {
    fn from((min, max): (T, T)) -> Self {
        Self { min, max }
    }
}

impl<T> From<MinMax<T>> for (T, T) {
    fn from(pair: MinMax<T>) -> Self {
        pair.into_tuple()
    }
}
