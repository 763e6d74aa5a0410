//! Extremum queries over iterators of `Option<T>`.

use std::cmp::Ordering;

use ferrule_types::MinMax;

use crate::extremum::{self, Numeric};

/// Extremum queries that treat `None` items as absent.
///
/// `None` items are skipped. If nothing is present (including an empty
/// iterator) the result is `None` rather than an error.
///
/// ```
/// use ferrule_seq::NullableSeqExt;
///
/// let samples = [Some(4), None, Some(-2), Some(9)];
/// let range = samples.into_iter().min_max_present().unwrap();
/// assert_eq!(range.into_tuple(), (-2, 9));
///
/// let nothing: [Option<i32>; 2] = [None, None];
/// assert!(nothing.into_iter().min_max_present().is_none());
/// ```
pub trait NullableSeqExt<T>: Iterator<Item = Option<T>> + Sized {
    fn min_present_with<C>(self, cmp: C) -> Option<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        extremum::extremum_by(self.flatten(), cmp, Ordering::Less)
    }

    fn max_present_with<C>(self, cmp: C) -> Option<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        extremum::extremum_by(self.flatten(), cmp, Ordering::Greater)
    }

    fn min_max_present_with<C>(self, cmp: C) -> Option<MinMax<T>>
    where
        T: Clone,
        C: FnMut(&T, &T) -> Ordering,
    {
        extremum::min_max_by(self.flatten(), cmp)
    }

    fn min_max_present(self) -> Option<MinMax<T>>
    where
        T: Numeric,
    {
        self.min_max_present_with(Numeric::compare)
    }

    fn min_present_by<K, F>(self, key: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        extremum::keyed_extremum_by(self.flatten(), key, Ord::cmp, Ordering::Less)
    }

    fn max_present_by<K, F>(self, key: F) -> Option<T>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        extremum::keyed_extremum_by(self.flatten(), key, Ord::cmp, Ordering::Greater)
    }

    fn min_max_present_by<K, F>(self, key: F) -> Option<MinMax<T>>
    where
        T: Clone,
        K: Ord + Clone,
        F: FnMut(&T) -> K,
    {
        extremum::keyed_min_max_by(self.flatten(), key, Ord::cmp)
    }
}

impl<I, T> NullableSeqExt<T> for I where I: Iterator<Item = Option<T>> {}
