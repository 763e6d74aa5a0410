//! Single-pass extremum search shared by the strict and nullable traits.
//!
//! Ties keep the first-seen element: a candidate only replaces the current
//! best when it compares strictly past it.

use std::cmp::Ordering;

use ferrule_types::MinMax;

/// Primitive numeric types with a total order suitable for extremum queries.
///
/// Integers use their natural order. Floats order `NaN` below every other
/// value, so a `NaN` input is always the minimum and only the maximum when
/// every input is `NaN`.
pub trait Numeric: Copy {
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! numeric_int {
    ($($ty:ty),+) => {
        $(
            impl Numeric for $ty {
                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )+
    };
}

macro_rules! numeric_float {
    ($($ty:ty),+) => {
        $(
            impl Numeric for $ty {
                fn compare(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
                    }
                }
            }
        )+
    };
}

numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
numeric_float!(f32, f64);

/// Element that compares `want` against every other element (first on ties).
pub(crate) fn extremum_by<I, C>(mut iter: I, mut cmp: C, want: Ordering) -> Option<I::Item>
where
    I: Iterator,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut best = iter.next()?;
    for item in iter {
        if cmp(&item, &best) == want {
            best = item;
        }
    }
    Some(best)
}

pub(crate) fn min_max_by<I, C>(mut iter: I, mut cmp: C) -> Option<MinMax<I::Item>>
where
    I: Iterator,
    I::Item: Clone,
    C: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let first = iter.next()?;
    let mut pair = MinMax::splat(first);
    for item in iter {
        if cmp(&item, &pair.min) == Ordering::Less {
            pair.min = item;
        } else if cmp(&item, &pair.max) == Ordering::Greater {
            pair.max = item;
        }
    }
    Some(pair)
}

/// Like [`extremum_by`], comparing selected keys. Each key is computed once.
pub(crate) fn keyed_extremum_by<I, K, F, C>(
    mut iter: I,
    mut key: F,
    mut cmp: C,
    want: Ordering,
) -> Option<I::Item>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    let mut best = iter.next()?;
    let mut best_key = key(&best);
    for item in iter {
        let item_key = key(&item);
        if cmp(&item_key, &best_key) == want {
            best = item;
            best_key = item_key;
        }
    }
    Some(best)
}

pub(crate) fn keyed_min_max_by<I, K, F, C>(
    mut iter: I,
    mut key: F,
    mut cmp: C,
) -> Option<MinMax<I::Item>>
where
    I: Iterator,
    I::Item: Clone,
    K: Clone,
    F: FnMut(&I::Item) -> K,
    C: FnMut(&K, &K) -> Ordering,
{
    let first = iter.next()?;
    let mut keys = MinMax::splat(key(&first));
    let mut pair = MinMax::splat(first);
    for item in iter {
        let item_key = key(&item);
        if cmp(&item_key, &keys.min) == Ordering::Less {
            pair.min = item;
            keys.min = item_key;
        } else if cmp(&item_key, &keys.max) == Ordering::Greater {
            pair.max = item;
            keys.max = item_key;
        }
    }
    Some(pair)
}
