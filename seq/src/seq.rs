//! Extension methods for every iterator.

use std::cmp::Ordering;
use std::hash::Hash;

use ferrule_types::{MinMax, SequenceError};

use crate::extremum::{self, Numeric};
use crate::order::{EqKeys, HashKeys, OrderBySequence};

/// Extension methods available on every [`Iterator`].
///
/// Strict queries (`single`, `min_with`, `min_max`, ...) report cardinality
/// violations as [`SequenceError`]. For the nullable policy, where an empty
/// input yields `None`, see [`NullableSeqExt`](crate::NullableSeqExt).
pub trait SeqExt: Iterator + Sized {
    // ========================================================================
    // Default-valued access
    // ========================================================================

    /// First element, or `default` when the iterator is empty.
    fn first_or(mut self, default: Self::Item) -> Self::Item {
        self.next().unwrap_or(default)
    }

    fn first_or_default(self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.first_or(Self::Item::default())
    }

    /// First element matching `predicate`, or `default`. Stops at the match.
    fn first_where_or<P>(self, mut predicate: P, default: Self::Item) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for item in self {
            if predicate(&item) {
                return item;
            }
        }
        default
    }

    /// Last element, or `default` when the iterator is empty.
    fn last_or(self, default: Self::Item) -> Self::Item {
        self.last().unwrap_or(default)
    }

    fn last_or_default(self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.last_or(Self::Item::default())
    }

    /// Last element matching `predicate`, or `default`. Always traverses to the end.
    fn last_where_or<P>(self, mut predicate: P, default: Self::Item) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        for item in self {
            if predicate(&item) {
                found = Some(item);
            }
        }
        found.unwrap_or(default)
    }

    // ========================================================================
    // Cardinality
    // ========================================================================

    /// The only element, or `default` when empty.
    ///
    /// Fails with [`SequenceError::MoreThanOneElement`] as soon as a second
    /// element is pulled; a third is never requested.
    fn single_or(mut self, default: Self::Item) -> Result<Self::Item, SequenceError> {
        let Some(first) = self.next() else {
            return Ok(default);
        };
        if self.next().is_some() {
            return Err(SequenceError::MoreThanOneElement);
        }
        Ok(first)
    }

    /// The only element matching `predicate`, or `default` when none match.
    ///
    /// Fails with [`SequenceError::MoreThanOneMatch`] on the second match
    /// without pulling further.
    fn single_where_or<P>(
        self,
        mut predicate: P,
        default: Self::Item,
    ) -> Result<Self::Item, SequenceError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        for item in self {
            if predicate(&item) {
                if found.is_some() {
                    return Err(SequenceError::MoreThanOneMatch);
                }
                found = Some(item);
            }
        }
        Ok(found.unwrap_or(default))
    }

    fn single(mut self) -> Result<Self::Item, SequenceError> {
        let first = self.next().ok_or(SequenceError::NoElements)?;
        if self.next().is_some() {
            return Err(SequenceError::MoreThanOneElement);
        }
        Ok(first)
    }

    fn single_where<P>(self, mut predicate: P) -> Result<Self::Item, SequenceError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut found = None;
        for item in self {
            if predicate(&item) {
                if found.is_some() {
                    return Err(SequenceError::MoreThanOneMatch);
                }
                found = Some(item);
            }
        }
        found.ok_or(SequenceError::NoMatch)
    }

    // ========================================================================
    // Position
    // ========================================================================

    /// Zero-based position of the first element matching `predicate`.
    ///
    /// `None` means not found. No element past the match is pulled.
    fn index_of_where<P>(self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        for (index, item) in self.enumerate() {
            if predicate(&item) {
                return Some(index);
            }
        }
        None
    }

    fn index_of(self, target: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.index_of_where(|item| item == target)
    }

    fn index_of_by<E>(self, target: &Self::Item, mut eq: E) -> Option<usize>
    where
        E: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.index_of_where(|item| eq(item, target))
    }

    // ========================================================================
    // Extremes
    // ========================================================================

    /// Minimum under `cmp`; the first such element on ties.
    fn min_with<C>(self, cmp: C) -> Result<Self::Item, SequenceError>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extremum::extremum_by(self, cmp, Ordering::Less).ok_or(SequenceError::NoElements)
    }

    /// Maximum under `cmp`; the first such element on ties.
    fn max_with<C>(self, cmp: C) -> Result<Self::Item, SequenceError>
    where
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extremum::extremum_by(self, cmp, Ordering::Greater).ok_or(SequenceError::NoElements)
    }

    /// Both extremes under `cmp` in a single pass.
    fn min_max_with<C>(self, cmp: C) -> Result<MinMax<Self::Item>, SequenceError>
    where
        Self::Item: Clone,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        extremum::min_max_by(self, cmp).ok_or(SequenceError::NoElements)
    }

    /// Both extremes of a primitive numeric sequence in a single pass.
    fn min_max(self) -> Result<MinMax<Self::Item>, SequenceError>
    where
        Self::Item: Numeric,
    {
        self.min_max_with(Numeric::compare)
    }

    /// Element with the smallest selected key.
    fn min_item_by<K, F>(self, key: F) -> Result<Self::Item, SequenceError>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.min_item_by_with(key, Ord::cmp)
    }

    /// Element with the largest selected key.
    fn max_item_by<K, F>(self, key: F) -> Result<Self::Item, SequenceError>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.max_item_by_with(key, Ord::cmp)
    }

    /// Elements with the smallest and largest selected keys.
    fn min_max_item_by<K, F>(self, key: F) -> Result<MinMax<Self::Item>, SequenceError>
    where
        Self::Item: Clone,
        K: Ord + Clone,
        F: FnMut(&Self::Item) -> K,
    {
        self.min_max_item_by_with(key, Ord::cmp)
    }

    fn min_item_by_with<K, F, C>(self, key: F, cmp: C) -> Result<Self::Item, SequenceError>
    where
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        extremum::keyed_extremum_by(self, key, cmp, Ordering::Less)
            .ok_or(SequenceError::NoElements)
    }

    fn max_item_by_with<K, F, C>(self, key: F, cmp: C) -> Result<Self::Item, SequenceError>
    where
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        extremum::keyed_extremum_by(self, key, cmp, Ordering::Greater)
            .ok_or(SequenceError::NoElements)
    }

    fn min_max_item_by_with<K, F, C>(
        self,
        key: F,
        cmp: C,
    ) -> Result<MinMax<Self::Item>, SequenceError>
    where
        Self::Item: Clone,
        K: Clone,
        F: FnMut(&Self::Item) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        extremum::keyed_min_max_by(self, key, cmp).ok_or(SequenceError::NoElements)
    }

    // ========================================================================
    // Reference ordering
    // ========================================================================

    /// Reorder this sequence to follow `order`.
    ///
    /// For each element of `order`, in order, yields `result(source, order)`
    /// for every source element whose key equals the order element's key,
    /// in source order. Source elements without a matching order element are
    /// dropped. Keys are grouped with `Hash + Eq`.
    ///
    /// ```
    /// use ferrule_seq::SeqExt;
    ///
    /// let rows = [("b", 2), ("a", 1), ("c", 3)];
    /// let wanted = ["a", "c"];
    /// let ordered: Vec<i32> = rows
    ///     .into_iter()
    ///     .order_by_sequence(wanted, |row| row.0, |name| *name, |row, _| row.1)
    ///     .collect();
    /// assert_eq!(ordered, vec![1, 3]);
    /// ```
    fn order_by_sequence<O, K, FS, FO, FR, R>(
        self,
        order: O,
        source_key: FS,
        order_key: FO,
        result: FR,
    ) -> OrderBySequence<Self, O::IntoIter, FS, FO, FR, HashKeys<K>>
    where
        O: IntoIterator,
        K: Hash + Eq,
        FS: FnMut(&Self::Item) -> K,
        FO: FnMut(&O::Item) -> K,
        FR: FnMut(&Self::Item, &O::Item) -> R,
    {
        OrderBySequence::new(
            self,
            order.into_iter(),
            source_key,
            order_key,
            result,
            HashKeys::default(),
        )
    }

    /// Like [`order_by_sequence`](SeqExt::order_by_sequence), matching keys with `eq`.
    fn order_by_sequence_with<O, K, FS, FO, FR, R, E>(
        self,
        order: O,
        source_key: FS,
        order_key: FO,
        result: FR,
        eq: E,
    ) -> OrderBySequence<Self, O::IntoIter, FS, FO, FR, EqKeys<K, E>>
    where
        O: IntoIterator,
        FS: FnMut(&Self::Item) -> K,
        FO: FnMut(&O::Item) -> K,
        FR: FnMut(&Self::Item, &O::Item) -> R,
        E: Fn(&K, &K) -> bool,
    {
        OrderBySequence::new(
            self,
            order.into_iter(),
            source_key,
            order_key,
            result,
            EqKeys::new(eq),
        )
    }
}

impl<I: Iterator> SeqExt for I {}
