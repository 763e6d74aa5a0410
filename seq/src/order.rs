//! Reordering a sequence to follow an external reference sequence.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Lookup from a key to the index of its source group.
pub trait KeyIndex<K> {
    fn find(&self, key: &K) -> Option<usize>;

    /// Record `key` as the key of group `group`. Called once per distinct key.
    fn insert(&mut self, key: K, group: usize);
}

/// Groups keys by `Hash + Eq`.
#[derive(Debug)]
pub struct HashKeys<K>(HashMap<K, usize>);

impl<K> Default for HashKeys<K> {
    fn default() -> Self {
        Self(HashMap::new())
    }
}

impl<K: Hash + Eq> KeyIndex<K> for HashKeys<K> {
    fn find(&self, key: &K) -> Option<usize> {
        self.0.get(key).copied()
    }

    fn insert(&mut self, key: K, group: usize) {
        self.0.insert(key, group);
    }
}

/// Groups keys with a caller-supplied equality function. Lookups are linear
/// in the number of distinct keys.
pub struct EqKeys<K, E> {
    keys: Vec<K>,
    eq: E,
}

impl<K, E> EqKeys<K, E> {
    pub fn new(eq: E) -> Self {
        Self {
            keys: Vec::new(),
            eq,
        }
    }
}

impl<K: fmt::Debug, E> fmt::Debug for EqKeys<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqKeys")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

impl<K, E> KeyIndex<K> for EqKeys<K, E>
where
    E: Fn(&K, &K) -> bool,
{
    fn find(&self, key: &K) -> Option<usize> {
        self.keys.iter().position(|known| (self.eq)(known, key))
    }

    fn insert(&mut self, key: K, group: usize) {
        debug_assert_eq!(group, self.keys.len());
        self.keys.push(key);
    }
}

/// Iterator returned by [`SeqExt::order_by_sequence`](crate::SeqExt::order_by_sequence).
///
/// The source is grouped by key on the first call to `next`; the order
/// sequence is then pulled one element at a time. Each order element yields
/// one result per source element in its group, so repeated order keys repeat
/// their matches and unmatched keys yield nothing.
pub struct OrderBySequence<S, O, FS, FO, FR, X>
where
    S: Iterator,
    O: Iterator,
{
    pending: Option<(S, FS)>,
    groups: Vec<Vec<S::Item>>,
    index: X,
    order: O,
    order_key: FO,
    result: FR,
    /// Order element being expanded, its group, and the next position in it.
    current: Option<(O::Item, usize, usize)>,
}

impl<S, O, FS, FO, FR, X> OrderBySequence<S, O, FS, FO, FR, X>
where
    S: Iterator,
    O: Iterator,
{
    pub(crate) fn new(
        source: S,
        order: O,
        source_key: FS,
        order_key: FO,
        result: FR,
        index: X,
    ) -> Self {
        Self {
            pending: Some((source, source_key)),
            groups: Vec::new(),
            index,
            order,
            order_key,
            result,
            current: None,
        }
    }
}

impl<S, O, K, FS, FO, FR, R, X> Iterator for OrderBySequence<S, O, FS, FO, FR, X>
where
    S: Iterator,
    O: Iterator,
    FS: FnMut(&S::Item) -> K,
    FO: FnMut(&O::Item) -> K,
    FR: FnMut(&S::Item, &O::Item) -> R,
    X: KeyIndex<K>,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if let Some((source, mut source_key)) = self.pending.take() {
            for item in source {
                let key = source_key(&item);
                match self.index.find(&key) {
                    Some(group) => self.groups[group].push(item),
                    None => {
                        self.index.insert(key, self.groups.len());
                        self.groups.push(vec![item]);
                    }
                }
            }
        }
        if self.groups.is_empty() {
            return None;
        }

        loop {
            if let Some((order_item, group, position)) = &mut self.current {
                if let Some(item) = self.groups[*group].get(*position) {
                    *position += 1;
                    return Some((self.result)(item, order_item));
                }
                self.current = None;
            }

            let order_item = self.order.next()?;
            let key = (self.order_key)(&order_item);
            if let Some(group) = self.index.find(&key) {
                self.current = Some((order_item, group, 0));
            }
        }
    }
}
