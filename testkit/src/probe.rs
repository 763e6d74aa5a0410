//! Iterator probes for asserting how lazily a consumer pulls.

use std::cell::Cell;
use std::rc::Rc;

/// Iterator that panics when pulled more than `budget` times.
///
/// Wrap an input with it to prove a consumer stops early:
///
/// ```
/// use ferrule_testkit::ExplodingIter;
///
/// let mut iter = ExplodingIter::new(1.., 3);
/// assert_eq!(iter.position(|n| n == 3), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct ExplodingIter<I> {
    inner: I,
    budget: usize,
    pulled: usize,
}

impl<I> ExplodingIter<I> {
    pub fn new(inner: I, budget: usize) -> Self {
        Self {
            inner,
            budget,
            pulled: 0,
        }
    }
}

impl<I: Iterator> Iterator for ExplodingIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        assert!(
            self.pulled < self.budget,
            "iterator pulled past its budget of {} elements",
            self.budget
        );
        self.pulled += 1;
        self.inner.next()
    }
}

/// Shared view of how many times a [`CountingIter`] was pulled.
#[derive(Debug, Clone, Default)]
pub struct PullCount(Rc<Cell<usize>>);

impl PullCount {
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Iterator that counts calls to `next`, including the final `None`.
#[derive(Debug, Clone)]
pub struct CountingIter<I> {
    inner: I,
    count: PullCount,
}

impl<I> CountingIter<I> {
    /// Wrap `inner`, returning the iterator and a handle to its pull count.
    pub fn new(inner: I) -> (Self, PullCount) {
        let count = PullCount::default();
        let iter = Self {
            inner,
            count: count.clone(),
        };
        (iter, count)
    }
}

impl<I: Iterator> Iterator for CountingIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.count.0.set(self.count.0.get() + 1);
        self.inner.next()
    }
}
