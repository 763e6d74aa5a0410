//! Lock-free atomic counters.
//!
//! Every mutation is a single atomic read-modify-write (`fetch_add`,
//! `fetch_sub`, `swap`), so concurrent updates are never lost. Arithmetic
//! wraps on overflow.
//!
//! ```
//! use ferrule_utils::AtomicCounter64;
//!
//! let hits = AtomicCounter64::new(10);
//! hits.increment().increment().add(5);
//! assert_eq!(hits.value(), 17);
//! assert_eq!(hits.exchange_increment(), 17);
//! assert_eq!(hits.reset(0), 18);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicI32, AtomicI64, Ordering};

macro_rules! atomic_counter {
    ($(#[$meta:meta])* $name:ident, $int:ty, $atomic:ty) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            value: $atomic,
        }

        impl $name {
            #[must_use]
            pub const fn new(initial: $int) -> Self {
                Self {
                    value: <$atomic>::new(initial),
                }
            }

            /// Current value. Observes the latest write from any thread.
            #[must_use]
            pub fn value(&self) -> $int {
                self.value.load(Ordering::Acquire)
            }

            pub fn increment(&self) -> &Self {
                self.value.fetch_add(1, Ordering::AcqRel);
                self
            }

            pub fn decrement(&self) -> &Self {
                self.value.fetch_sub(1, Ordering::AcqRel);
                self
            }

            pub fn add(&self, delta: $int) -> &Self {
                self.value.fetch_add(delta, Ordering::AcqRel);
                self
            }

            /// Increment and return the value held before the increment.
            pub fn exchange_increment(&self) -> $int {
                self.value.fetch_add(1, Ordering::AcqRel)
            }

            /// Decrement and return the value held before the decrement.
            pub fn exchange_decrement(&self) -> $int {
                self.value.fetch_sub(1, Ordering::AcqRel)
            }

            /// Store a new base value and return the previous one.
            pub fn reset(&self, base: $int) -> $int {
                let previous = self.value.swap(base, Ordering::AcqRel);
                tracing::trace!(previous, base, "Counter reset");
                previous
            }

            #[must_use]
            pub fn into_inner(self) -> $int {
                self.value.into_inner()
            }
        }

        impl From<$int> for $name {
            fn from(initial: $int) -> Self {
                Self::new(initial)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.value())
            }
        }
    };
}

atomic_counter!(
    /// 32-bit signed atomic counter.
    AtomicCounter32,
    i32,
    AtomicI32
);

atomic_counter!(
    /// 64-bit signed atomic counter.
    AtomicCounter64,
    i64,
    AtomicI64
);
