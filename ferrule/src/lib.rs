//! Ferrule: small helpers shared across services.
//!
//! This crate re-exports the workspace members under one roof:
//!
//! - **`guard`**: Argument guards that return their input or a [`GuardError`]
//! - **`counter`**: Lock-free 32/64-bit counters
//! - **`seq`**: Iterator extensions for defaults, extremes and keyed reordering
//! - **`tasks`**: Outcome capture, continuations, timeouts and cancellation
//! - **`tuple`**: Homogeneous tuples as iterators
//! - **`config`**: Settings loaded from `~/.ferrule/config.toml`
//!
//! ```
//! use ferrule::prelude::*;
//!
//! let extremes = [4, -2, 9].into_iter().min_max().unwrap();
//! assert_eq!(extremes.into_tuple(), (-2, 9));
//! assert_eq!((1, 2, 3).into_seq().index_of(&3), Some(2));
//! ```

pub use ferrule_config as config;
pub use ferrule_seq as seq;
pub use ferrule_tasks as tasks;
pub use ferrule_types as types;
pub use ferrule_utils::{counter, guard, tuple};

pub use ferrule_types::{GuardError, MinMax, Outcome, SequenceError};

/// Extension traits, for glob import.
pub mod prelude {
    pub use ferrule_seq::{NullableSeqExt, SeqExt};
    pub use ferrule_utils::TupleSeq;
}
