//! Iterator extension traits.
//!
//! [`SeqExt`] is implemented for every [`Iterator`] and covers default-valued
//! element access, cardinality checks, position lookup, extremum queries with
//! custom comparers, and [`OrderBySequence`]. [`NullableSeqExt`] covers
//! iterators of `Option<T>`, where absent items are skipped and an empty input
//! yields `None` instead of an error.
//!
//! All helpers pull lazily and stop as soon as their answer is known.
//!
//! ```
//! use ferrule_seq::SeqExt;
//!
//! let readings = [3, 9, 1, 9, 4];
//! assert_eq!(readings.iter().index_of(&&9), Some(1));
//! let range = readings.into_iter().min_max().unwrap();
//! assert_eq!((range.min, range.max), (1, 9));
//! ```

mod extremum;
mod nullable;
mod order;
mod seq;

pub use extremum::Numeric;
pub use ferrule_types::{MinMax, SequenceError};
pub use nullable::NullableSeqExt;
pub use order::{EqKeys, HashKeys, KeyIndex, OrderBySequence};
pub use seq::SeqExt;
