//! Shared helpers for Ferrule.
//!
//! - **`guard`**: Argument validation returning typed [`GuardError`]s
//! - **`counter`**: Lock-free 32/64-bit atomic counters
//! - **`tuple`**: Homogeneous tuple to iterator adapters

pub mod counter;
pub mod guard;
pub mod tuple;

pub use counter::{AtomicCounter32, AtomicCounter64};
pub use ferrule_types::GuardError;
pub use guard::{
    defined, ensure, in_range, in_range_by, not_empty, not_empty_slice, not_nil_uuid, not_null,
    not_null_or_empty, not_null_or_whitespace, not_whitespace,
};
pub use tuple::TupleSeq;
