//! Core value and error types for Ferrule.
//!
//! This crate contains pure types with no IO, no async, and minimal dependencies.
//! Every other Ferrule crate builds on it:
//!
//! - **`error`**: Guard and sequence cardinality errors
//! - **`outcome`**: Tagged success/failure value
//! - **`minmax`**: Minimum/maximum pair produced by single-pass extremum queries
//! - **`defined`**: Raw-discriminant to enum mapping used by the `defined` guard

#![allow(clippy::missing_errors_doc)]

mod defined;
mod error;
mod minmax;
mod outcome;

pub use defined::DefinedEnum;
pub use error::{GuardError, SequenceError};
pub use minmax::MinMax;
pub use outcome::{InactiveBranch, Outcome};
