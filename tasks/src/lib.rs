//! Async task helpers.
//!
//! Thin wrappers over tokio and `futures-util` that turn task faults,
//! timeouts and cancellation into values:
//!
//! - **`capture`**: Await work and record its result as an [`Outcome`]
//! - **`chain`**: Run a continuation only when the antecedent succeeded
//! - **`race`**: Bound work by a timeout or an abort signal
//! - **`guard`**: Require a spawned task to have completed without faulting
//!
//! Nothing here spawns background work or installs a runtime; callers drive
//! every future.

mod capture;
mod chain;
mod error;
mod guard;
mod race;

pub use capture::{capture, capture_spawned};
pub use chain::{and_then, then};
pub use error::TaskError;
pub use ferrule_types::Outcome;
pub use guard::ensure_completed;
pub use race::{
    cancellable, with_default_timeout, with_timeout, with_timeout_cancellable, with_timeout_or,
    with_timeout_or_else,
};
