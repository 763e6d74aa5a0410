//! Recording the result of async work as an [`Outcome`].

use std::future::Future;

use ferrule_types::Outcome;
use tokio::task::JoinHandle;

use crate::TaskError;

/// Await `work` and record its result instead of propagating it.
pub async fn capture<F, T, E>(work: F) -> Outcome<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    work.await.into()
}

/// Await a spawned task, recording a panic as [`TaskError::Faulted`] and an
/// aborted task as [`TaskError::Cancelled`].
pub async fn capture_spawned<T>(handle: JoinHandle<T>) -> Outcome<T, TaskError> {
    match handle.await {
        Ok(value) => Outcome::Success(value),
        Err(err) => Outcome::Failure(err.into()),
    }
}
