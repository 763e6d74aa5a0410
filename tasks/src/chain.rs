//! Continuations that only run after a successful antecedent.

use std::future::Future;

use crate::TaskError;

/// Await `antecedent`, then run `continuation` with its value.
///
/// If the antecedent failed, its error is wrapped in [`TaskError::Faulted`]
/// and the continuation never runs.
pub async fn then<A, T, E, F, Fut>(antecedent: A, continuation: F) -> Result<Fut::Output, TaskError>
where
    A: Future<Output = Result<T, E>>,
    E: Into<anyhow::Error>,
    F: FnOnce(T) -> Fut,
    Fut: Future,
{
    let value = antecedent.await.map_err(TaskError::faulted)?;
    Ok(continuation(value).await)
}

/// Like [`then`], for a continuation that can fail itself.
pub async fn and_then<A, T, E, F, Fut, U, E2>(antecedent: A, continuation: F) -> Result<U, TaskError>
where
    A: Future<Output = Result<T, E>>,
    E: Into<anyhow::Error>,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<U, E2>>,
    E2: Into<anyhow::Error>,
{
    let value = antecedent.await.map_err(TaskError::faulted)?;
    continuation(value).await.map_err(TaskError::faulted)
}
