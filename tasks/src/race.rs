//! Racing work against a timer or an abort signal.
//!
//! The losing side of a race is dropped as soon as the race is decided; no
//! timer outlives the call.

use std::future::Future;
use std::time::Duration;

use ferrule_config::TaskConfig;
use futures_util::future::{AbortRegistration, Abortable};

use crate::TaskError;

/// Await `work`, giving up with [`TaskError::TimedOut`] after `timeout`.
pub async fn with_timeout<F>(work: F, timeout: Duration) -> Result<F::Output, TaskError>
where
    F: Future,
{
    match tokio::time::timeout(timeout, work).await {
        Ok(value) => Ok(value),
        Err(_elapsed) => {
            tracing::debug!("Task timed out after {timeout:?}");
            Err(TaskError::TimedOut { after: timeout })
        }
    }
}

/// Await `work`, returning `fallback` if it does not finish within `timeout`.
pub async fn with_timeout_or<F>(work: F, timeout: Duration, fallback: F::Output) -> F::Output
where
    F: Future,
{
    with_timeout(work, timeout).await.unwrap_or(fallback)
}

/// Like [`with_timeout_or`], computing the fallback only when the timer wins.
pub async fn with_timeout_or_else<F, D>(work: F, timeout: Duration, fallback: D) -> F::Output
where
    F: Future,
    D: FnOnce() -> F::Output,
{
    with_timeout(work, timeout).await.unwrap_or_else(|_| fallback())
}

/// [`with_timeout`] bounded by the configured default timeout.
pub async fn with_default_timeout<F>(work: F, config: &TaskConfig) -> Result<F::Output, TaskError>
where
    F: Future,
{
    with_timeout(work, config.default_timeout()).await
}

/// Await `work` until it finishes or the paired `AbortHandle` fires.
///
/// ```
/// use futures_util::future::AbortHandle;
/// use ferrule_tasks::{TaskError, cancellable};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (handle, registration) = AbortHandle::new_pair();
/// handle.abort();
/// let result = cancellable(async { 1 }, registration).await;
/// assert!(matches!(result, Err(TaskError::Cancelled)));
/// # }
/// ```
pub async fn cancellable<F>(work: F, registration: AbortRegistration) -> Result<F::Output, TaskError>
where
    F: Future,
{
    Abortable::new(work, registration).await.map_err(|_aborted| {
        tracing::debug!("Task cancelled before completion");
        TaskError::Cancelled
    })
}

/// Await `work` under both a timeout and an abort signal, whichever fires first.
pub async fn with_timeout_cancellable<F>(
    work: F,
    timeout: Duration,
    registration: AbortRegistration,
) -> Result<F::Output, TaskError>
where
    F: Future,
{
    with_timeout(cancellable(work, registration), timeout).await?
}
