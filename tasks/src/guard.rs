use futures_util::FutureExt;
use tokio::task::JoinHandle;

use crate::TaskError;

/// Take the output of a task that must already have finished.
///
/// A task still running is reported as [`TaskError::NotCompleted`] and the
/// handle is left untouched, so the caller can keep waiting on it. A task
/// that panicked or was aborted is reported the same way
/// [`capture_spawned`](crate::capture_spawned) would.
///
/// On any other result the output has been taken; the handle must not be
/// polled again.
pub fn ensure_completed<T>(
    handle: &mut JoinHandle<T>,
    param: &'static str,
) -> Result<T, TaskError> {
    if !handle.is_finished() {
        tracing::trace!("Task passed as '{param}' is still running");
        return Err(TaskError::NotCompleted { param });
    }

    // A finished task must be readable even when the caller has spent its
    // cooperative budget.
    match tokio::task::unconstrained(&mut *handle).now_or_never() {
        Some(Ok(value)) => Ok(value),
        Some(Err(err)) => Err(err.into()),
        None => Err(TaskError::NotCompleted { param }),
    }
}
