use std::any::Any;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task faulted: {source:#}")]
    Faulted { source: anyhow::Error },
    #[error("task timed out after {after:?}")]
    TimedOut { after: Duration },
    #[error("task was cancelled")]
    Cancelled,
    #[error("task passed as '{param}' has not completed")]
    NotCompleted { param: &'static str },
}

impl TaskError {
    pub(crate) fn faulted(source: impl Into<anyhow::Error>) -> Self {
        let source = source.into();
        tracing::debug!("Task faulted: {source:#}");
        TaskError::Faulted { source }
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, TaskError::TimedOut { .. })
    }
}

impl From<JoinError> for TaskError {
    fn from(err: JoinError) -> Self {
        match err.try_into_panic() {
            Ok(payload) => {
                let message = panic_message(payload.as_ref());
                TaskError::faulted(anyhow::anyhow!("task panicked: {message}"))
            }
            Err(err) => {
                tracing::debug!("Spawned task ended without output: {err}");
                TaskError::Cancelled
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }
    "non-string panic payload".to_string()
}
