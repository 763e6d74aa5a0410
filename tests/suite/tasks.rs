//! Async task helper tests

use std::future;
use std::time::Duration;

use ferrule::Outcome;
use ferrule::config::FerruleConfig;
use ferrule::tasks::{
    TaskError, capture, capture_spawned, ensure_completed, then, with_default_timeout,
    with_timeout, with_timeout_cancellable, with_timeout_or,
};
use futures_util::future::AbortHandle;

use crate::common::init_tracing;

async fn drop_connection() -> u8 {
    panic!("lost connection");
}

#[tokio::test(start_paused = true)]
async fn slow_work_falls_back() {
    init_tracing();
    let slow = async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        "slow"
    };
    assert_eq!(with_timeout_or(slow, Duration::from_secs(1), "fallback").await, "fallback");
}

#[tokio::test(start_paused = true)]
async fn timeout_then_continuation() {
    let fetched = with_timeout(async { Ok::<_, std::io::Error>(41) }, Duration::from_secs(1))
        .await
        .unwrap();
    let result = then(async { fetched }, |n| async move { n + 1 }).await;
    assert_eq!(result.unwrap(), 42);
}

#[tokio::test(start_paused = true)]
async fn configured_default_timeout_applies() {
    let config = FerruleConfig::from_toml_str("[tasks]\ndefault_timeout_ms = 40\n").unwrap();
    let err = with_default_timeout(future::pending::<()>(), &config.tasks)
        .await
        .unwrap_err();
    assert!(err.is_timeout());
}

#[tokio::test]
async fn spawned_failures_are_captured() {
    let panicked = tokio::spawn(drop_connection());
    let outcome = capture_spawned(panicked).await.map_fault(|err| err.to_string());
    assert!(outcome.is_failure());
    assert!(outcome.fault().unwrap().contains("lost connection"));

    let outcome = capture(async { "12".parse::<u8>() }).await;
    assert_eq!(outcome, Outcome::Success(12));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn abort_handle_cancels_across_threads() {
    let (handle, registration) = AbortHandle::new_pair();
    let work = tokio::spawn(with_timeout_cancellable(
        future::pending::<()>(),
        Duration::from_secs(30),
        registration,
    ));
    handle.abort();
    assert!(matches!(work.await.unwrap(), Err(TaskError::Cancelled)));
}

#[tokio::test]
async fn completed_guard_rejects_running_tasks() {
    let mut running = tokio::spawn(future::pending::<u8>());
    assert!(matches!(
        ensure_completed(&mut running, "running"),
        Err(TaskError::NotCompleted { param: "running" })
    ));
    running.abort();

    let mut done = tokio::spawn(async { 8_u8 });
    while !done.is_finished() {
        tokio::task::yield_now().await;
    }
    assert_eq!(ensure_completed(&mut done, "done").unwrap(), 8);
}
