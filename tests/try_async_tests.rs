#![cfg(feature = "async")]
//! Integration tests for the asynchronous Try adapters.
//!
//! Tests cover:
//! - futures that complete, fail or panic after suspension
//! - async actions and outcome pass-through
//! - eager offload of plain closures to the blocking pool
//! - missing generators bound through `bind_async`

use fun::control::{FailureKind, Outcome, Unit};
use fun::effect::is_captured_panic;
use rstest::rstest;
use std::future::Ready;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::time::Duration;

// =============================================================================
// Async Generators
// =============================================================================

#[rstest]
#[tokio::test]
async fn try_async_returns_value() {
    let outcome = Outcome::try_async(|| async {
        tokio::task::yield_now().await;
        "loaded"
    })
    .await;
    assert_eq!(outcome, Outcome::value("loaded"));
}

#[rstest]
#[tokio::test]
async fn try_async_captures_panic_after_suspension() {
    let polled = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&polled);
    let pending = Outcome::<i32>::try_async(move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        panic!("connection reset")
    });

    assert_eq!(polled.load(Ordering::SeqCst), 0);

    let outcome = pending.await;
    assert!(is_captured_panic(&outcome));
    assert_eq!(outcome.error_ref().message_text(), "connection reset");
    assert_eq!(polled.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn try_future_accepts_an_existing_future() {
    let future = async { 2 + 2 };
    assert_eq!(Outcome::try_future(future).await, Outcome::value(4));
}

#[rstest]
#[tokio::test]
async fn try_async_outcome_does_not_double_wrap() {
    let outcome: Outcome<i32> = Outcome::try_async_outcome(|| async { Outcome::value(5) }).await;
    assert_eq!(outcome, Outcome::value(5));
}

#[rstest]
#[tokio::test]
async fn try_async_outcome_captures_panic() {
    let outcome: Outcome<i32> = Outcome::try_async_outcome(|| async {
        tokio::task::yield_now().await;
        panic!("inside outcome future")
    })
    .await;
    assert!(is_captured_panic(&outcome));
}

// =============================================================================
// Async Actions
// =============================================================================

#[rstest]
#[tokio::test]
async fn try_async_action_returns_unit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let outcome = Outcome::try_async_action(move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .await;
    assert_eq!(outcome, Outcome::value(Unit));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn try_completion_captures_panic() {
    let outcome = Outcome::try_completion(async {
        tokio::task::yield_now().await;
        panic!("flush failed");
    })
    .await;
    assert_eq!(outcome.error_ref().message_text(), "flush failed");
}

// =============================================================================
// Blocking Offload
// =============================================================================

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn try_blocking_starts_before_await() {
    let (sender, receiver) = mpsc::channel();
    let pending = Outcome::<i32>::try_blocking(move || {
        sender.send(()).unwrap();
        panic!("background failure")
    });

    receiver
        .recv_timeout(Duration::from_secs(5))
        .expect("blocking closure should start without being awaited");

    let outcome = pending.await;
    assert!(is_captured_panic(&outcome));
    assert_eq!(outcome.error_ref().message_text(), "background failure");
}

#[rstest]
#[tokio::test]
async fn try_blocking_returns_value() {
    let outcome = Outcome::try_blocking(|| {
        std::thread::sleep(Duration::from_millis(5));
        "computed"
    })
    .await;
    assert_eq!(outcome, Outcome::value("computed"));
}

#[rstest]
#[tokio::test]
async fn try_blocking_action_returns_unit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let outcome = Outcome::try_blocking_action(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .await;
    assert_eq!(outcome, Outcome::value(Unit));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn try_blocking_without_runtime_never_runs_closure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let pending = Outcome::try_blocking(move || counter.fetch_add(1, Ordering::SeqCst));
    let outcome = futures::executor::block_on(pending);
    assert_eq!(outcome.error_ref().kind(), FailureKind::RuntimeUnavailable);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Missing Generators
// =============================================================================

#[rstest]
#[tokio::test]
async fn missing_async_generator_is_an_error_value() {
    let generator: Option<fn() -> Ready<i32>> = None;
    let outcome = Outcome::require(generator, "generator")
        .bind_async(Outcome::try_async)
        .await;
    assert_eq!(outcome.error_ref().kind(), FailureKind::ArgumentMissing);
}

#[rstest]
#[tokio::test]
async fn supplied_async_generator_is_run() {
    let generator: Option<fn() -> Ready<i32>> = Some(|| std::future::ready(8));
    let outcome = Outcome::require(generator, "generator")
        .bind_async(Outcome::try_async)
        .await;
    assert_eq!(outcome, Outcome::value(8));
}

#[rstest]
#[tokio::test]
async fn missing_blocking_generator_is_an_error_value() {
    let generator: Option<fn() -> i32> = None;
    let outcome = Outcome::require(generator, "generator")
        .bind_async(Outcome::try_blocking)
        .await;
    assert_eq!(outcome.error_ref().kind(), FailureKind::ArgumentMissing);
}
