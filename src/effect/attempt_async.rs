//! Asynchronous Try adapters.
//!
//! These mirror the synchronous adapters for futures. The only suspension
//! point is the await of the wrapped future; a panic raised while it is
//! polled is caught with [`FutureExt::catch_unwind`] and returned as an
//! `Error` once the adapter is awaited.
//!
//! [`Outcome::try_blocking`] and [`Outcome::try_blocking_action`] run a
//! plain closure on tokio's blocking pool. The closure is handed to the pool
//! when the adapter is called, not when it is first polled, and its panic is
//! only observed when the returned future is awaited.
//!
//! # Examples
//!
//! ```rust
//! use fun::control::{FailureKind, Outcome};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let answer = Outcome::try_async(|| async { 42 }).await;
//! assert_eq!(answer, Outcome::value(42));
//!
//! let failed: Outcome<i32> = Outcome::try_async(|| async {
//!     tokio::task::yield_now().await;
//!     panic!("lost connection")
//! })
//! .await;
//! assert_eq!(failed.error_ref().kind(), FailureKind::Panicked);
//! # }
//! ```

use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};

use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::task::JoinError;

use super::attempt::captured;
use crate::control::{Failure, FailureKind, Outcome, Unit};

fn join_failure(error: JoinError) -> Failure {
    if error.is_panic() {
        Failure::from_panic(error.into_panic())
    } else {
        Failure::message(error.to_string()).with_kind(FailureKind::Cancelled)
    }
}

fn runtime_unavailable(error: &tokio::runtime::TryCurrentError) -> Failure {
    Failure::message(error.to_string()).with_kind(FailureKind::RuntimeUnavailable)
}

impl<T> Outcome<T> {
    /// Awaits `future` and returns `Value(x)` where `x` is its output.
    ///
    /// Returns `Error(failure)` if polling `future` panics.
    pub async fn try_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = T>,
    {
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(value) => Self::Value(value),
            Err(payload) => Self::Error(captured(Failure::from_panic(payload))),
        }
    }

    /// Creates a future with `generator`, awaits it and returns `Value(x)`.
    ///
    /// A panic while creating or polling the future becomes `Error(failure)`.
    pub async fn try_async<G, Fut>(generator: G) -> Self
    where
        G: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match catch_unwind(AssertUnwindSafe(generator)) {
            Ok(future) => Self::try_future(future).await,
            Err(payload) => Self::Error(captured(Failure::from_panic(payload))),
        }
    }

    /// Creates a future with `generator`, awaits it and returns its outcome unchanged.
    ///
    /// A panic while creating or polling the future becomes `Error(failure)`.
    pub async fn try_async_outcome<G, Fut>(generator: G) -> Self
    where
        G: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        let future = match catch_unwind(AssertUnwindSafe(generator)) {
            Ok(future) => future,
            Err(payload) => return Self::Error(captured(Failure::from_panic(payload))),
        };
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(payload) => Self::Error(captured(Failure::from_panic(payload))),
        }
    }

    /// Runs `generator` on the blocking thread pool and awaits its value.
    ///
    /// The closure is submitted immediately. A panic inside it becomes
    /// `Error(failure)` when the returned future is awaited. Called outside
    /// a tokio runtime, the future resolves to an error of kind
    /// [`FailureKind::RuntimeUnavailable`] and `generator` is never run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::Outcome;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let pending = Outcome::try_blocking(|| (1..=10).sum::<i32>());
    /// assert_eq!(pending.await, Outcome::value(55));
    /// # }
    /// ```
    pub fn try_blocking<F>(generator: F) -> impl Future<Output = Self> + Send + 'static
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let task = Handle::try_current().map(|handle| handle.spawn_blocking(generator));
        async move {
            match task {
                Ok(handle) => match handle.await {
                    Ok(value) => Self::Value(value),
                    Err(error) => Self::Error(captured(join_failure(error))),
                },
                Err(error) => Self::Error(captured(runtime_unavailable(&error))),
            }
        }
    }

    /// Binds an asynchronous step.
    ///
    /// A failure short-circuits without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::{FailureKind, Outcome};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let missing: Option<fn() -> std::future::Ready<i32>> = None;
    /// let outcome = Outcome::require(missing, "generator")
    ///     .bind_async(Outcome::try_async)
    ///     .await;
    /// assert_eq!(outcome.error_ref().kind(), FailureKind::ArgumentMissing);
    /// # }
    /// ```
    pub async fn bind_async<U, G, Fut>(self, function: G) -> Outcome<U>
    where
        G: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Self::Value(value) => function(value).await,
            Self::Error(failure) => Outcome::Error(failure),
        }
    }
}

impl Outcome<Unit> {
    /// Awaits `future` and returns `Value(Unit)`.
    ///
    /// Returns `Error(failure)` if polling `future` panics.
    pub async fn try_completion<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = ()>,
    {
        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(()) => Self::Value(Unit),
            Err(payload) => Self::Error(captured(Failure::from_panic(payload))),
        }
    }

    /// Creates a future with `generator`, awaits it and returns `Value(Unit)`.
    ///
    /// A panic while creating or polling the future becomes `Error(failure)`.
    pub async fn try_async_action<G, Fut>(generator: G) -> Self
    where
        G: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        match catch_unwind(AssertUnwindSafe(generator)) {
            Ok(future) => Self::try_completion(future).await,
            Err(payload) => Self::Error(captured(Failure::from_panic(payload))),
        }
    }

    /// Runs `action` on the blocking thread pool and returns `Value(Unit)`.
    ///
    /// Behaves like [`Outcome::try_blocking`].
    pub fn try_blocking_action<F>(action: F) -> impl Future<Output = Self> + Send + 'static
    where
        F: FnOnce() + Send + 'static,
    {
        Self::try_blocking(move || {
            action();
            Unit
        })
    }
}
