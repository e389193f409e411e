//! Synchronous Try adapters.
//!
//! Each adapter runs a computation once, inside a single
//! `catch_unwind` boundary, and returns an [`Outcome`]:
//!
//! - a returned value becomes `Value(value)`
//! - a returned `Outcome` is passed through unchanged
//! - an action becomes `Value(Unit)`
//! - a panic becomes `Error(failure)` with [`FailureKind::Panicked`]
//!
//! The panic is never resumed, so nothing unwinds past the adapter. The
//! process-wide panic hook still runs and reports the panic as usual.
//!
//! # Examples
//!
//! ```rust
//! use fun::control::{FailureKind, Outcome, Unit};
//!
//! assert_eq!(Outcome::try_value(|| 42), Outcome::value(42));
//!
//! let failed: Outcome<i32> = Outcome::try_value(|| panic!("no answer"));
//! assert_eq!(failed.error_ref().kind(), FailureKind::Panicked);
//! assert_eq!(failed.error_ref().message_text(), "no answer");
//!
//! assert_eq!(Outcome::try_action(|| {}), Outcome::value(Unit));
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::control::{Failure, FailureKind, Outcome, Unit};

/// Records a computation that ended in a failure at a Try boundary.
pub(crate) fn captured(failure: Failure) -> Failure {
    tracing::debug!(
        kind = %failure.kind(),
        message = failure.message_text(),
        "computation failed inside try adapter"
    );
    failure
}

impl<T> Outcome<T> {
    /// Calls `generator` and returns `Value(x)` where `x` is what it returned.
    ///
    /// Returns `Error(failure)` if `generator` panics.
    pub fn try_value<F>(generator: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(generator)) {
            Ok(value) => Self::Value(value),
            Err(payload) => Self::Error(captured(Failure::from_panic(payload))),
        }
    }

    /// Calls `generator` and returns its outcome unchanged.
    ///
    /// Returns `Error(failure)` if `generator` panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::Outcome;
    ///
    /// let passed = Outcome::try_outcome(|| Outcome::<i32>::fail("already failed"));
    /// assert_eq!(passed, Outcome::fail("already failed"));
    /// ```
    pub fn try_outcome<F>(generator: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match catch_unwind(AssertUnwindSafe(generator)) {
            Ok(outcome) => outcome,
            Err(payload) => Self::Error(captured(Failure::from_panic(payload))),
        }
    }

    /// Calls a fallible `generator`.
    ///
    /// `Ok(x)` becomes `Value(x)`. `Err(e)` becomes an error whose cause is
    /// `e`, and a panic becomes an error as in [`Outcome::try_value`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::{FailureKind, Outcome};
    /// use std::num::ParseIntError;
    ///
    /// let parsed = Outcome::try_result(|| "12".parse::<i32>());
    /// assert_eq!(parsed, Outcome::value(12));
    ///
    /// let failed = Outcome::try_result(|| "twelve".parse::<i32>());
    /// assert_eq!(failed.error_ref().kind(), FailureKind::Raised);
    /// assert!(failed.error_ref().downcast_ref::<ParseIntError>().is_some());
    /// ```
    pub fn try_result<F, E>(generator: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        match catch_unwind(AssertUnwindSafe(generator)) {
            Ok(Ok(value)) => Self::Value(value),
            Ok(Err(error)) => Self::Error(captured(Failure::from_error(error))),
            Err(payload) => Self::Error(captured(Failure::from_panic(payload))),
        }
    }
}

impl Outcome<Unit> {
    /// Calls `action` and returns `Value(Unit)`.
    ///
    /// Returns `Error(failure)` if `action` panics.
    pub fn try_action<F>(action: F) -> Self
    where
        F: FnOnce(),
    {
        match catch_unwind(AssertUnwindSafe(action)) {
            Ok(()) => Self::Value(Unit),
            Err(payload) => Self::Error(captured(Failure::from_panic(payload))),
        }
    }
}

/// Returns `true` if `outcome` failed because a panic was captured.
#[inline]
pub fn is_captured_panic<T>(outcome: &Outcome<T>) -> bool {
    matches!(outcome, Outcome::Error(failure) if failure.kind() == FailureKind::Panicked)
}
