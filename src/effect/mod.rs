//! Try adapters and query syntax.
//!
//! # Try adapters
//!
//! The adapters are associated functions of [`Outcome`]. Each one runs a
//! computation exactly once and turns every way it can end into an
//! `Outcome` value:
//!
//! | Computation                          | Adapter                         | Feature |
//! |--------------------------------------|---------------------------------|---------|
//! | `FnOnce() -> T`                      | `Outcome::try_value`            | effect  |
//! | `FnOnce() -> Outcome<T>`             | `Outcome::try_outcome`          | effect  |
//! | `FnOnce() -> Result<T, E>`           | `Outcome::try_result`           | effect  |
//! | `FnOnce()`                           | `Outcome::try_action`           | effect  |
//! | `FnOnce() -> impl Future<Output = T>` | `Outcome::try_async`           | async   |
//! | `impl Future<Output = T>`            | `Outcome::try_future`           | async   |
//! | `FnOnce() -> impl Future<Output = Outcome<T>>` | `Outcome::try_async_outcome` | async |
//! | `FnOnce() -> impl Future<Output = ()>` | `Outcome::try_async_action`   | async   |
//! | `impl Future<Output = ()>`           | `Outcome::try_completion`       | async   |
//! | `FnOnce() -> T + Send` (blocking)    | `Outcome::try_blocking`         | async   |
//! | `FnOnce() + Send` (blocking)         | `Outcome::try_blocking_action`  | async   |
//!
//! A panic becomes an error of kind
//! [`FailureKind::Panicked`](crate::control::FailureKind::Panicked); an `Err`
//! returned by `try_result` becomes an error of kind `Raised` whose cause is
//! the original error.
//!
//! A generator that may be missing is validated with [`Outcome::require`]
//! and then bound into the adapter:
//!
//! ```rust
//! use fun::control::{FailureKind, Outcome};
//!
//! let generator: Option<fn() -> i32> = None;
//! let outcome = Outcome::require(generator, "generator").bind(Outcome::try_value);
//! assert_eq!(outcome.error_ref().kind(), FailureKind::ArgumentMissing);
//! ```
//!
//! # Query syntax
//!
//! The [`query!`](crate::query) macro writes dependent steps as a flat
//! sequence:
//!
//! - `pattern <= expression;` binds the value of a container
//! - `let pattern = expression;` is a plain let binding
//! - `yield expression` lifts the final value into the container
//! - a final bare expression must already be a container
//!
//! ```rust
//! use fun::control::Opt;
//! use fun::query;
//!
//! let sum = query! {
//!     x <= Opt::some(1);
//!     y <= Opt::some(2);
//!     let z = x + y;
//!     yield z * 10
//! };
//! assert_eq!(sum, Opt::some(30));
//! ```

mod attempt;
#[cfg(feature = "async")]
mod attempt_async;
mod query_macro;

pub use attempt::is_captured_panic;

#[cfg(doc)]
use crate::control::Outcome;
