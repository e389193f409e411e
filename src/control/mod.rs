//! Value wrappers for optionality, success/failure and closed unions.
//!
//! This module provides the container types of the crate:
//!
//! - [`Unit`]: The payload of a successful action with nothing to return
//! - [`Opt`]: A value that is present or absent
//! - [`Outcome`]: A value or a [`Failure`]
//! - [`Or2`], [`Or3`]: Exactly one of two or three typed alternatives
//!
//! All of them are immutable values; sharing them across threads needs no
//! synchronisation beyond what their payloads require.
//!
//! # Examples
//!
//! ## Short-circuiting chains
//!
//! ```rust
//! use fun::control::Outcome;
//!
//! let mut evaluated = Vec::new();
//! let result = Outcome::value(1)
//!     .bind(|x: i32| {
//!         evaluated.push(2);
//!         Outcome::<i32>::fail("stop").map(move |y| x + y)
//!     })
//!     .bind(|x| {
//!         evaluated.push(3);
//!         Outcome::value(x)
//!     });
//! assert!(result.is_error());
//! assert_eq!(evaluated, vec![2]);
//! ```
//!
//! ## Tagged unions
//!
//! ```rust
//! use fun::control::Or2;
//!
//! let parsed: Or2<i64, String> = match "12".parse::<i64>() {
//!     Ok(number) => Or2::of_option1(number),
//!     Err(_) => Or2::of_option2("12".to_string()),
//! };
//! assert_eq!(parsed.to_string(), "1(12)");
//! ```

mod failure;
mod opt;
mod or;
mod outcome;
mod unit;

pub use failure::{Failure, FailureKind};
pub use opt::Opt;
pub use or::{Or2, Or3, OrError};
pub use outcome::Outcome;
pub use unit::Unit;

/// Lifts a bare value into a container.
///
/// This is what the `yield` clause of [`query!`](crate::query) expands to;
/// the container is picked by type inference from the surrounding `bind`.
///
/// # Examples
///
/// ```rust
/// use fun::control::{Lift, Opt, Outcome};
///
/// let present: Opt<i32> = Lift::lift(1);
/// let value: Outcome<i32> = Lift::lift(1);
/// assert_eq!(present, Opt::some(1));
/// assert_eq!(value, Outcome::value(1));
/// ```
pub trait Lift<T> {
    /// Wraps `value` as a present / successful container.
    fn lift(value: T) -> Self;
}

impl<T> Lift<T> for Opt<T> {
    #[inline]
    fn lift(value: T) -> Self {
        Self::Present(value)
    }
}

impl<T> Lift<T> for Outcome<T> {
    #[inline]
    fn lift(value: T) -> Self {
        Self::Value(value)
    }
}
