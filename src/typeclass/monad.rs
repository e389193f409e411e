//! Monad type class - sequencing dependent computations.
//!
//! `Monad` adds `flat_map` (bind): the next step depends on the previous
//! value, and an absent or failed container short-circuits the rest of the
//! chain.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fun::control::Outcome;
//! use fun::typeclass::Monad;
//!
//! fn checked_divide(numerator: i32, denominator: i32) -> Outcome<i32> {
//!     if denominator == 0 {
//!         Outcome::fail("division by zero")
//!     } else {
//!         Outcome::value(numerator / denominator)
//!     }
//! }
//!
//! let result = Outcome::value(100)
//!     .flat_map(|x| checked_divide(x, 5))
//!     .flat_map(|x| checked_divide(x, 0));
//! assert_eq!(result, Outcome::fail("division by zero"));
//! ```

use super::applicative::Applicative;
use crate::control::{Opt, Outcome};

/// A type class for containers supporting dependent sequencing.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::Opt;
    /// use fun::typeclass::Monad;
    ///
    /// let y = Opt::some(5).flat_map(|n| if n > 10 { Opt::some(n) } else { Opt::none() });
    /// assert_eq!(y, Opt::none());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// An absent or failed `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Opt<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Opt<B>
    where
        F: FnOnce(A) -> Opt<B>,
    {
        self.bind(function)
    }
}

impl<A> Monad for Outcome<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        self.bind(function)
    }
}
