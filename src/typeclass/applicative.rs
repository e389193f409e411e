//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends `Functor` with `pure` (lift a value) and `map2`
//! (combine two independent containers). For `Outcome`, combining keeps the
//! first failure from the left.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fun::control::Outcome;
//! use fun::typeclass::Applicative;
//!
//! let width = Outcome::value(3);
//! let height = Outcome::value(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Outcome::value(12));
//! ```

use super::functor::Functor;
use crate::control::{Opt, Outcome};

/// A type class for containers that can lift values and combine independent results.
pub trait Applicative: Functor {
    /// Lifts a pure value into the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::Opt;
    /// use fun::typeclass::Applicative;
    ///
    /// let x: Opt<i32> = <Opt<()>>::pure(42);
    /// assert_eq!(x, Opt::some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three containers using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two containers into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function inside the container to a value inside the container.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Opt<A> {
    #[inline]
    fn pure<B>(value: B) -> Opt<B> {
        Opt::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Opt<B>, function: F) -> Opt<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Opt::Present(a), Opt::Present(b)) => Opt::Present(function(a, b)),
            _ => Opt::Absent,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Opt<B>, third: Opt<C>, function: F) -> Opt<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Opt::Present(a), Opt::Present(b), Opt::Present(c)) => Opt::Present(function(a, b, c)),
            _ => Opt::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Opt<B>) -> Opt<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Opt::Present(function), Opt::Present(b)) => Opt::Present(function(b)),
            _ => Opt::Absent,
        }
    }
}

impl<A> Applicative for Outcome<A> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B> {
        Outcome::Value(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<B>, function: F) -> Outcome<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Outcome::Value(a), Outcome::Value(b)) => Outcome::Value(function(a, b)),
            (Outcome::Error(failure), _) | (_, Outcome::Error(failure)) => Outcome::Error(failure),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Outcome<B>, third: Outcome<C>, function: F) -> Outcome<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Outcome::Value(a), Outcome::Value(b), Outcome::Value(c)) => {
                Outcome::Value(function(a, b, c))
            }
            (Outcome::Error(failure), _, _)
            | (_, Outcome::Error(failure), _)
            | (_, _, Outcome::Error(failure)) => Outcome::Error(failure),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B>) -> Outcome<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, b| function(b))
    }
}
