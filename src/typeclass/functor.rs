//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fun::control::{Opt, Outcome};
//! use fun::typeclass::Functor;
//!
//! let present = Opt::some(5).fmap(|n| n.to_string());
//! assert_eq!(present, Opt::some("5".to_string()));
//!
//! let failed = Outcome::<i32>::fail("no input").fmap(|n| n + 1);
//! assert!(failed.is_error());
//! ```

use super::higher::TypeConstructor;
use crate::control::{Opt, Outcome};

/// A type class for containers whose value can be transformed in place.
///
/// `fmap` never changes the shape of the container: an absent `Opt` stays
/// absent and a failed `Outcome` keeps its failure.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::Opt;
    /// use fun::typeclass::Functor;
    ///
    /// assert_eq!(Opt::some(5).fmap(|n| n * 2), Opt::some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Opt<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Opt<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Opt<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Functor for Outcome<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
