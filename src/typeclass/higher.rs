//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Opt<_>` or `Outcome<_>` as type constructors
//! directly. [`TypeConstructor`] uses a GAT to name "the same container
//! holding another type", which is what `Functor` and `Monad` need.
//!
//! # Example
//!
//! ```rust
//! use fun::control::Opt;
//! use fun::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Opt<String> = emptied(Opt::some(42));
//! assert_eq!(none, Opt::none());
//! ```

use crate::control::{Opt, Outcome};

/// A trait representing a type constructor.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Opt<A> {
    type Inner = A;
    type WithType<B> = Opt<B>;
}

impl<A> TypeConstructor for Outcome<A> {
    type Inner = A;
    type WithType<B> = Outcome<B>;
}
