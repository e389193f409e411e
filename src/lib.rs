//! # fun
//!
//! Small algebraic data types for expressing optionality, success/failure and
//! panic-to-value conversion without unwinding through calling code.
//!
//! ## Overview
//!
//! - **Containers**: [`Opt`](control::Opt) (present/absent),
//!   [`Outcome`](control::Outcome) (value/error) and the closed tagged unions
//!   [`Or2`](control::Or2) and [`Or3`](control::Or3)
//! - **Type Classes**: Functor, Applicative and Monad implemented for `Opt`
//!   and `Outcome`
//! - **Try adapters**: `Outcome::try_value`, `Outcome::try_async` and friends
//!   turn panicking or failing computations into `Outcome` values
//! - **Query syntax**: the [`query!`] macro rewrites a sequence of binds into
//!   nested `bind` calls
//!
//! ## Feature Flags
//!
//! - `control`: The container types
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `effect`: Synchronous Try adapters and the `query!` macro
//! - `async`: Asynchronous Try adapters (tokio + futures)
//! - `serde`: Serialize/Deserialize for `Unit`, `Opt`, `Or2` and `Or3`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fun::prelude::*;
//!
//! let total = fun::query! {
//!     x <= Outcome::try_value(|| 10);
//!     y <= Outcome::try_value(|| 100 / x);
//!     yield x + y
//! };
//! assert_eq!(total, Outcome::value(20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fun::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "effect")]
pub mod effect;
