//! Type class traits for the container types.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing dependent computations
//!
//! Rust has no higher-kinded types; [`TypeConstructor`] emulates them with
//! Generic Associated Types so the traits can be written once for both
//! [`Opt`](crate::control::Opt) and [`Outcome`](crate::control::Outcome).
//!
//! # Examples
//!
//! ```rust
//! use fun::control::{Opt, Outcome};
//! use fun::typeclass::{Applicative, Functor, Monad};
//!
//! let area = Outcome::value(3).map2(Outcome::value(4), |w, h| w * h);
//! assert_eq!(area, Outcome::value(12));
//!
//! let halved = Opt::some(8)
//!     .fmap(|x| x + 2)
//!     .flat_map(|x| if x % 2 == 0 { Opt::some(x / 2) } else { Opt::none() });
//! assert_eq!(halved, Opt::some(5));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
