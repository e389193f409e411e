//! The `Unit` marker value.
//!
//! `Unit` is the payload of a successful computation that produces nothing,
//! for example the `Outcome<Unit>` returned by `Outcome::try_action`.
//!
//! # Examples
//!
//! ```rust
//! use fun::control::Unit;
//!
//! assert_eq!(Unit, Unit::VALUE);
//! assert_eq!(Unit.to_string(), "()");
//! ```

use std::fmt;

/// A zero-information value: "the action succeeded, there is nothing to return".
///
/// Every instance is equal to every other instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// The only value of `Unit`.
    pub const VALUE: Self = Self;
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
