//! Opt type - a value that may be present or absent.
//!
//! `Opt<T>` is either `Present(T)` or `Absent`. It offers the same
//! `map`/`bind` algebra as [`Outcome`](super::Outcome): mapping over an
//! absent value never invokes the function, and binding flattens exactly one
//! level.
//!
//! # Examples
//!
//! ```rust
//! use fun::control::Opt;
//!
//! let name = Opt::some("Ada");
//! assert_eq!(name.map(str::len), Opt::some(3));
//!
//! let missing: Opt<&str> = Opt::none();
//! assert_eq!(missing.map(str::len), Opt::none());
//!
//! // bind flattens
//! let parsed = Opt::some("42").bind(|text| Opt::from(text.parse::<i32>().ok()));
//! assert_eq!(parsed, Opt::some(42));
//! ```

use std::fmt;

use super::{Failure, Outcome};

/// A value that is either present or absent.
///
/// Construct it with [`Opt::some`] and [`Opt::none`] (or the variants
/// directly). Reading the value of an absent `Opt` through
/// [`value_ref`](Opt::value_ref) or [`into_value`](Opt::into_value) is a
/// contract violation and panics.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Opt<T> {
    /// No value. Sorts before every present value.
    Absent,
    /// A value is present.
    Present(T),
}

impl<T> Opt<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Present(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::Opt;
    ///
    /// assert!(Opt::some(1).has_value());
    /// assert!(!Opt::<i32>::none().has_value());
    /// ```
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[inline]
    pub fn value_ref(&self) -> &T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Opt::value_ref()` on an `Absent` value"),
        }
    }

    /// Returns the value, consuming the `Opt`.
    ///
    /// # Panics
    ///
    /// Panics if the value is absent.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("called `Opt::into_value()` on an `Absent` value"),
        }
    }

    /// Returns the value, or `default` if absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Converts from `&Opt<T>` to `Opt<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Self::Present(value) => Opt::Present(value),
            Self::Absent => Opt::Absent,
        }
    }

    /// Converts into the standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to a present value.
    ///
    /// `function` is not invoked when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::Opt;
    ///
    /// assert_eq!(Opt::some(2).map(|x| x * 10), Opt::some(20));
    /// assert_eq!(Opt::<i32>::none().map(|x| x * 10), Opt::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Opt::Present(function(value)),
            Self::Absent => Opt::Absent,
        }
    }

    /// Applies `function` to a present value and returns its result directly.
    ///
    /// This is monadic bind: the result is not wrapped a second time, and an
    /// absent value short-circuits without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::Opt;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Opt::some(x / 2) } else { Opt::none() };
    /// assert_eq!(Opt::some(8).bind(half), Opt::some(4));
    /// assert_eq!(Opt::some(7).bind(half), Opt::none());
    /// assert_eq!(Opt::none().bind(half), Opt::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Opt::Absent,
        }
    }

    /// Binds a second step and projects both values into one result.
    ///
    /// `binder` sees the first value by reference so that `projector` can
    /// take ownership of both values afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::Opt;
    ///
    /// let sum = Opt::some(1).select_many(|_| Opt::some(2), |x, y| x + y);
    /// assert_eq!(sum, Opt::some(3));
    /// ```
    pub fn select_many<U, R, B, P>(self, binder: B, projector: P) -> Opt<R>
    where
        B: FnOnce(&T) -> Opt<U>,
        P: FnOnce(T, U) -> R,
    {
        match self {
            Self::Present(first) => match binder(&first) {
                Opt::Present(second) => Opt::Present(projector(first, second)),
                Opt::Absent => Opt::Absent,
            },
            Self::Absent => Opt::Absent,
        }
    }

    /// Keeps a present value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Present(value) = self
            && predicate(&value)
        {
            return Self::Present(value);
        }
        Self::Absent
    }

    /// Converts into an [`Outcome`], using `failure` when the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::{Failure, Opt, Outcome};
    ///
    /// let absent: Opt<i32> = Opt::none();
    /// assert_eq!(absent.ok_or("no value"), Outcome::error(Failure::message("no value")));
    /// ```
    #[inline]
    pub fn ok_or(self, failure: impl Into<Failure>) -> Outcome<T> {
        match self {
            Self::Present(value) => Outcome::Value(value),
            Self::Absent => Outcome::Error(failure.into()),
        }
    }
}

impl<T> Default for Opt<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: fmt::Debug> fmt::Debug for Opt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Present({value})"),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T> From<Option<T>> for Opt<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    #[inline]
    fn from(opt: Opt<T>) -> Self {
        opt.into_option()
    }
}
