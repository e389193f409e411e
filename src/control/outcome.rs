//! Outcome type - a computation that produced a value or failed.
//!
//! `Outcome<T>` is either `Value(T)` or `Error(Failure)`. Failures are
//! ordinary values: `map` and `bind` propagate them unchanged and never
//! invoke the supplied function, so a chain of dependent steps stops at the
//! first failure.
//!
//! # Examples
//!
//! ```rust
//! use fun::control::{Failure, Outcome};
//!
//! fn parse(text: &str) -> Outcome<i32> {
//!     text.parse::<i32>().into()
//! }
//!
//! let doubled = parse("21").map(|x| x * 2);
//! assert_eq!(doubled, Outcome::value(42));
//!
//! let chained = parse("10").bind(|x| parse("zero").map(move |y| x / y));
//! assert!(!chained.has_value());
//! assert_eq!(chained.error_ref().message_text(), "invalid digit found in string");
//! ```

use std::fmt;

use super::{Failure, Opt};

/// The result of a computation: a value or a [`Failure`].
///
/// Construct it with [`Outcome::value`] and [`Outcome::error`]. Reading the
/// value of a failed outcome (or the failure of a successful one) through
/// the `*_ref` / `into_*` accessors is a contract violation and panics.
#[derive(Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The computation succeeded.
    Value(T),
    /// The computation failed.
    Error(Failure),
}

impl<T> Outcome<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    #[inline]
    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub const fn error(failure: Failure) -> Self {
        Self::Error(failure)
    }

    /// Creates a failed outcome from a message.
    #[inline]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Error(Failure::message(message))
    }

    /// Creates a failed outcome that keeps `error` as its cause.
    #[inline]
    pub fn from_error<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Error(Failure::from_error(error))
    }

    /// Converts a standard library `Result` whose error is any Rust error.
    ///
    /// `Err(e)` becomes a `Raised` failure that keeps `e` as its cause. The
    /// `From<Result<T, E>>` conversion only covers error types that
    /// implement `Into<Failure>`; this works for every `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::{FailureKind, Outcome};
    /// use std::net::AddrParseError;
    ///
    /// let parsed = Outcome::from_result("127.0.0.1".parse::<std::net::IpAddr>());
    /// assert!(parsed.has_value());
    ///
    /// let failed = Outcome::from_result("localhost".parse::<std::net::IpAddr>());
    /// assert_eq!(failed.error_ref().kind(), FailureKind::Raised);
    /// assert!(failed.error_ref().downcast_ref::<AddrParseError>().is_some());
    /// ```
    #[inline]
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::from_error(error),
        }
    }

    /// Turns an optional argument into an outcome.
    ///
    /// An absent argument becomes an `ArgumentMissing` failure naming
    /// `name`; nothing panics. Binding the result into a Try adapter gives
    /// the "generator not supplied" behaviour as a value:
    ///
    /// ```rust
    /// use fun::control::{FailureKind, Outcome};
    ///
    /// let generator: Option<fn() -> i32> = None;
    /// let outcome = Outcome::require(generator, "generator").bind(Outcome::try_value);
    /// assert_eq!(outcome.error_ref().kind(), FailureKind::ArgumentMissing);
    ///
    /// let outcome = Outcome::require(Some(|| 42), "generator").bind(Outcome::try_value);
    /// assert_eq!(outcome, Outcome::value(42));
    /// ```
    pub fn require(argument: Option<T>, name: &str) -> Self {
        match argument {
            Some(argument) => Self::Value(argument),
            None => {
                tracing::warn!(argument = name, "required argument is missing");
                Self::Error(Failure::argument_missing(name))
            }
        }
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    /// Returns `true` if the computation succeeded.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an error.
    #[inline]
    pub fn value_ref(&self) -> &T {
        match self {
            Self::Value(value) => value,
            Self::Error(failure) => {
                panic!("called `Outcome::value_ref()` on an `Error` value: {failure}")
            }
        }
    }

    /// Returns the value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is an error.
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Error(failure) => {
                panic!("called `Outcome::into_value()` on an `Error` value: {failure}")
            }
        }
    }

    /// Returns a reference to the failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a value.
    #[inline]
    pub fn error_ref(&self) -> &Failure {
        match self {
            Self::Value(_) => panic!("called `Outcome::error_ref()` on a `Value`"),
            Self::Error(failure) => failure,
        }
    }

    /// Returns the failure, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a value.
    #[inline]
    pub fn into_error(self) -> Failure {
        match self {
            Self::Value(_) => panic!("called `Outcome::into_error()` on a `Value`"),
            Self::Error(failure) => failure,
        }
    }

    /// Returns the value, or `default` if the outcome is an error.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Value(value) => value,
            Self::Error(_) => default,
        }
    }

    /// Converts from `&Outcome<T>` to `Outcome<&T>`, cloning the failure.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Value(value) => Outcome::Value(value),
            Self::Error(failure) => Outcome::Error(failure.clone()),
        }
    }

    /// Returns the value as an [`Opt`], discarding the failure.
    #[inline]
    pub fn ok(self) -> Opt<T> {
        match self {
            Self::Value(value) => Opt::Present(value),
            Self::Error(_) => Opt::Absent,
        }
    }

    /// Returns the failure as an [`Opt`], discarding the value.
    #[inline]
    pub fn err(self) -> Opt<Failure> {
        match self {
            Self::Value(_) => Opt::Absent,
            Self::Error(failure) => Opt::Present(failure),
        }
    }

    /// Converts into a standard library `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure if the outcome is an error.
    #[inline]
    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Error(failure) => Err(failure),
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Applies `function` to a successful value.
    ///
    /// A failure is propagated unchanged and `function` is not invoked.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Value(value) => Outcome::Value(function(value)),
            Self::Error(failure) => Outcome::Error(failure),
        }
    }

    /// Applies `function` to a successful value and returns its outcome directly.
    ///
    /// This is monadic bind. A failure short-circuits: `function` is not
    /// invoked and the existing failure is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::Outcome;
    ///
    /// let reciprocal = |x: i32| {
    ///     if x == 0 { Outcome::fail("division by zero") } else { Outcome::value(100 / x) }
    /// };
    /// assert_eq!(Outcome::value(4).bind(reciprocal), Outcome::value(25));
    /// assert!(Outcome::value(0).bind(reciprocal).is_error());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Value(value) => function(value),
            Self::Error(failure) => Outcome::Error(failure),
        }
    }

    /// Binds a second step and projects both values into one result.
    ///
    /// Steps run left to right; the first failure is returned and neither
    /// `binder` (when `self` failed) nor `projector` is invoked after it.
    pub fn select_many<U, R, B, P>(self, binder: B, projector: P) -> Outcome<R>
    where
        B: FnOnce(&T) -> Outcome<U>,
        P: FnOnce(T, U) -> R,
    {
        match self {
            Self::Value(first) => match binder(&first) {
                Outcome::Value(second) => Outcome::Value(projector(first, second)),
                Outcome::Error(failure) => Outcome::Error(failure),
            },
            Self::Error(failure) => Outcome::Error(failure),
        }
    }

    /// Applies `function` to the failure, leaving a value untouched.
    #[inline]
    pub fn map_error<F>(self, function: F) -> Self
    where
        F: FnOnce(Failure) -> Failure,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Error(failure) => Self::Error(function(failure)),
        }
    }

    /// Recovers from a failure by running `function` on it.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce(Failure) -> Self,
    {
        match self {
            Self::Value(value) => Self::Value(value),
            Self::Error(failure) => function(failure),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Error(failure) => formatter
                .debug_tuple("Error")
                .field(&format_args!("{}: {}", failure.kind(), failure))
                .finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(formatter, "Value({value})"),
            Self::Error(failure) => write!(formatter, "Error({failure})"),
        }
    }
}

/// Available for error types with an `Into<Failure>` conversion (messages,
/// boxed errors, `io::Error` and the numeric parse errors). Use
/// [`Outcome::from_result`] for any other error type.
impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Failure>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(error) => Self::Error(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
