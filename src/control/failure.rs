//! Error information carried by a failed [`Outcome`](super::Outcome).
//!
//! A [`Failure`] always has a human readable message and a [`FailureKind`]
//! describing where it came from. When the failure was produced from a Rust
//! error value, that error is kept as the cause and exposed through
//! [`std::error::Error::source`].
//!
//! # Examples
//!
//! ```rust
//! use fun::control::{Failure, FailureKind};
//!
//! let failure = Failure::message("account is frozen");
//! assert_eq!(failure.kind(), FailureKind::Message);
//! assert_eq!(failure.to_string(), "account is frozen");
//!
//! let parsed = "x".parse::<i32>().unwrap_err();
//! let failure = Failure::from_error(parsed);
//! assert_eq!(failure.kind(), FailureKind::Raised);
//! assert!(failure.downcast_ref::<std::num::ParseIntError>().is_some());
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Where a [`Failure`] originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Built from a plain message by calling code.
    Message,
    /// A Rust error value returned (or converted) by a computation.
    Raised,
    /// A panic captured by a Try adapter.
    Panicked,
    /// A background task was cancelled before it produced a value.
    Cancelled,
    /// A required generator or action was not supplied.
    ArgumentMissing,
    /// A background computation was requested outside of an async runtime.
    RuntimeUnavailable,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Message => "message",
            Self::Raised => "raised",
            Self::Panicked => "panicked",
            Self::Cancelled => "cancelled",
            Self::ArgumentMissing => "argument missing",
            Self::RuntimeUnavailable => "runtime unavailable",
        };
        formatter.write_str(name)
    }
}

/// The error side of an [`Outcome`](super::Outcome).
///
/// `Failure` is cheap to clone: the optional cause is shared behind an `Arc`.
/// Two failures are equal when their kind and message are equal; the cause
/// does not take part in equality.
#[derive(Debug, Clone)]
pub struct Failure {
    kind: FailureKind,
    message: String,
    cause: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl Failure {
    /// Creates a failure from a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Message,
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a failure that keeps `error` as its cause.
    ///
    /// The message is the error's `Display` rendering.
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            kind: FailureKind::Raised,
            message: error.to_string(),
            cause: Some(Arc::new(error)),
        }
    }

    /// Creates a failure from an already boxed error.
    pub fn from_boxed(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self {
            kind: FailureKind::Raised,
            message: error.to_string(),
            cause: Some(Arc::from(error)),
        }
    }

    /// Creates a failure describing a missing required argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fun::control::{Failure, FailureKind};
    ///
    /// let failure = Failure::argument_missing("generator");
    /// assert_eq!(failure.kind(), FailureKind::ArgumentMissing);
    /// assert_eq!(failure.message_text(), "argument `generator` is missing");
    /// ```
    pub fn argument_missing(name: &str) -> Self {
        Self {
            kind: FailureKind::ArgumentMissing,
            message: format!("argument `{name}` is missing"),
            cause: None,
        }
    }

    /// Creates a failure from a panic payload.
    ///
    /// `&str` and `String` payloads become the message; a payload that is
    /// already a `Failure` (raised with `std::panic::panic_any`) is returned
    /// as is.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(failure) => return *failure,
            Err(payload) => payload,
        };
        let message = if let Some(string) = payload.downcast_ref::<&str>() {
            (*string).to_string()
        } else if let Some(string) = payload.downcast_ref::<String>() {
            string.clone()
        } else {
            "Unknown panic".to_string()
        };
        Self {
            kind: FailureKind::Panicked,
            message,
            cause: None,
        }
    }

    pub(crate) fn with_kind(mut self, kind: FailureKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns where this failure came from.
    #[inline]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the human readable message.
    #[inline]
    pub fn message_text(&self) -> &str {
        &self.message
    }

    /// Returns the causing error, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Returns the cause as a concrete error type, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.cause.as_deref().and_then(|cause| cause.downcast_ref::<E>())
    }

    /// Returns `true` if this failure was produced by a captured panic.
    #[inline]
    pub fn is_panic(&self) -> bool {
        self.kind == FailureKind::Panicked
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for Failure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

impl PartialEq for Failure {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Failure {}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::message(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::message(message)
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Failure {
    fn from(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::from_boxed(error)
    }
}

impl From<std::io::Error> for Failure {
    fn from(error: std::io::Error) -> Self {
        Self::from_error(error)
    }
}

impl From<std::num::ParseIntError> for Failure {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::from_error(error)
    }
}

impl From<std::num::ParseFloatError> for Failure {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::from_error(error)
    }
}

static_assertions::assert_impl_all!(Failure: Send, Sync, Clone);
