//! query! macro for query-style composition.
//!
//! `query!` writes a sequence of dependent steps over [`Opt`] or
//! [`Outcome`] as a flat list instead of nested `bind` calls. It is a
//! purely syntactic rewrite: nothing is evaluated that the equivalent
//! nested binds would not evaluate.
//!
//! # Syntax
//!
//! - `pattern <= expression;` - Bind: continue with the value inside the container
//! - `let pattern = expression;` - Pure let binding
//! - `yield expression` - Final value, lifted into the container
//! - `expression` - Final expression (already a container)
//!
//! `<-` is not a single token in Rust macros, so `<=` is used as the bind
//! operator.
//!
//! # Examples
//!
//! ```rust
//! use fun::control::Outcome;
//! use fun::query;
//!
//! let result = query! {
//!     w <= Outcome::value(1);
//!     x <= Outcome::value(2);
//!     y <= Outcome::value(3);
//!     z <= Outcome::value(2);
//!     yield (w + x + y + z) / 4
//! };
//! assert_eq!(result, Outcome::value(2));
//! ```
//!
//! # Expansion
//!
//! ```rust,ignore
//! query! { x <= a; y <= b; yield x + y }
//! // becomes
//! a.bind(move |x| b.bind(move |y| Lift::lift(x + y)))
//! ```
//!
//! Steps are evaluated left to right. The expression of a step is only
//! evaluated once every step before it produced a value.
//!
//! [`Opt`]: crate::control::Opt
//! [`Outcome`]: crate::control::Outcome

/// Composes dependent `Opt` / `Outcome` steps with do-notation syntax.
///
/// See the [effect module documentation](crate::effect) for the syntax.
///
/// # Examples
///
/// ```rust
/// use fun::control::Opt;
/// use fun::query;
///
/// let result: Opt<i32> = query! {
///     x <= Opt::some(5);
///     y <= Opt::<i32>::none();
///     yield x + y
/// };
/// assert_eq!(result, Opt::none());
/// ```
#[macro_export]
macro_rules! query {
    // ==========================================================================
    // Terminal cases
    // ==========================================================================

    (yield $result:expr) => {
        $crate::control::Lift::lift($result)
    };

    ($result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= container; rest
    // ==========================================================================

    ($pattern:ident <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |$pattern| {
            $crate::query!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |($($pattern)*)| {
            $crate::query!($($rest)+)
        })
    };

    (_ <= $container:expr ; $($rest:tt)+) => {
        $container.bind(move |_| {
            $crate::query!($($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {
        {
            let $pattern = $expr;
            $crate::query!($($rest)+)
        }
    };

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {
        {
            let ($($pattern)*) = $expr;
            $crate::query!($($rest)+)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::control::{Opt, Outcome};

    #[test]
    fn basic_opt_bind() {
        let result = query! {
            x <= Opt::some(5);
            y <= Opt::some(10);
            yield x + y
        };
        assert_eq!(result, Opt::some(15));
    }

    #[test]
    fn outcome_with_let() {
        let result = query! {
            x <= Outcome::value(5);
            let doubled = x * 2;
            Outcome::value(doubled)
        };
        assert_eq!(result, Outcome::value(10));
    }

    #[test]
    fn outcome_first_error_wins() {
        let result: Outcome<i32> = query! {
            x <= Outcome::<i32>::fail("first");
            y <= Outcome::<i32>::fail("second");
            yield x + y
        };
        assert_eq!(result, Outcome::fail("first"));
    }

    #[test]
    fn single_expression() {
        let result = query! {
            Opt::some(42)
        };
        assert_eq!(result, Opt::some(42));
    }

    #[test]
    fn wildcard_pattern() {
        let result = query! {
            _ <= Opt::some(5);
            yield 42
        };
        assert_eq!(result, Opt::some(42));
    }

    #[test]
    fn tuple_pattern() {
        let result = query! {
            (a, b) <= Outcome::value((1, 2));
            yield a + b
        };
        assert_eq!(result, Outcome::value(3));
    }

    #[test]
    fn let_before_yield() {
        let result = query! {
            x <= Opt::some(2);
            let (square, cube) = (x * x, x * x * x);
            yield square + cube
        };
        assert_eq!(result, Opt::some(12));
    }
}
