//! Guard-style matching with chained clauses.
//!
//! [`match_with`] starts a chain over a value; each clause tests the value
//! with an arbitrary predicate and the first clause that accepts it wins.
//! Later clauses are skipped without evaluating their predicates.

use std::fmt;

use super::error::UnhandledVariantError;
use super::tagged::Tagged;

enum State<T, B> {
    Pending(T),
    Matched(B),
}

/// A chain of guarded clauses over a value of type `T`, producing `B`.
///
/// Finish the chain with [`otherwise`](Self::otherwise) to supply a default,
/// or with [`exhaustive`](Self::exhaustive) to assert that some clause
/// matched.
#[must_use = "a match chain does nothing until finished with `otherwise` or `exhaustive`"]
pub struct Matcher<T, B> {
    state: State<T, B>,
}

/// Starts a guard-style match over `value`.
///
/// # Examples
///
/// ```rust
/// use adtkit::matching::match_with;
///
/// let classify = |n: i32| {
///     match_with(n)
///         .when(|n| *n < 0, |_| "negative")
///         .when_eq(0, |_| "zero")
///         .when(|n| n % 2 == 0, |_| "even")
///         .otherwise(|_| "odd")
/// };
///
/// assert_eq!(classify(-3), "negative");
/// assert_eq!(classify(0), "zero");
/// assert_eq!(classify(4), "even");
/// assert_eq!(classify(7), "odd");
/// ```
#[inline]
pub const fn match_with<T, B>(value: T) -> Matcher<T, B> {
    Matcher {
        state: State::Pending(value),
    }
}

impl<T, B> Matcher<T, B> {
    /// Adds a clause that fires when `predicate` accepts the value.
    pub fn when<P, F>(self, predicate: P, handler: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> B,
    {
        let state = match self.state {
            State::Pending(value) => {
                if predicate(&value) {
                    State::Matched(handler(value))
                } else {
                    State::Pending(value)
                }
            }
            matched @ State::Matched(_) => matched,
        };
        Self { state }
    }

    /// Adds a clause that fires when the value equals `expected`.
    pub fn when_eq<V, F>(self, expected: V, handler: F) -> Self
    where
        T: PartialEq<V>,
        F: FnOnce(T) -> B,
    {
        self.when(|value| *value == expected, handler)
    }

    /// Adds a clause that fires when the value carries `tag`.
    ///
    /// ```rust
    /// use adtkit::adt::{left, Either};
    /// use adtkit::matching::match_with;
    ///
    /// let value: Either<&str, i32> = left("boom");
    /// let result = match_with(value)
    ///     .when_tag("right", |_| 1)
    ///     .when_tag("left", |_| -1)
    ///     .exhaustive();
    /// assert_eq!(result, Ok(-1));
    /// ```
    pub fn when_tag<F>(self, tag: &str, handler: F) -> Self
    where
        T: Tagged,
        F: FnOnce(T) -> B,
    {
        self.when(|value| value.tag() == tag, handler)
    }

    /// Returns `true` once a clause has matched.
    pub const fn is_matched(&self) -> bool {
        matches!(self.state, State::Matched(_))
    }

    /// Finishes the chain, running `default` if no clause matched.
    pub fn otherwise<F>(self, default: F) -> B
    where
        F: FnOnce(T) -> B,
    {
        match self.state {
            State::Matched(result) => result,
            State::Pending(value) => default(value),
        }
    }

    /// Finishes the chain without a default.
    ///
    /// # Errors
    ///
    /// Returns [`UnhandledVariantError::NoMatchingClause`] carrying the
    /// `Debug` rendering of the value when no clause matched.
    ///
    /// ```rust
    /// use adtkit::matching::{match_with, UnhandledVariantError};
    ///
    /// let result = match_with(5).when(|n| *n > 10, |n| n * 2).exhaustive();
    /// assert_eq!(
    ///     result,
    ///     Err(UnhandledVariantError::NoMatchingClause { value: "5".to_string() })
    /// );
    /// ```
    pub fn exhaustive(self) -> Result<B, UnhandledVariantError>
    where
        T: fmt::Debug,
    {
        match self.state {
            State::Matched(result) => Ok(result),
            State::Pending(value) => {
                let value = format!("{value:?}");
                tracing::error!(value = %value, "no clause matched");
                Err(UnhandledVariantError::NoMatchingClause { value })
            }
        }
    }
}

impl<T: fmt::Debug, B: fmt::Debug> fmt::Debug for Matcher<T, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Pending(value) => formatter.debug_tuple("Pending").field(value).finish(),
            State::Matched(result) => formatter.debug_tuple("Matched").field(result).finish(),
        }
    }
}
