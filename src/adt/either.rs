//! Either type - a failure or a success.
//!
//! `Either<E, A>` is `Left(E)` or `Right(A)`. By convention `Left` carries
//! the error and `Right` the success value; the combinators are right-biased,
//! so `map` and `flat_map` forward a `Left` untouched.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::adt::{left, right, Either};
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! assert_eq!(parse("21").map(|n| n * 2), right(42));
//! assert!(parse("x").map(|n| n * 2).is_left());
//!
//! let described = parse("7").fold(|error| format!("error: {error}"), |n| format!("got {n}"));
//! assert_eq!(described, "got 7");
//! ```

use std::fmt;

use super::maybe::Maybe;
use crate::matching::{EitherCases, match_value};

/// A value that is either `Left(E)` (failure) or `Right(A)` (success).
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::{left, right, Either};
///
/// let success: Either<String, i32> = right(42);
/// assert_eq!(success.map(|x| x * 2), right(84));
///
/// let failure: Either<String, i32> = left("boom".to_string());
/// assert_eq!(failure.get_or_else(0), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<E, A> {
    /// The failure side.
    Left(E),
    /// The success side.
    Right(A),
}

/// Builds a `Left`.
#[inline]
pub const fn left<E, A>(error: E) -> Either<E, A> {
    Either::Left(error)
}

/// Builds a `Right`.
#[inline]
pub const fn right<E, A>(value: A) -> Either<E, A> {
    Either::Right(value)
}

impl<E, A> Either<E, A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Projects the left side into a `Maybe`.
    ///
    /// ```rust
    /// use adtkit::adt::{left, none, some, Either};
    ///
    /// let value: Either<i32, String> = left(42);
    /// assert_eq!(value.left(), some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Maybe<E> {
        self.fold(Maybe::Some, |_| Maybe::None)
    }

    /// Projects the right side into a `Maybe`.
    #[inline]
    pub fn right(self) -> Maybe<A> {
        self.fold(|_| Maybe::None, Maybe::Some)
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to a `Right`; a `Left` is forwarded unchanged.
    ///
    /// ```rust
    /// use adtkit::adt::{left, right, Either};
    ///
    /// let ok: Either<&str, i32> = right(5);
    /// assert_eq!(ok.map(|x| x * 2), right(10));
    ///
    /// let failed: Either<&str, i32> = left("bad");
    /// assert_eq!(failed.map(|x| x * 2), left("bad"));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match_value(
            self,
            EitherCases {
                left: Either::Left,
                right: |value| Either::Right(function(value)),
            },
        )
    }

    /// Chains a computation that itself returns an `Either`.
    ///
    /// A `Left` short-circuits; the result of `function` is not re-wrapped.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match_value(
            self,
            EitherCases {
                left: Either::Left,
                right: function,
            },
        )
    }

    /// Applies `function` to a `Left`; a `Right` is forwarded unchanged.
    ///
    /// ```rust
    /// use adtkit::adt::{left, right, Either};
    ///
    /// let failed: Either<String, i32> = left("bad input".to_string());
    /// assert_eq!(failed.map_left(|e| e.to_uppercase()), left("BAD INPUT".to_string()));
    ///
    /// let ok: Either<String, i32> = right(5);
    /// assert_eq!(ok.map_left(|e| e.to_uppercase()), right(5));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, A>
    where
        F: FnOnce(E) -> T,
    {
        match_value(
            self,
            EitherCases {
                left: |error| Either::Left(function(error)),
                right: Either::Right,
            },
        )
    }

    /// Maps both sides at once: `left_function` for `Left`, `right_function`
    /// for `Right`.
    #[inline]
    pub fn bimap<T, B, F, G>(self, left_function: F, right_function: G) -> Either<T, B>
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> B,
    {
        match_value(
            self,
            EitherCases {
                left: |error| Either::Left(left_function(error)),
                right: |value| Either::Right(right_function(value)),
            },
        )
    }

    /// Eliminates the `Either` by applying one of two functions.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match_value(
            self,
            EitherCases {
                left: left_function,
                right: right_function,
            },
        )
    }

    /// Swaps the two sides.
    #[inline]
    pub fn swap(self) -> Either<A, E> {
        self.fold(Either::Right, Either::Left)
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the `Right` payload, or `default` for a `Left`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        self.fold(|_| default, |value| value)
    }

    /// Returns the `Right` payload, or computes one from the error.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> A
    where
        F: FnOnce(E) -> A,
    {
        self.fold(default, |value| value)
    }

    /// Recovers from a `Left` with another `Either`.
    #[inline]
    pub fn or_else<T, F>(self, recover: F) -> Either<T, A>
    where
        F: FnOnce(E) -> Either<T, A>,
    {
        self.fold(recover, Either::Right)
    }
}

impl<E: fmt::Display, A: fmt::Display> fmt::Display for Either<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, A> From<Result<A, E>> for Either<E, A> {
    /// `Ok(a)` becomes `Right(a)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    /// `Right(a)` becomes `Ok(a)`, `Left(e)` becomes `Err(e)`.
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        either.fold(Err, Ok)
    }
}
