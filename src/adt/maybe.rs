//! Maybe type - an optional value.
//!
//! `Maybe<A>` is either `Some(a)` carrying exactly one value or `None`
//! carrying nothing. The tag fully determines whether a payload exists.
//!
//! The combinators are written against the pattern matcher
//! ([`match_value`] with [`MaybeCases`]), so `map` and `flat_map` never
//! call their function on an absent value.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::adt::{from_nullable, none, some, Maybe};
//!
//! let divide = |n: i32| if n == 0 { none() } else { some(10 / n) };
//! assert_eq!(some(5).flat_map(divide), some(2));
//! assert_eq!(some(0).flat_map(divide), none());
//!
//! // Falsy-but-present values are still present.
//! assert_eq!(from_nullable(Some(0)), some(0));
//! assert_eq!(from_nullable::<i32>(None), Maybe::None);
//! ```

use std::fmt;

use super::either::Either;
use crate::matching::{MaybeCases, match_value};

/// An optional value: `Some(A)` or `None`.
///
/// The variant order mirrors `std::option::Option`, so `None < Some(_)`.
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::{some, Maybe};
///
/// let value: Maybe<i32> = some(5);
/// assert!(value.is_some());
/// assert_eq!(value.get_or_else(0), 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// No value.
    None,
    /// Exactly one value.
    Some(A),
}

/// Wraps a value in `Maybe::Some`.
#[inline]
pub const fn some<A>(value: A) -> Maybe<A> {
    Maybe::Some(value)
}

/// The empty `Maybe`.
///
/// `Maybe::None` carries no payload and is freely copyable, so every call
/// yields the same immutable value.
#[inline]
pub const fn none<A>() -> Maybe<A> {
    Maybe::None
}

/// Lifts a possibly-absent value into `Maybe`.
///
/// Produces `None` exactly when `value` is the absent marker
/// (`std::option::Option::None`). Every present value, including `0`,
/// `""` and `false`, becomes `Some`.
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::{from_nullable, some};
///
/// assert_eq!(from_nullable(Some("")), some(""));
/// assert!(from_nullable::<&str>(None).is_none());
/// ```
#[inline]
pub fn from_nullable<A>(value: Option<A>) -> Maybe<A> {
    match value {
        Some(present) => Maybe::Some(present),
        None => Maybe::None,
    }
}

impl<A> Maybe<A> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` for `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Functor / Monad
    // =========================================================================

    /// Applies `function` to the payload of `Some`; `None` stays `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::adt::{none, some, Maybe};
    ///
    /// assert_eq!(some(3).map(|x| x * 2), some(6));
    /// assert_eq!(none::<i32>().map(|x| x * 2), Maybe::None);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match_value(
            self,
            MaybeCases {
                some: |value| Maybe::Some(function(value)),
                none: || Maybe::None,
            },
        )
    }

    /// Chains a computation that itself returns a `Maybe`.
    ///
    /// The result of `function` is returned as is, never re-wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::adt::{none, some};
    ///
    /// let half = |n: i32| if n % 2 == 0 { some(n / 2) } else { none() };
    /// assert_eq!(some(8).flat_map(half), some(4));
    /// assert_eq!(some(3).flat_map(half), none());
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match_value(
            self,
            MaybeCases {
                some: function,
                none: || Maybe::None,
            },
        )
    }

    /// Folds both variants into a single result.
    #[inline]
    pub fn fold<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B,
    {
        match_value(
            self,
            MaybeCases {
                some: on_some,
                none: on_none,
            },
        )
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the payload, or `default` for `None`.
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        self.fold(|| default, |value| value)
    }

    /// Returns the payload, or computes a fallback for `None`.
    #[inline]
    pub fn get_or_else_with<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        self.fold(default, |value| value)
    }

    /// Returns `self` if it is `Some`, otherwise the result of `alternative`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => alternative(),
        }
    }

    /// Keeps the payload only when it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts to `Either`, using `error` as the `Left` for `None`.
    ///
    /// ```rust
    /// use adtkit::adt::{left, none, right, some, Either};
    ///
    /// assert_eq!(some(1).to_either("missing"), right(1));
    /// assert_eq!(none::<i32>().to_either("missing"), left("missing"));
    /// ```
    #[inline]
    pub fn to_either<E>(self, error: E) -> Either<E, A> {
        self.fold(|| Either::Left(error), Either::Right)
    }

    /// Converts into the standard library option.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.fold(|| None, Some)
    }
}

impl<A> Default for Maybe<A> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        from_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    #[inline]
    fn from(value: Maybe<A>) -> Self {
        value.into_option()
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => write!(formatter, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn some_is_some() {
        let value = some(1);
        assert!(value.is_some());
        assert!(!value.is_none());
    }

    #[rstest]
    fn none_is_none() {
        let value: Maybe<i32> = none();
        assert!(value.is_none());
        assert!(!value.is_some());
    }

    #[rstest]
    fn map_does_not_call_function_on_none() {
        let mut called = false;
        let result = none::<i32>().map(|x| {
            called = true;
            x
        });
        assert_eq!(result, Maybe::None);
        assert!(!called);
    }

    #[rstest]
    #[case(some(5), some(2))]
    #[case(some(0), none())]
    #[case(none(), none())]
    fn flat_map_safe_division(#[case] input: Maybe<i32>, #[case] expected: Maybe<i32>) {
        let result = input.flat_map(|n| if n == 0 { none() } else { some(10 / n) });
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case(some(7), 7)]
    #[case(none(), 0)]
    fn get_or_else_returns_payload_or_default(#[case] input: Maybe<i32>, #[case] expected: i32) {
        assert_eq!(input.get_or_else(0), expected);
    }

    #[rstest]
    fn filter_drops_rejected_payload() {
        assert_eq!(some(4).filter(|n| n % 2 == 0), some(4));
        assert_eq!(some(3).filter(|n| n % 2 == 0), none());
    }

    #[rstest]
    fn or_else_only_runs_for_none() {
        assert_eq!(some(1).or_else(|| some(2)), some(1));
        assert_eq!(none().or_else(|| some(2)), some(2));
    }

    #[rstest]
    fn from_nullable_keeps_falsy_values() {
        assert_eq!(from_nullable(Some(0)), some(0));
        assert_eq!(from_nullable(Some("")), some(""));
        assert_eq!(from_nullable(Some(false)), some(false));
        assert_eq!(from_nullable::<i32>(None), none());
    }

    #[rstest]
    fn option_round_trip() {
        let original = Some(3);
        let maybe: Maybe<i32> = original.into();
        let back: Option<i32> = maybe.into();
        assert_eq!(back, original);
    }

    #[rstest]
    fn display_renders_tag_and_payload() {
        assert_eq!(some(3).to_string(), "Some(3)");
        assert_eq!(none::<i32>().to_string(), "None");
    }

    #[rstest]
    fn default_is_none() {
        assert_eq!(Maybe::<String>::default(), Maybe::None);
    }
}
