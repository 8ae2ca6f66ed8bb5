//! Monad type class - sequencing computations that produce wrapped values.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! M::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(M::pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adtkit::adt::{left, right, Either};
//! use adtkit::typeclass::Monad;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! fn reciprocal(n: i32) -> Either<String, i32> {
//!     if n == 0 { left("division by zero".to_string()) } else { right(100 / n) }
//! }
//!
//! assert_eq!(Monad::flat_map(parse("4"), reciprocal), right(25));
//! assert_eq!(Monad::flat_map(parse("0"), reciprocal), left("division by zero".to_string()));
//! ```

use super::functor::Functor;
use crate::adt::{Either, List, Maybe};

/// A type class for containers supporting dependent sequencing.
///
/// `flat_map` is `Functor::fmap` followed by flattening one level: the
/// callback already returns a wrapped value, and the wrapping is never
/// doubled.
pub trait Monad: Functor {
    /// Lifts a plain value into the container.
    ///
    /// ```rust
    /// use adtkit::adt::{some, Maybe};
    /// use adtkit::list;
    /// use adtkit::adt::List;
    /// use adtkit::typeclass::Monad;
    ///
    /// assert_eq!(<Maybe<()> as Monad>::pure(3), some(3));
    /// assert_eq!(<List<()> as Monad>::pure(3), list![3]);
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies `function` to every held value and flattens the results.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>,
        B: Clone;

    /// Sequences `next` after `self`, discarding `self`'s values.
    ///
    /// A failed or empty `self` propagates and `next` is dropped.
    ///
    /// ```rust
    /// use adtkit::adt::{none, some};
    /// use adtkit::typeclass::Monad;
    ///
    /// assert_eq!(some(5).then(some("next")), some("next"));
    /// assert_eq!(none::<i32>().then(some("next")), none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone,
        B: Clone,
    {
        self.flat_map(move |_| next.clone())
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnMut(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<E, A> Monad for Either<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Either<E, B> {
        Either::Right(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnMut(A) -> Either<E, B>,
    {
        Self::flat_map(self, function)
    }
}

impl<A: Clone> Monad for List<A> {
    #[inline]
    fn pure<B>(value: B) -> List<B> {
        List::singleton(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(A) -> List<B>,
        B: Clone,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<A> Maybe<Maybe<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        Self::flat_map(self, |inner| inner)
    }
}

impl<E, A> Either<E, Either<E, A>> {
    /// Removes one level of nesting; the outer `Left` wins.
    #[inline]
    pub fn flatten(self) -> Either<E, A> {
        Self::flat_map(self, |inner| inner)
    }
}

impl<A: Clone> List<List<A>> {
    /// Concatenates the inner lists in order.
    ///
    /// ```rust
    /// use adtkit::list;
    /// use adtkit::adt::List;
    ///
    /// let nested: List<List<i32>> = list![list![1, 2], list![], list![3]];
    /// assert_eq!(nested.flatten(), list![1, 2, 3]);
    /// ```
    #[inline]
    pub fn flatten(self) -> List<A> {
        Self::flat_map(self, |inner| inner)
    }
}
