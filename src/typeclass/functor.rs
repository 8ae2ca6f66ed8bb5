//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(compose(g, f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adtkit::adt::{none, some, Maybe};
//! use adtkit::list;
//! use adtkit::typeclass::Functor;
//!
//! fn double_all<F>(container: F) -> F::WithType<i32>
//! where
//!     F: Functor<Inner = i32>,
//! {
//!     container.fmap(|x| x * 2)
//! }
//!
//! assert_eq!(double_all(some(3)), some(6));
//! assert_eq!(double_all(none::<i32>()), Maybe::None);
//! assert_eq!(double_all(list![1, 2, 3]), list![2, 4, 6]);
//! ```

use super::higher::TypeConstructor;
use crate::adt::{Either, List, Maybe};

/// A type class for containers that can have a function mapped over their
/// contents while keeping their shape.
///
/// The function is `FnMut` because a multi-element container calls it once
/// per element; single-element containers call it at most once.
pub trait Functor: TypeConstructor {
    /// Applies `function` to every held value.
    ///
    /// ```rust
    /// use adtkit::adt::{left, right, Either};
    /// use adtkit::typeclass::Functor;
    ///
    /// let ok: Either<String, i32> = right(5);
    /// assert_eq!(ok.fmap(|n| n.to_string()), right("5".to_string()));
    ///
    /// let failed: Either<String, i32> = left("bad".to_string());
    /// assert_eq!(failed.fmap(|n| n + 1), left("bad".to_string()));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every held value with `value`.
    ///
    /// ```rust
    /// use adtkit::adt::{none, some};
    /// use adtkit::typeclass::Functor;
    ///
    /// assert_eq!(some(5).replace("replaced"), some("replaced"));
    /// assert_eq!(none::<i32>().replace("replaced"), none());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the held values, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<E, A> Functor for Either<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<E, B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<A: Clone> Functor for List<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> List<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}
