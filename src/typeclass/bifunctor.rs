//! Bifunctor type class - mapping over two type parameters.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! `Either::map_left` is `first` and `Either::map` is `second`.

use crate::adt::Either;

/// A type with two parameters that can both be mapped over.
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::{left, right, Either};
/// use adtkit::typeclass::Bifunctor;
///
/// fn describe<T>(value: T) -> T::Target<String, String>
/// where
///     T: Bifunctor<i32, i32>,
/// {
///     value.bimap(|e| format!("error {e}"), |x| format!("value {x}"))
/// }
///
/// assert_eq!(describe(left::<i32, i32>(1)), left("error 1".to_string()));
/// assert_eq!(describe(right::<i32, i32>(2)), right("value 2".to_string()));
/// ```
pub trait Bifunctor<A, B> {
    /// The same constructor with both parameters replaced.
    type Target<C, D>;

    /// Maps both parameters at once.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps the first parameter only.
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        Self: Sized,
        F: FnOnce(A) -> C,
    {
        self.bimap(function, |value| value)
    }

    /// Maps the second parameter only.
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        Self: Sized,
        G: FnOnce(B) -> D,
    {
        self.bimap(|value| value, function)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }
}
