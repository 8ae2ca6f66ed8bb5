//! Folding sequences through a descriptor.

use std::num::NonZeroU64;

use super::structure::{Monoid, Semigroup, repeat_concat};
use crate::adt::Maybe;

/// Combines every element of `values`, left to right, starting from
/// `monoid.empty()`.
///
/// An empty sequence yields the identity element.
///
/// # Examples
///
/// ```rust
/// use adtkit::algebra::{combine_all, Product, StringConcat};
///
/// assert_eq!(combine_all(&Product::<i32>::new(), [2, 3, 4]), 24);
/// assert_eq!(combine_all(&Product::<i32>::new(), []), 1);
///
/// let words = ["fold", "ing"].map(String::from);
/// assert_eq!(combine_all(&StringConcat, words), "folding");
/// ```
pub fn combine_all<M, I>(monoid: &M, values: I) -> M::Carrier
where
    M: Monoid + ?Sized,
    I: IntoIterator<Item = M::Carrier>,
{
    values
        .into_iter()
        .fold(monoid.empty(), |accumulator, element| {
            monoid.concat(accumulator, element)
        })
}

/// Combines every element of `values` with a semigroup, which has no identity
/// to fall back on.
///
/// Returns `None` for an empty sequence.
///
/// ```rust
/// use adtkit::adt::{none, some};
/// use adtkit::algebra::{reduce_all, Max};
///
/// assert_eq!(reduce_all(&Max::new(), [3, 8, 1]), some(8));
/// assert_eq!(reduce_all(&Max::<i32>::new(), []), none());
/// ```
pub fn reduce_all<S, I>(semigroup: &S, values: I) -> Maybe<S::Carrier>
where
    S: Semigroup + ?Sized,
    I: IntoIterator<Item = S::Carrier>,
{
    let reduced = values
        .into_iter()
        .reduce(|accumulator, element| semigroup.concat(accumulator, element));
    if reduced.is_none() {
        tracing::trace!(
            descriptor = std::any::type_name::<S>(),
            "reduce_all over an empty sequence"
        );
    }
    Maybe::from(reduced)
}

/// `value` combined with itself `count` times.
///
/// ```rust
/// use std::num::NonZeroU64;
/// use adtkit::algebra::{combine_n, StringConcat};
///
/// let three = NonZeroU64::new(3).unwrap();
/// assert_eq!(combine_n(&StringConcat, "ab".to_string(), three), "ababab");
/// ```
pub fn combine_n<S>(semigroup: &S, value: S::Carrier, count: NonZeroU64) -> S::Carrier
where
    S: Semigroup + ?Sized,
    S::Carrier: Clone,
{
    repeat_concat(semigroup, value, count)
}
