//! Point-free forms of `fmap` and `flat_map`.
//!
//! `lift(f)` turns a function on elements into a reusable function on
//! containers, so it can be passed to `compose!`/`pipe!` without naming the
//! container argument.

use super::functor::Functor;
use super::monad::Monad;

/// Lifts `function` into a function over any [`Functor`] `M`.
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::{none, some, Maybe};
/// use adtkit::typeclass::lift;
///
/// let double = lift::<Maybe<i32>, _, _>(|x: i32| x * 2);
/// assert_eq!(double(some(3)), some(6));
/// assert_eq!(double(none()), none());
/// ```
pub fn lift<M, B, F>(function: F) -> impl Fn(M) -> M::WithType<B>
where
    M: Functor,
    F: Fn(M::Inner) -> B,
{
    move |container| container.fmap(&function)
}

/// Lifts a wrapped-result `function` into a function over any [`Monad`] `M`.
///
/// # Examples
///
/// ```rust
/// use adtkit::adt::{none, some, Maybe};
/// use adtkit::typeclass::lift_flat;
///
/// let safe_divide = lift_flat::<Maybe<i32>, _, _>(|n: i32| {
///     if n == 0 { none() } else { some(10 / n) }
/// });
/// assert_eq!(safe_divide(some(5)), some(2));
/// assert_eq!(safe_divide(some(0)), none());
/// ```
pub fn lift_flat<M, B, F>(function: F) -> impl Fn(M) -> M::WithType<B>
where
    M: Monad,
    B: Clone,
    F: Fn(M::Inner) -> M::WithType<B>,
{
    move |container| container.flat_map(&function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adt::{Either, List, left, right};
    use crate::list;
    use rstest::rstest;

    #[rstest]
    fn lifted_function_is_reusable_across_lists() {
        let increment = lift::<List<i32>, _, _>(|x: i32| x + 1);
        assert_eq!(increment(list![1, 2]), list![2, 3]);
        assert_eq!(increment(list![]), list![]);
    }

    #[rstest]
    fn lift_flat_over_either_short_circuits() {
        let positive = lift_flat::<Either<String, i32>, _, _>(|n: i32| {
            if n > 0 {
                right(n)
            } else {
                left(format!("{n} is not positive"))
            }
        });
        assert_eq!(positive(right(3)), right(3));
        assert_eq!(positive(right(-1)), left("-1 is not positive".to_string()));
        assert_eq!(positive(left("earlier".to_string())), left("earlier".to_string()));
    }
}
