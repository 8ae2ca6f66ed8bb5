//! Descriptors built from other descriptors, plus a few that keep one
//! operand.

use std::fmt;
use std::marker::PhantomData;

use super::structure::{Group, Magma, Monoid, Semigroup};
use crate::adt::Maybe;
use crate::compose::{Endomorphism, compose, identity};

// =============================================================================
// First / Last
// =============================================================================

phantom_descriptor! {
    /// Keeps the left operand. A semigroup with no identity.
    First
}

phantom_descriptor! {
    /// Keeps the right operand. A semigroup with no identity.
    Last
}

impl<T> Magma for First<T> {
    type Carrier = T;

    #[inline]
    fn concat(&self, left: T, _right: T) -> T {
        left
    }
}

impl<T> Semigroup for First<T> {}

impl<T> Magma for Last<T> {
    type Carrier = T;

    #[inline]
    fn concat(&self, _left: T, right: T) -> T {
        right
    }
}

impl<T> Semigroup for Last<T> {}

// =============================================================================
// MaybeMonoid
// =============================================================================

/// Lifts a semigroup over `T` to a monoid over `Maybe<T>`, with `None` as
/// identity.
///
/// Two `Some` values are combined by the inner semigroup; a `None` operand
/// is skipped.
///
/// ```rust
/// use adtkit::adt::{none, some};
/// use adtkit::algebra::{combine_all, First, MaybeMonoid};
///
/// let first_present = MaybeMonoid::new(First::new());
/// assert_eq!(combine_all(&first_present, [none(), some(2), some(3)]), some(2));
/// assert_eq!(combine_all(&first_present, Vec::new()), none::<i32>());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MaybeMonoid<S> {
    inner: S,
}

impl<S> MaybeMonoid<S> {
    /// Wraps `inner`.
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Semigroup> Magma for MaybeMonoid<S> {
    type Carrier = Maybe<S::Carrier>;

    fn concat(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier {
        match (left, right) {
            (Maybe::Some(left), Maybe::Some(right)) => Maybe::Some(self.inner.concat(left, right)),
            (Maybe::Some(value), Maybe::None) | (Maybe::None, Maybe::Some(value)) => {
                Maybe::Some(value)
            }
            (Maybe::None, Maybe::None) => Maybe::None,
        }
    }
}

impl<S: Semigroup> Semigroup for MaybeMonoid<S> {}

impl<S: Semigroup> Monoid for MaybeMonoid<S> {
    fn empty(&self) -> Self::Carrier {
        Maybe::None
    }
}

// =============================================================================
// PairOf
// =============================================================================

/// The product of two structures, acting component-wise on pairs.
///
/// ```rust
/// use adtkit::algebra::{combine_all, Max, PairOf, Sum};
///
/// let sum_and_max = PairOf::new(Sum::<i32>::new(), Max::<i32>::new());
/// let values = [3, 9, 4].map(|x| (x, x));
/// assert_eq!(combine_all(&sum_and_max, values), (16, 9));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PairOf<M, N> {
    first: M,
    second: N,
}

impl<M, N> PairOf<M, N> {
    /// Pairs two descriptors.
    pub const fn new(first: M, second: N) -> Self {
        Self { first, second }
    }
}

impl<M: Magma, N: Magma> Magma for PairOf<M, N> {
    type Carrier = (M::Carrier, N::Carrier);

    fn concat(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier {
        (
            self.first.concat(left.0, right.0),
            self.second.concat(left.1, right.1),
        )
    }
}

impl<M: Semigroup, N: Semigroup> Semigroup for PairOf<M, N> {}

impl<M: Monoid, N: Monoid> Monoid for PairOf<M, N> {
    fn empty(&self) -> Self::Carrier {
        (self.first.empty(), self.second.empty())
    }
}

impl<M: Group, N: Group> Group for PairOf<M, N> {
    fn inverse(&self, value: Self::Carrier) -> Self::Carrier {
        (self.first.inverse(value.0), self.second.inverse(value.1))
    }
}

// =============================================================================
// Dual
// =============================================================================

/// The same structure with the operands of `concat` swapped.
///
/// ```rust
/// use adtkit::algebra::{Dual, Magma, StringConcat};
///
/// let reversed = Dual::new(StringConcat);
/// assert_eq!(reversed.concat("a".into(), "b".into()), "ba");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Dual<M> {
    inner: M,
}

impl<M> Dual<M> {
    /// Wraps `inner`.
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: Magma> Magma for Dual<M> {
    type Carrier = M::Carrier;

    fn concat(&self, left: M::Carrier, right: M::Carrier) -> M::Carrier {
        self.inner.concat(right, left)
    }
}

impl<M: Semigroup> Semigroup for Dual<M> {}

impl<M: Monoid> Monoid for Dual<M> {
    fn empty(&self) -> M::Carrier {
        self.inner.empty()
    }
}

impl<M: Group> Group for Dual<M> {
    fn inverse(&self, value: M::Carrier) -> M::Carrier {
        self.inner.inverse(value)
    }
}

// =============================================================================
// Endo
// =============================================================================

/// Endofunctions under composition, with `identity` as identity.
///
/// `concat(f, g)` is `compose(f, g)`: `g` runs first.
///
/// ```rust
/// use adtkit::algebra::{combine_all, Endo};
/// use adtkit::compose::Endomorphism;
///
/// let steps: Vec<Endomorphism<i32>> = vec![Box::new(|x: i32| x + 1), Box::new(|x: i32| x * 2)];
/// let combined = combine_all(&Endo::new(), steps);
/// assert_eq!(combined(5), 11);
/// ```
pub struct Endo<'a, A>(PhantomData<fn(&'a A)>);

impl<A> Endo<'_, A> {
    /// Creates the descriptor.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<A> Default for Endo<'_, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Endo<'_, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Endo")
    }
}

impl<'a, A: 'a> Magma for Endo<'a, A> {
    type Carrier = Endomorphism<'a, A>;

    fn concat(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier {
        Box::new(compose(left, right))
    }
}

impl<'a, A: 'a> Semigroup for Endo<'a, A> {}

impl<'a, A: 'a> Monoid for Endo<'a, A> {
    fn empty(&self) -> Self::Carrier {
        Box::new(identity::<A>)
    }
}
