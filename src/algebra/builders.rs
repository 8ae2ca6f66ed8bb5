//! Descriptors assembled from closures.
//!
//! Each builder returns a descriptor that claims exactly the structure its
//! name says: [`semigroup`] promises associativity for the given `concat`,
//! [`monoid`] additionally promises that `empty` is an identity, and
//! [`group`] that `inverse` yields inverses. Nothing checks the promise; use
//! [`laws`](super::laws) in tests.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::algebra::{combine_all, monoid};
//!
//! let addition = monoid(|a: i32, b: i32| a + b, 0);
//! assert_eq!(combine_all(&addition, [1, 2, 3, 4]), 10);
//! assert_eq!(combine_all(&addition, []), 0);
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::structure::{Group, Magma, Monoid, Semigroup};

/// A magma built by [`magma`].
pub struct MagmaFn<C, F> {
    concat: F,
    carrier: PhantomData<fn(C, C) -> C>,
}

/// A semigroup built by [`semigroup`].
pub struct SemigroupFn<C, F> {
    concat: F,
    carrier: PhantomData<fn(C, C) -> C>,
}

/// A monoid built by [`monoid`].
pub struct MonoidFn<C, F> {
    concat: F,
    empty: C,
}

/// A group built by [`group`].
pub struct GroupFn<C, F, I> {
    concat: F,
    empty: C,
    inverse: I,
}

/// A magma whose operation is `concat`.
///
/// ```rust
/// use adtkit::algebra::{magma, Magma};
///
/// // Subtraction is closed but not associative.
/// let subtraction = magma(|a: i32, b: i32| a - b);
/// assert_eq!(subtraction.concat(10, 3), 7);
/// ```
pub const fn magma<C, F>(concat: F) -> MagmaFn<C, F>
where
    F: Fn(C, C) -> C,
{
    MagmaFn {
        concat,
        carrier: PhantomData,
    }
}

/// A semigroup whose associative operation is `concat`.
pub const fn semigroup<C, F>(concat: F) -> SemigroupFn<C, F>
where
    F: Fn(C, C) -> C,
{
    SemigroupFn {
        concat,
        carrier: PhantomData,
    }
}

/// A monoid with operation `concat` and identity `empty`.
pub const fn monoid<C, F>(concat: F, empty: C) -> MonoidFn<C, F>
where
    C: Clone,
    F: Fn(C, C) -> C,
{
    MonoidFn { concat, empty }
}

/// A group with operation `concat`, identity `empty` and `inverse`.
///
/// ```rust
/// use adtkit::algebra::{group, Group, Magma, Monoid};
///
/// // Rotations of a clock face.
/// let clock = group(|a: u8, b: u8| (a + b) % 12, 0, |a: u8| (12 - a) % 12);
/// assert_eq!(clock.concat(9, 5), 2);
/// assert_eq!(clock.concat(9, clock.inverse(9)), clock.empty());
/// ```
pub const fn group<C, F, I>(concat: F, empty: C, inverse: I) -> GroupFn<C, F, I>
where
    C: Clone,
    F: Fn(C, C) -> C,
    I: Fn(C) -> C,
{
    GroupFn {
        concat,
        empty,
        inverse,
    }
}

impl<C, F: Fn(C, C) -> C> Magma for MagmaFn<C, F> {
    type Carrier = C;

    fn concat(&self, left: C, right: C) -> C {
        (self.concat)(left, right)
    }
}

impl<C, F: Fn(C, C) -> C> Magma for SemigroupFn<C, F> {
    type Carrier = C;

    fn concat(&self, left: C, right: C) -> C {
        (self.concat)(left, right)
    }
}

impl<C, F: Fn(C, C) -> C> Semigroup for SemigroupFn<C, F> {}

impl<C, F: Fn(C, C) -> C> Magma for MonoidFn<C, F> {
    type Carrier = C;

    fn concat(&self, left: C, right: C) -> C {
        (self.concat)(left, right)
    }
}

impl<C, F: Fn(C, C) -> C> Semigroup for MonoidFn<C, F> {}

impl<C: Clone, F: Fn(C, C) -> C> Monoid for MonoidFn<C, F> {
    fn empty(&self) -> C {
        self.empty.clone()
    }
}

impl<C, F: Fn(C, C) -> C, I> Magma for GroupFn<C, F, I> {
    type Carrier = C;

    fn concat(&self, left: C, right: C) -> C {
        (self.concat)(left, right)
    }
}

impl<C, F: Fn(C, C) -> C, I> Semigroup for GroupFn<C, F, I> {}

impl<C: Clone, F: Fn(C, C) -> C, I> Monoid for GroupFn<C, F, I> {
    fn empty(&self) -> C {
        self.empty.clone()
    }
}

impl<C: Clone, F: Fn(C, C) -> C, I: Fn(C) -> C> Group for GroupFn<C, F, I> {
    fn inverse(&self, value: C) -> C {
        (self.inverse)(value)
    }
}

impl<C, F> fmt::Debug for MagmaFn<C, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("MagmaFn").finish_non_exhaustive()
    }
}

impl<C, F> fmt::Debug for SemigroupFn<C, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SemigroupFn").finish_non_exhaustive()
    }
}

impl<C: fmt::Debug, F> fmt::Debug for MonoidFn<C, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MonoidFn")
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}

impl<C: fmt::Debug, F, I> fmt::Debug for GroupFn<C, F, I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("GroupFn")
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}
