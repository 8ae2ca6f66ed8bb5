//! Built-in descriptors for numbers, booleans and collections.
//!
//! Every descriptor is a zero-sized value constructible in `const` context,
//! so it can be held as read-only configuration:
//!
//! ```rust
//! use adtkit::algebra::{combine_all, Sum};
//!
//! const TOTAL: Sum<u32> = Sum::new();
//! assert_eq!(combine_all(&TOTAL, [1, 2, 3, 4]), 10);
//! ```
//!
//! Floating-point addition and multiplication are only approximately
//! associative; `Sum<f64>` and `Product<f64>` are provided for convenience
//! and may differ in the last bits depending on grouping.

use super::structure::{Additive, Bounded, Group, Magma, Monoid, Multiplicative, Semigroup};
use crate::adt::List;

// =============================================================================
// Numbers
// =============================================================================

phantom_descriptor! {
    /// Addition over an [`Additive`] carrier. A group, with zero as identity
    /// and negation as inverse.
    ///
    /// Integer carriers wrap on overflow, so every `i32` has an inverse,
    /// `i32::MIN` included.
    ///
    /// ```rust
    /// use adtkit::algebra::{has_inverse, Group, Magma, Sum};
    ///
    /// let sum = Sum::<i32>::new();
    /// assert_eq!(sum.inverse(5), -5);
    /// assert_eq!(sum.concat(i32::MAX, 1), i32::MIN);
    /// assert!(has_inverse(&sum, i32::MIN));
    /// ```
    Sum
}

impl<T: Additive> Magma for Sum<T> {
    type Carrier = T;

    #[inline]
    fn concat(&self, left: T, right: T) -> T {
        left.plus(right)
    }
}

impl<T: Additive> Semigroup for Sum<T> {}

impl<T: Additive> Monoid for Sum<T> {
    #[inline]
    fn empty(&self) -> T {
        T::ZERO
    }
}

impl<T: Additive> Group for Sum<T> {
    #[inline]
    fn inverse(&self, value: T) -> T {
        value.negated()
    }
}

phantom_descriptor! {
    /// Multiplication over a [`Multiplicative`] carrier. A monoid with one
    /// as identity; integer carriers wrap on overflow.
    Product
}

impl<T: Multiplicative> Magma for Product<T> {
    type Carrier = T;

    #[inline]
    fn concat(&self, left: T, right: T) -> T {
        left.times(right)
    }
}

impl<T: Multiplicative> Semigroup for Product<T> {}

impl<T: Multiplicative> Monoid for Product<T> {
    #[inline]
    fn empty(&self) -> T {
        T::ONE
    }
}

phantom_descriptor! {
    /// The larger of two values. A monoid with `MIN_VALUE` as identity for
    /// [`Bounded`] carriers.
    Max
}

impl<T: Ord> Magma for Max<T> {
    type Carrier = T;

    #[inline]
    fn concat(&self, left: T, right: T) -> T {
        left.max(right)
    }
}

impl<T: Ord> Semigroup for Max<T> {}

impl<T: Ord + Bounded> Monoid for Max<T> {
    #[inline]
    fn empty(&self) -> T {
        T::MIN_VALUE
    }
}

phantom_descriptor! {
    /// The smaller of two values. A monoid with `MAX_VALUE` as identity for
    /// [`Bounded`] carriers.
    Min
}

impl<T: Ord> Magma for Min<T> {
    type Carrier = T;

    #[inline]
    fn concat(&self, left: T, right: T) -> T {
        left.min(right)
    }
}

impl<T: Ord> Semigroup for Min<T> {}

impl<T: Ord + Bounded> Monoid for Min<T> {
    #[inline]
    fn empty(&self) -> T {
        T::MAX_VALUE
    }
}

// =============================================================================
// Booleans
// =============================================================================

/// Conjunction, with `true` as identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct All;

impl Magma for All {
    type Carrier = bool;

    #[inline]
    fn concat(&self, left: bool, right: bool) -> bool {
        left && right
    }
}

impl Semigroup for All {}

impl Monoid for All {
    #[inline]
    fn empty(&self) -> bool {
        true
    }
}

/// Disjunction, with `false` as identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Any;

impl Magma for Any {
    type Carrier = bool;

    #[inline]
    fn concat(&self, left: bool, right: bool) -> bool {
        left || right
    }
}

impl Semigroup for Any {}

impl Monoid for Any {
    #[inline]
    fn empty(&self) -> bool {
        false
    }
}

/// Exclusive or. A group: every value is its own inverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xor;

impl Magma for Xor {
    type Carrier = bool;

    #[inline]
    fn concat(&self, left: bool, right: bool) -> bool {
        left ^ right
    }
}

impl Semigroup for Xor {}

impl Monoid for Xor {
    #[inline]
    fn empty(&self) -> bool {
        false
    }
}

impl Group for Xor {
    #[inline]
    fn inverse(&self, value: bool) -> bool {
        value
    }
}

// =============================================================================
// Collections
// =============================================================================

/// String concatenation, with the empty string as identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringConcat;

impl Magma for StringConcat {
    type Carrier = String;

    #[inline]
    fn concat(&self, mut left: String, right: String) -> String {
        left.push_str(&right);
        left
    }
}

impl Semigroup for StringConcat {}

impl Monoid for StringConcat {
    #[inline]
    fn empty(&self) -> String {
        String::new()
    }
}

phantom_descriptor! {
    /// `Vec` concatenation, with the empty vector as identity.
    VecConcat
}

impl<T> Magma for VecConcat<T> {
    type Carrier = Vec<T>;

    #[inline]
    fn concat(&self, mut left: Vec<T>, mut right: Vec<T>) -> Vec<T> {
        left.append(&mut right);
        left
    }
}

impl<T> Semigroup for VecConcat<T> {}

impl<T> Monoid for VecConcat<T> {
    #[inline]
    fn empty(&self) -> Vec<T> {
        Vec::new()
    }
}

phantom_descriptor! {
    /// Persistent [`List`] concatenation, with `Nil` as identity. The right
    /// operand is shared as the tail of the result.
    ListConcat
}

impl<T: Clone> Magma for ListConcat<T> {
    type Carrier = List<T>;

    #[inline]
    fn concat(&self, left: List<T>, right: List<T>) -> List<T> {
        left.append(&right)
    }
}

impl<T: Clone> Semigroup for ListConcat<T> {}

impl<T: Clone> Monoid for ListConcat<T> {
    #[inline]
    fn empty(&self) -> List<T> {
        List::new()
    }
}
