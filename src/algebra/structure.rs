//! The descriptor hierarchy: Magma, Semigroup, Monoid, Group.
//!
//! A descriptor is a value that bundles the operations of an algebraic
//! structure over a carrier type. It owns no carrier data, so the same
//! descriptor can be shared freely and built in `const` context.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of the carrier:
//!
//! ```text
//! Semigroup: concat(concat(a, b), c) == concat(a, concat(b, c))
//! Monoid:    concat(empty, a) == a == concat(a, empty)
//! Group:     concat(a, inverse(a)) == empty == concat(inverse(a), a)
//! ```
//!
//! The type system cannot check these; implementing the trait is the
//! promise. [`laws`](super::laws) provides checkers for property tests.

use std::num::NonZeroU64;

/// A closed binary operation over [`Carrier`](Self::Carrier).
///
/// # Examples
///
/// ```rust
/// use adtkit::algebra::{Magma, Sum};
///
/// assert_eq!(Sum::<i32>::new().concat(2, 3), 5);
/// ```
pub trait Magma {
    /// The set the operation is closed over.
    type Carrier;

    /// Combines two carrier values into one.
    fn concat(&self, left: Self::Carrier, right: Self::Carrier) -> Self::Carrier;
}

/// A magma whose `concat` is associative.
pub trait Semigroup: Magma {}

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use adtkit::algebra::{Monoid, Magma, StringConcat};
///
/// let strings = StringConcat;
/// let hello = strings.concat(strings.empty(), "hello".to_string());
/// assert_eq!(hello, "hello");
/// ```
pub trait Monoid: Semigroup {
    /// The identity element of `concat`.
    fn empty(&self) -> Self::Carrier;
}

/// A monoid in which every element has an inverse.
pub trait Group: Monoid {
    /// The element that combines with `value` to give `empty`.
    fn inverse(&self, value: Self::Carrier) -> Self::Carrier;

    /// `value` combined with itself `exponent` times.
    ///
    /// Zero gives `empty`; a negative exponent combines the inverse.
    ///
    /// ```rust
    /// use adtkit::algebra::{Group, Sum};
    ///
    /// let sum = Sum::<i64>::new();
    /// assert_eq!(sum.pow(7, 3), 21);
    /// assert_eq!(sum.pow(7, 0), 0);
    /// assert_eq!(sum.pow(7, -2), -14);
    /// ```
    fn pow(&self, value: Self::Carrier, exponent: i64) -> Self::Carrier
    where
        Self: Sized,
        Self::Carrier: Clone,
    {
        let base = if exponent < 0 {
            self.inverse(value)
        } else {
            value
        };
        match NonZeroU64::new(exponent.unsigned_abs()) {
            Some(count) => repeat_concat(self, base, count),
            None => self.empty(),
        }
    }
}

/// `value` combined with itself `count` times, by repeated squaring.
///
/// Powers of a single element commute with each other under an associative
/// operation, so the order of the partial products is irrelevant.
pub(crate) fn repeat_concat<S>(semigroup: &S, value: S::Carrier, count: NonZeroU64) -> S::Carrier
where
    S: Semigroup + ?Sized,
    S::Carrier: Clone,
{
    let mut remaining = count.get();
    let mut base = value;

    while remaining & 1 == 0 {
        base = semigroup.concat(base.clone(), base);
        remaining >>= 1;
    }

    let mut result = base.clone();
    remaining >>= 1;
    while remaining > 0 {
        base = semigroup.concat(base.clone(), base);
        if remaining & 1 == 1 {
            result = semigroup.concat(result, base.clone());
        }
        remaining >>= 1;
    }
    result
}

// =============================================================================
// Bounded
// =============================================================================

/// Types with a least and a greatest value.
///
/// `Max<T>` uses `MIN_VALUE` as its identity and `Min<T>` uses `MAX_VALUE`.
pub trait Bounded {
    /// The least value.
    const MIN_VALUE: Self;
    /// The greatest value.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($carrier:ty),* $(,)?) => {
        $(
            impl Bounded for $carrier {
                const MIN_VALUE: Self = <$carrier>::MIN;
                const MAX_VALUE: Self = <$carrier>::MAX;
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

// =============================================================================
// Numeric carriers
// =============================================================================

/// Carriers with a total addition, a zero and a negation.
///
/// `Sum<T>` is built on this trait. Integer carriers wrap on overflow, so
/// `plus` never panics and `Sum<i32>` is a group over all of `i32` (the
/// integers modulo 2^32). Unsigned carriers negate modulo 2^n as well.
///
/// ```rust
/// use adtkit::algebra::Additive;
///
/// assert_eq!(i32::MAX.plus(1), i32::MIN);
/// assert_eq!(i32::MIN.negated(), i32::MIN);
/// assert_eq!(3_u8.negated(), 253);
/// ```
pub trait Additive {
    /// The identity of `plus`.
    const ZERO: Self;

    /// `self + other`, wrapping for integers.
    #[must_use]
    fn plus(self, other: Self) -> Self;

    /// The value that adds to `self` to give `ZERO`.
    #[must_use]
    fn negated(self) -> Self;
}

/// Carriers with a total multiplication and a one.
///
/// `Product<T>` is built on this trait. Integer carriers wrap on overflow.
pub trait Multiplicative {
    /// The identity of `times`.
    const ONE: Self;

    /// `self * other`, wrapping for integers.
    #[must_use]
    fn times(self, other: Self) -> Self;
}

macro_rules! impl_wrapping_arithmetic {
    ($($carrier:ty),* $(,)?) => {
        $(
            impl Additive for $carrier {
                const ZERO: Self = 0;

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }

                #[inline]
                fn negated(self) -> Self {
                    self.wrapping_neg()
                }
            }

            impl Multiplicative for $carrier {
                const ONE: Self = 1;

                #[inline]
                fn times(self, other: Self) -> Self {
                    self.wrapping_mul(other)
                }
            }
        )*
    };
}

impl_wrapping_arithmetic!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_arithmetic {
    ($($carrier:ty),* $(,)?) => {
        $(
            impl Additive for $carrier {
                const ZERO: Self = 0.0;

                #[inline]
                fn plus(self, other: Self) -> Self {
                    self + other
                }

                #[inline]
                fn negated(self) -> Self {
                    -self
                }
            }

            impl Multiplicative for $carrier {
                const ONE: Self = 1.0;

                #[inline]
                fn times(self, other: Self) -> Self {
                    self * other
                }
            }
        )*
    };
}

impl_float_arithmetic!(f32, f64);
