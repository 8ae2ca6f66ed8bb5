//! Law checkers for descriptors.
//!
//! A descriptor's trait impls are a promise the compiler cannot check. These
//! functions test the promise on concrete values and are meant to be driven
//! by property tests:
//!
//! | Law | Statement |
//! |-----|-----------|
//! | associativity | `concat(concat(a, b), c) == concat(a, concat(b, c))` |
//! | identity | `concat(empty, a) == a == concat(a, empty)` |
//! | inverse | `concat(a, inverse(a)) == empty == concat(inverse(a), a)` |
//!
//! ```rust
//! use adtkit::algebra::{has_identity, is_associative, magma, monoid};
//!
//! let subtraction = magma(|a: i32, b: i32| a - b);
//! assert!(!is_associative(&subtraction, 1, 2, 3));
//!
//! let addition = monoid(|a: i32, b: i32| a + b, 0);
//! assert!(is_associative(&addition, 1, 2, 3));
//! assert!(has_identity(&addition, 42));
//! ```

use super::structure::{Group, Magma, Monoid};

/// Whether `concat` groups the same either way for `a`, `b`, `c`.
///
/// Takes any [`Magma`], so a candidate operation can be checked before it is
/// declared a semigroup.
pub fn is_associative<M>(magma: &M, a: M::Carrier, b: M::Carrier, c: M::Carrier) -> bool
where
    M: Magma + ?Sized,
    M::Carrier: Clone + PartialEq,
{
    let grouped_left = magma.concat(magma.concat(a.clone(), b.clone()), c.clone());
    let grouped_right = magma.concat(a, magma.concat(b, c));
    grouped_left == grouped_right
}

/// Whether `empty` is a two-sided identity for `a`.
pub fn has_identity<M>(monoid: &M, a: M::Carrier) -> bool
where
    M: Monoid + ?Sized,
    M::Carrier: Clone + PartialEq,
{
    let left = monoid.concat(monoid.empty(), a.clone());
    let right = monoid.concat(a.clone(), monoid.empty());
    left == a && right == a
}

/// Whether `inverse(a)` cancels `a` from both sides.
pub fn has_inverse<G>(group: &G, a: G::Carrier) -> bool
where
    G: Group + ?Sized,
    G::Carrier: Clone + PartialEq,
{
    let inverse = group.inverse(a.clone());
    let empty = group.empty();
    group.concat(a.clone(), inverse.clone()) == empty && group.concat(inverse, a) == empty
}
