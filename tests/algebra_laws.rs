//! Property-based tests for the algebraic structure laws.
//!
//! - **Associativity** (Semigroup): `concat(concat(a, b), c) == concat(a, concat(b, c))`
//! - **Identity** (Monoid): `concat(empty, a) == a == concat(a, empty)`
//! - **Inverse** (Group): `concat(a, inverse(a)) == empty`
//! - **combine_all**: of nothing is `empty`, of one element is that element

use adtkit::adt::{List, Maybe};
use adtkit::algebra::{
    All, Any, Dual, First, Group, Last, ListConcat, Max, MaybeMonoid, Min, Monoid, PairOf, Product,
    StringConcat, Sum, VecConcat, Xor, combine_all, has_identity, has_inverse, is_associative,
};
use proptest::prelude::*;

fn monoid_of_nothing_and_one<M>(monoid: &M, value: M::Carrier) -> bool
where
    M: Monoid,
    M::Carrier: Clone + PartialEq,
{
    combine_all(monoid, Vec::new()) == monoid.empty()
        && combine_all(monoid, [value.clone()]) == value
}

// =============================================================================
// Numbers
// =============================================================================

proptest! {
    #[test]
    fn prop_sum_is_a_group(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let sum = Sum::<i32>::new();
        prop_assert!(is_associative(&sum, a, b, c));
        prop_assert!(has_identity(&sum, a));
        prop_assert!(has_inverse(&sum, a));
        prop_assert!(monoid_of_nothing_and_one(&sum, a));
    }

    #[test]
    fn prop_unsigned_sum_is_a_group(a in any::<u64>(), b in any::<u64>(), c in any::<u64>()) {
        let sum = Sum::<u64>::new();
        prop_assert!(is_associative(&sum, a, b, c));
        prop_assert!(has_inverse(&sum, a));
    }

    #[test]
    fn prop_product_is_a_monoid(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let product = Product::<i32>::new();
        prop_assert!(is_associative(&product, a, b, c));
        prop_assert!(has_identity(&product, a));
        prop_assert!(monoid_of_nothing_and_one(&product, a));
    }

    #[test]
    fn prop_max_and_min_are_monoids(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        prop_assert!(is_associative(&Max::new(), a, b, c));
        prop_assert!(is_associative(&Min::new(), a, b, c));
        prop_assert!(has_identity(&Max::new(), a));
        prop_assert!(has_identity(&Min::new(), a));
    }

    #[test]
    fn prop_pow_matches_wrapping_multiplication(a in any::<i32>(), exponent in -1000_i64..1000) {
        let expected = a.wrapping_mul(i32::try_from(exponent).unwrap_or_default());
        prop_assert_eq!(Sum::new().pow(a, exponent), expected);
    }
}

// =============================================================================
// Booleans
// =============================================================================

proptest! {
    #[test]
    fn prop_boolean_monoids(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        prop_assert!(is_associative(&All, a, b, c));
        prop_assert!(is_associative(&Any, a, b, c));
        prop_assert!(is_associative(&Xor, a, b, c));
        prop_assert!(has_identity(&All, a));
        prop_assert!(has_identity(&Any, a));
        prop_assert!(has_inverse(&Xor, a));
    }
}

// =============================================================================
// Collections
// =============================================================================

proptest! {
    #[test]
    fn prop_string_concat_is_a_monoid(a in ".{0,6}", b in ".{0,6}", c in ".{0,6}") {
        prop_assert!(is_associative(&StringConcat, a.clone(), b, c));
        prop_assert!(has_identity(&StringConcat, a.clone()));
        prop_assert!(monoid_of_nothing_and_one(&StringConcat, a));
    }

    #[test]
    fn prop_vec_and_list_concat_are_monoids(
        a in prop::collection::vec(any::<u8>(), 0..6),
        b in prop::collection::vec(any::<u8>(), 0..6),
        c in prop::collection::vec(any::<u8>(), 0..6),
    ) {
        let as_list = |v: &Vec<u8>| v.iter().copied().collect::<List<u8>>();
        let lists = ListConcat::new();
        prop_assert!(is_associative(&lists, as_list(&a), as_list(&b), as_list(&c)));
        prop_assert!(has_identity(&lists, as_list(&a)));

        let vectors = VecConcat::new();
        prop_assert!(is_associative(&vectors, a.clone(), b, c));
        prop_assert!(has_identity(&vectors, a));
    }
}

// =============================================================================
// Combinators
// =============================================================================

proptest! {
    #[test]
    fn prop_first_and_last_are_associative(a in any::<i8>(), b in any::<i8>(), c in any::<i8>()) {
        prop_assert!(is_associative(&First::new(), a, b, c));
        prop_assert!(is_associative(&Last::new(), a, b, c));
    }

    #[test]
    fn prop_maybe_monoid_laws(
        a in any::<Option<i16>>(),
        b in any::<Option<i16>>(),
        c in any::<Option<i16>>(),
    ) {
        let lifted = MaybeMonoid::new(Last::new());
        let (a, b, c) = (Maybe::from(a), Maybe::from(b), Maybe::from(c));
        prop_assert!(is_associative(&lifted, a, b, c));
        prop_assert!(has_identity(&lifted, a));
    }

    #[test]
    fn prop_pair_and_dual_preserve_laws(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let pair = PairOf::new(Sum::<i64>::new(), Dual::new(Sum::<i64>::new()));
        prop_assert!(is_associative(&pair, (a, b), (b, c), (c, a)));
        prop_assert!(has_identity(&pair, (a, b)));
        prop_assert!(has_inverse(&pair, (a, c)));
    }
}
