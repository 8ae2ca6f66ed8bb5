//! Tests for the algebraic structure descriptors.

use std::num::NonZeroU64;

use adtkit::adt::{List, Maybe, none, some};
use adtkit::algebra::{
    All, Any, Dual, Endo, First, Group, Last, ListConcat, Magma, Max, MaybeMonoid, Min, Monoid,
    PairOf, Product, StringConcat, Sum, VecConcat, Xor, combine_all, combine_n, group, has_inverse,
    magma, monoid, reduce_all, semigroup,
};
use adtkit::compose::Endomorphism;
use adtkit::list;
use rstest::rstest;

// =============================================================================
// Registry as configuration
// =============================================================================

const TOTAL: Sum<i64> = Sum::new();
const EVERY: All = All;

fn summarize<M>(monoid: &M, values: Vec<M::Carrier>) -> M::Carrier
where
    M: Monoid,
{
    combine_all(monoid, values)
}

#[rstest]
fn one_algorithm_many_descriptors() {
    assert_eq!(summarize(&Sum::new(), vec![2, 3, 4]), 9);
    assert_eq!(summarize(&Product::new(), vec![2, 3, 4]), 24);
    assert_eq!(summarize(&Max::new(), vec![2, 3, 4]), 4);
    assert_eq!(summarize(&Min::new(), vec![2, 3, 4]), 2);
}

#[rstest]
fn const_descriptors() {
    assert_eq!(combine_all(&TOTAL, [10, 20, 30]), 60);
    assert!(combine_all(&EVERY, [true, true]));
    assert!(combine_all(&EVERY, []));
}

// =============================================================================
// combine_all / reduce_all / combine_n
// =============================================================================

#[rstest]
fn combine_all_of_nothing_is_empty() {
    assert_eq!(combine_all(&StringConcat, Vec::new()), "");
    assert_eq!(combine_all(&VecConcat::<u8>::new(), Vec::new()), Vec::<u8>::new());
    assert_eq!(combine_all(&ListConcat::<u8>::new(), Vec::new()), List::new());
    assert!(!combine_all(&Any, []));
}

#[rstest]
fn combine_all_of_one_is_that_value() {
    assert_eq!(combine_all(&StringConcat, ["solo".to_string()]), "solo");
    assert_eq!(combine_all(&Max::<i32>::new(), [-3]), -3);
}

#[rstest]
fn collections_concatenate_in_order() {
    let lists = [list![1, 2], list![], list![3]];
    assert_eq!(combine_all(&ListConcat::new(), lists), list![1, 2, 3]);
}

#[rstest]
fn reduce_all_without_identity() {
    assert_eq!(reduce_all(&First::new(), vec![3, 1, 2]), some(3));
    assert_eq!(reduce_all(&Last::new(), vec![3, 1, 2]), some(2));
    assert_eq!(reduce_all(&Last::<i32>::new(), vec![]), none());
}

#[rstest]
fn combine_n_repeats_a_value() {
    let five = NonZeroU64::new(5).expect("five is non-zero");
    assert_eq!(combine_n(&StringConcat, "ab".to_string(), five), "ababababab");
    assert_eq!(combine_n(&Product::new(), 2_u64, five), 32);
}

// =============================================================================
// Groups
// =============================================================================

#[rstest]
#[case(4, 3, 12)]
#[case(4, 0, 0)]
#[case(4, -3, -12)]
fn group_pow(#[case] value: i32, #[case] exponent: i64, #[case] expected: i32) {
    assert_eq!(Sum::new().pow(value, exponent), expected);
}

#[rstest]
fn integer_sum_is_closed_at_the_bounds() {
    let sum = Sum::<i32>::new();
    assert_eq!(combine_all(&sum, [i32::MAX, 1]), i32::MIN);
    assert!(has_inverse(&sum, i32::MIN));
    assert_eq!(sum.pow(i32::MAX, 2), -2);
    assert_eq!(sum.pow(i32::MIN, -1), i32::MIN);

    let twice = NonZeroU64::new(2).expect("two is non-zero");
    assert_eq!(combine_n(&Sum::<u8>::new(), 200, twice), 144);
    assert_eq!(combine_all(&Product::<i64>::new(), [i64::MAX, 2]), -2);
}

#[rstest]
fn xor_is_its_own_inverse() {
    assert!(Xor.inverse(true));
    assert!(!Xor.concat(true, Xor.inverse(true)));
    assert!(Xor.pow(true, 2) == Xor.empty());
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn maybe_monoid_collects_present_values() {
    let values = [some(3), none(), some(9), none()];
    assert_eq!(combine_all(&MaybeMonoid::new(Max::new()), values), some(9));
    let nothing: [Maybe<i32>; 0] = [];
    assert_eq!(combine_all(&MaybeMonoid::new(Max::new()), nothing), none());
}

#[rstest]
fn pair_of_computes_two_summaries_in_one_pass() {
    let count_and_total = PairOf::new(Sum::<usize>::new(), Sum::<i32>::new());
    let values = [5, -2, 7].map(|value| (1, value));
    assert_eq!(combine_all(&count_and_total, values), (3, 10));
}

#[rstest]
fn dual_reverses_order() {
    let words = ["a", "b", "c"].map(String::from);
    assert_eq!(combine_all(&Dual::new(StringConcat), words), "cba");
}

#[rstest]
fn endo_composes_right_to_left() {
    let steps: Vec<Endomorphism<'_, i32>> =
        vec![Box::new(|x: i32| x - 1), Box::new(|x: i32| x * 10), Box::new(|x: i32| x + 2)];
    let combined = combine_all(&Endo::new(), steps);
    assert_eq!(combined(1), 29);
}

// =============================================================================
// Closure-built descriptors
// =============================================================================

#[rstest]
fn monoid_built_from_closures() {
    let addition = monoid(|a: i32, b: i32| a + b, 0);
    assert_eq!(combine_all(&addition, [1, 2, 3, 4]), 10);
    assert_eq!(combine_all(&addition, []), 0);
}

#[rstest]
fn semigroup_and_magma_built_from_closures() {
    let gcd = semigroup(|mut a: u32, mut b: u32| {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    });
    assert_eq!(reduce_all(&gcd, [12, 18, 30]), some(6));

    let midpoint = magma(|a: f64, b: f64| (a + b) / 2.0);
    assert!((midpoint.concat(1.0, 3.0) - 2.0).abs() < f64::EPSILON);
}

#[rstest]
fn group_built_from_closures() {
    let modular = group(|a: u8, b: u8| (a + b) % 7, 0, |a: u8| (7 - a) % 7);
    assert_eq!(modular.inverse(3), 4);
    assert_eq!(modular.pow(3, -1), 4);
    assert_eq!(modular.pow(3, 7), 0);
}
