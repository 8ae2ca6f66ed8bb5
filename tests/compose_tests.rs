//! Tests for `compose`, `pipe` and their n-ary forms.

use adtkit::adt::{Maybe, some};
use adtkit::compose::{
    Endomorphism, compose, compose_many, constant, flip, identity, pipe, pipe_many,
};
use adtkit::typeclass::lift;
use adtkit::{compose, pipe};
use proptest::prelude::*;
use rstest::rstest;

fn add_one(x: i32) -> i32 {
    x.wrapping_add(1)
}

fn double(x: i32) -> i32 {
    x.wrapping_mul(2)
}

fn negate(x: i32) -> i32 {
    x.wrapping_neg()
}

fn boxed(steps: &[fn(i32) -> i32]) -> Vec<Endomorphism<'static, i32>> {
    steps
        .iter()
        .map(|step| Box::new(*step) as Endomorphism<'static, i32>)
        .collect()
}

// =============================================================================
// Fixed arity
// =============================================================================

#[rstest]
fn pipe_and_compose_read_in_opposite_orders() {
    assert_eq!(pipe(add_one, double)(5), 12);
    assert_eq!(compose(double, add_one)(5), 12);
    assert_eq!(pipe!(add_one, double)(5), 12);
    assert_eq!(compose!(double, add_one)(5), 12);
}

#[rstest]
fn macros_accept_many_stages() {
    let stages = pipe!(add_one, double, negate, |x: i32| x.to_string());
    assert_eq!(stages(4), "-10");
    let reversed = compose!(|x: i32| x.to_string(), negate, double, add_one);
    assert_eq!(reversed(4), "-10");
}

#[rstest]
fn zero_functions_give_identity() {
    let nothing_piped = pipe!();
    let nothing_composed = compose!();
    assert_eq!(nothing_piped(7), 7);
    assert_eq!(nothing_composed("text"), "text");
}

#[rstest]
fn single_function_is_itself() {
    assert_eq!(pipe!(double)(21), 42);
    assert_eq!(compose!(double)(21), 42);
}

#[rstest]
fn lifted_functions_compose() {
    let pipeline = pipe!(lift::<Maybe<i32>, _, _>(add_one), lift::<Maybe<i32>, _, _>(double));
    assert_eq!(pipeline(some(1)), some(4));
}

#[rstest]
fn helper_combinators() {
    let always_seven = constant::<_, &str>(7);
    assert_eq!(always_seven("anything"), 7);
    let divide = |a: i32, b: i32| a / b;
    assert_eq!(flip(divide)(2, 10), 5);
}

// =============================================================================
// Runtime sequences
// =============================================================================

#[rstest]
fn many_forms_order_their_stages() {
    assert_eq!(compose_many(boxed(&[add_one, double]))(5), 11);
    assert_eq!(pipe_many(boxed(&[add_one, double]))(5), 12);
}

#[rstest]
fn many_forms_of_nothing_are_identity() {
    assert_eq!(compose_many(Vec::<Endomorphism<i32>>::new())(9), 9);
    assert_eq!(pipe_many(std::iter::empty::<Endomorphism<i32>>())(9), 9);
}

#[rstest]
fn many_forms_may_borrow() {
    let offset = 10;
    let steps: Vec<Endomorphism<'_, i32>> = vec![Box::new(|x: i32| x + offset), Box::new(double)];
    assert_eq!(pipe_many(steps)(1), 22);
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_is_associative(x in any::<i32>()) {
        let left = compose(compose(negate, double), add_one);
        let right = compose(negate, compose(double, add_one));
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_identity_is_a_unit(x in any::<i32>()) {
        prop_assert_eq!(compose(identity, double)(x), double(x));
        prop_assert_eq!(compose(double, identity)(x), double(x));
    }

    #[test]
    fn prop_compose_many_matches_nested_compose(x in any::<i32>()) {
        let nested = compose(add_one, compose(double, negate));
        let many = compose_many(boxed(&[add_one, double, negate]));
        prop_assert_eq!(many(x), nested(x));
    }

    #[test]
    fn prop_pipe_many_is_reversed_compose_many(x in any::<i32>()) {
        let steps: [fn(i32) -> i32; 3] = [add_one, double, negate];
        let mut reversed = steps;
        reversed.reverse();
        prop_assert_eq!(pipe_many(boxed(&steps))(x), compose_many(boxed(&reversed))(x));
    }
}
