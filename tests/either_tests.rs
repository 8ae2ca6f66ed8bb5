//! Integration tests for `Either`.

use adtkit::adt::{Either, left, none, right, some};
use rstest::rstest;

type Parsed = Either<String, i32>;

fn parse(input: &str) -> Parsed {
    input
        .parse::<i32>()
        .map_err(|error| error.to_string())
        .into()
}

// =============================================================================
// Constructors and predicates
// =============================================================================

#[rstest]
fn predicates_follow_variant() {
    let failure: Parsed = left("bad".to_string());
    let success: Parsed = right(1);
    assert!(failure.is_left() && !failure.is_right());
    assert!(success.is_right() && !success.is_left());
}

#[rstest]
fn projections_to_maybe() {
    assert_eq!(right::<&str, i32>(3).right(), some(3));
    assert_eq!(right::<&str, i32>(3).left(), none());
    assert_eq!(left::<&str, i32>("e").left(), some("e"));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn map_touches_only_right() {
    assert_eq!(parse("41").map(|x| x + 1), right(42));
    assert!(parse("x").map(|x| x + 1).is_left());
}

#[rstest]
fn map_left_touches_only_left() {
    let failure: Either<&str, i32> = left("bad input");
    assert_eq!(failure.map_left(str::to_uppercase), left("BAD INPUT".to_string()));

    let success: Either<&str, i32> = right(5);
    assert_eq!(success.map_left(str::to_uppercase), right(5));
}

#[rstest]
#[case(left("e"), left(1))]
#[case(right(10), right(20))]
fn bimap_applies_matching_side(
    #[case] input: Either<&str, i32>,
    #[case] expected: Either<usize, i32>,
) {
    assert_eq!(input.bimap(str::len, |x| x * 2), expected);
}

#[rstest]
fn flat_map_short_circuits() {
    let positive = |x: i32| -> Parsed {
        if x > 0 {
            right(x)
        } else {
            left(format!("{x} is not positive"))
        }
    };
    assert_eq!(parse("5").flat_map(positive), right(5));
    assert_eq!(parse("-5").flat_map(positive), left("-5 is not positive".to_string()));
    assert!(parse("five").flat_map(positive).is_left());
}

#[rstest]
fn get_or_else_and_recovery() {
    assert_eq!(parse("8").get_or_else(0), 8);
    assert_eq!(parse("?").get_or_else(0), 0);
    assert_eq!(parse("?").get_or_else_with(|_| -1), -1);
    let recovered: Either<(), i32> = parse("?").or_else(|_| right(0));
    assert_eq!(recovered, right(0));
}

#[rstest]
fn fold_and_swap() {
    let described = parse("3").fold(|error| error, |value| format!("ok {value}"));
    assert_eq!(described, "ok 3");
    assert_eq!(right::<&str, i32>(1).swap(), left(1));
}

// =============================================================================
// Conversions and formatting
// =============================================================================

#[rstest]
fn result_round_trip() {
    let result: Result<i32, String> = parse("12").into();
    assert_eq!(result, Ok(12));
    let from_error: Either<&str, i32> = Err("no").into();
    assert_eq!(from_error, left("no"));
}

#[rstest]
fn display_and_debug() {
    let failure: Either<&str, i32> = left("oops");
    assert_eq!(failure.to_string(), "Left(oops)");
    assert_eq!(format!("{:?}", right::<&str, i32>(1)), "Right(1)");
}
