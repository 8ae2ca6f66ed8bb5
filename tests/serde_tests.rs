//! Serialization tests for the ADTs.

#![cfg(feature = "serde")]

use adtkit::adt::{Either, List, Maybe, left, none, right, some};
use adtkit::list;
use rstest::rstest;

#[rstest]
fn maybe_uses_externally_tagged_variants() {
    assert_eq!(serde_json::to_string(&some(1)).unwrap(), r#"{"Some":1}"#);
    assert_eq!(serde_json::to_string(&none::<i32>()).unwrap(), r#""None""#);
    let parsed: Maybe<String> = serde_json::from_str(r#"{"Some":"x"}"#).unwrap();
    assert_eq!(parsed, some("x".to_string()));
}

#[rstest]
fn either_round_trips() {
    let values: Vec<Either<String, u32>> = vec![left("e".to_string()), right(7)];
    let json = serde_json::to_string(&values).unwrap();
    assert_eq!(json, r#"[{"Left":"e"},{"Right":7}]"#);
    let parsed: Vec<Either<String, u32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, values);
}

#[rstest]
fn list_is_a_json_array() {
    let numbers = list![1, 2, 3];
    assert_eq!(serde_json::to_string(&numbers).unwrap(), "[1,2,3]");
    let parsed: List<i32> = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(parsed, numbers);
    let empty: List<i32> = serde_json::from_str("[]").unwrap();
    assert!(empty.is_nil());
}

#[rstest]
fn nested_structures() {
    let nested: List<Maybe<i32>> = list![some(1), none()];
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, r#"[{"Some":1},"None"]"#);
    let parsed: List<Maybe<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, nested);
}
