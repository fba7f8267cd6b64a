#![cfg(feature = "serde")]

//! Integration tests for serde support in lenticular.

use lenticular::context::{Const, Identity, Tagged};
use lenticular::control::Either;
use lenticular::typeclass::{First, Last, Max, Min, Product, Sum};
use rstest::rstest;

// =============================================================================
// Either
// =============================================================================

#[rstest]
fn test_either_json_roundtrip() {
    let left: Either<String, i32> = Either::Left("error".to_string());
    let right: Either<String, i32> = Either::Right(42);

    let left_json = serde_json::to_string(&left).unwrap();
    let right_json = serde_json::to_string(&right).unwrap();

    let restored_left: Either<String, i32> = serde_json::from_str(&left_json).unwrap();
    let restored_right: Either<String, i32> = serde_json::from_str(&right_json).unwrap();

    assert_eq!(left, restored_left);
    assert_eq!(right, restored_right);
}

// =============================================================================
// Context wrappers
// =============================================================================

#[rstest]
fn test_identity_is_transparent() {
    let json = serde_json::to_string(&Identity(7)).unwrap();
    assert_eq!(json, "7");
    assert_eq!(serde_json::from_str::<Identity<i32>>(&json).unwrap(), Identity(7));
}

#[rstest]
fn test_const_serializes_only_its_result() {
    struct NotSerializable;

    let held: Const<Vec<u8>, NotSerializable> = Const::new(vec![1, 2]);
    let json = serde_json::to_string(&held).unwrap();
    assert_eq!(json, r#"{"result":[1,2]}"#);

    let restored: Const<Vec<u8>, NotSerializable> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.into_inner(), vec![1, 2]);
}

#[rstest]
fn test_tagged_serializes_only_its_value() {
    let tagged: Tagged<std::fs::File, String> = Tagged::new("built".to_string());
    let json = serde_json::to_string(&tagged).unwrap();
    let restored: Tagged<std::fs::File, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.into_inner(), "built");
}

// =============================================================================
// Monoid wrappers
// =============================================================================

#[rstest]
fn test_numeric_wrappers_roundtrip() {
    assert_eq!(serde_json::to_string(&Sum(3)).unwrap(), "3");
    assert_eq!(serde_json::from_str::<Product<i64>>("4").unwrap(), Product(4));
    assert_eq!(serde_json::from_str::<Max<u8>>("9").unwrap(), Max(9));
    assert_eq!(serde_json::from_str::<Min<u8>>("1").unwrap(), Min(1));
}

#[rstest]
fn test_selection_wrappers_roundtrip() {
    let first = First::new('a');
    let json = serde_json::to_string(&first).unwrap();
    assert_eq!(serde_json::from_str::<First<char>>(&json).unwrap(), first);

    let empty: Last<char> = Last(None);
    assert_eq!(serde_json::to_string(&empty).unwrap(), "null");
}
