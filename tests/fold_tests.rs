//! Tests for folds and the read-only operations.

use lenticular::control::Either;
use lenticular::optics::{
    both, compose, first, fold_map_of, folded, get, length_of, preview, second, to,
    to_list_of, traverse_left, views,
};
use lenticular::typeclass::{Last, Max, Min, Product, Sum};
use rstest::rstest;
use std::collections::VecDeque;

// =============================================================================
// folded
// =============================================================================

#[rstest]
fn test_folded_combines_in_natural_order() {
    let words = vec!["fold".to_string(), "ed".to_string()];
    assert_eq!(fold_map_of(&folded(), |word: String| word, words), "folded");
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![1], 1)]
#[case(vec![1, 2, 3], 6)]
fn test_folded_sum(#[case] values: Vec<i32>, #[case] expected: i32) {
    assert_eq!(fold_map_of(&folded(), Sum, values), Sum(expected));
}

#[rstest]
fn test_folded_empty_container_yields_neutral_element() {
    let empty: Vec<i64> = Vec::new();
    assert_eq!(fold_map_of(&folded(), Product, empty.clone()), Product(1));
    assert_eq!(fold_map_of(&folded(), Max, empty.clone()), Max(i64::MIN));
    assert_eq!(fold_map_of(&folded(), Min, empty.clone()), Min(i64::MAX));
    assert_eq!(to_list_of(&folded(), empty.clone()), Vec::<i64>::new());
    assert_eq!(preview(&folded(), empty.clone()), None);
    assert_eq!(length_of(&folded(), empty), 0);
}

#[rstest]
fn test_folded_over_other_containers() {
    let queue = VecDeque::from(vec!['q', 'u']);
    assert_eq!(to_list_of(&folded(), queue), vec!['q', 'u']);

    let right: Either<&str, u8> = Either::Right(3);
    assert_eq!(to_list_of(&folded(), right), vec![3]);

    let failed: Result<i32, String> = Err("boom".to_string());
    assert_eq!(length_of(&folded(), failed), 0);
}

#[rstest]
fn test_folded_last_element() {
    assert_eq!(
        fold_map_of(&folded(), Last::new, vec![7, 8, 9]),
        Last(Some(9))
    );
}

// =============================================================================
// Traversals read as folds
// =============================================================================

#[rstest]
fn test_fold_map_of_both_in_order() {
    assert_eq!(fold_map_of(&both(), |x: i32| vec![x], (1, 2)), vec![1, 2]);
}

#[rstest]
#[case(Either::Left(4), Some(4))]
#[case(Either::Right("r"), None)]
fn test_preview_traverse_left(#[case] source: Either<i32, &str>, #[case] expected: Option<i32>) {
    assert_eq!(preview(&traverse_left(), source), expected);
}

#[rstest]
fn test_composed_fold_counts_every_focus() {
    let rows = vec![(1, 'a'), (2, 'b'), (3, 'c')];
    let keys = compose(folded(), first());
    assert_eq!(length_of(&keys, rows.clone()), 3);
    assert_eq!(fold_map_of(&keys, Sum, rows), Sum(6));
}

// =============================================================================
// Getters
// =============================================================================

#[rstest]
fn test_get_and_views_agree() {
    let pair = ("name", 10_u32);
    assert_eq!(get(&second(), pair), 10);
    assert_eq!(views(&second(), |n: u32| n * 2, pair), 20);
}

#[rstest]
fn test_to_getter_composed_after_lens() {
    let length = compose(first(), to(|text: &String| text.len()));
    assert_eq!(get(&length, ("four".to_string(), ())), 4);
}

#[rstest]
fn test_getter_reads_as_single_element_fold() {
    let negated = to(|value: &i32| -value);
    assert_eq!(to_list_of(&negated, 5), vec![-5]);
    assert_eq!(preview(&negated, 5), Some(-5));
}
