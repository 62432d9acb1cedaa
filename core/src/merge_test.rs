//! Tests for the two-way merge

use super::{merge, merge_with};
use crate::{Array, SortStats, View};
use pretty_assertions::assert_eq;

fn merged(left: &[i32], right: &[i32]) -> Vec<i32> {
    let left = Array::from(left.to_vec());
    let right = Array::from(right.to_vec());
    let out = Array::allocate(left.len() + right.len());
    merge(left.view(), right.view(), out.view());
    out.into_vec()
}

#[test]
fn test_merge_interleaves() {
    assert_eq!(merged(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(merged(&[-10, 0, 7], &[-8, -8, 9]), vec![-10, -8, -8, 0, 7, 9]);
}

#[test]
fn test_merge_with_empty_side() {
    assert_eq!(merged(&[], &[1, 2]), vec![1, 2]);
    assert_eq!(merged(&[1, 2], &[]), vec![1, 2]);
    assert_eq!(merged(&[], &[]), Vec::<i32>::new());
}

#[test]
fn test_merge_one_side_exhausts_first() {
    assert_eq!(merged(&[1, 2, 3], &[10, 11]), vec![1, 2, 3, 10, 11]);
    assert_eq!(merged(&[10, 11], &[1, 2, 3]), vec![1, 2, 3, 10, 11]);
}

#[test]
fn test_merge_duplicates_across_sides() {
    assert_eq!(merged(&[0, 0, 1], &[0, 1, 1]), vec![0, 0, 0, 1, 1, 1]);
}

#[test]
fn test_merge_is_stable() {
    let left = Array::from(vec![1, 2, 2, 3]);
    let right = Array::from(vec![2, 3]);
    let out = Array::allocate(6);
    let mut stats = SortStats::default();
    merge_with(left.view(), right.view(), out.view(), &mut stats);

    assert_eq!(out, [1, 2, 2, 2, 3, 3]);
    // Every tie is decided in favour of `left`, so `right` is only consumed
    // when strictly smaller: 1 < 2 (left), 2 == 2 (left), 2 == 2 (left),
    // 3 > 2 (right), 3 == 3 (left), then the remaining right element is copied.
    assert_eq!(stats.comparisons, 5);
    assert_eq!(stats.elements_merged, 6);
}

#[test]
fn test_merge_ties_take_left() {
    // Taking `left` on the first tie exhausts it after one comparison; the
    // rest of `right` is copied without comparing.
    let left = Array::from(vec![2]);
    let right = Array::from(vec![2, 2]);
    let out = Array::allocate(3);
    let mut stats = SortStats::default();
    merge_with(left.view(), right.view(), out.view(), &mut stats);

    assert_eq!(out, [2, 2, 2]);
    assert_eq!(stats.comparisons, 1);
    assert_eq!(stats.elements_merged, 3);
}

#[test]
fn test_merge_ties_take_left_with_equal_runs() {
    let left = Array::from(vec![1, 1, 1]);
    let right = Array::from(vec![1]);
    let out = Array::allocate(4);
    let mut stats = SortStats::default();
    merge_with(left.view(), right.view(), out.view(), &mut stats);

    assert_eq!(out, [1, 1, 1, 1]);
    assert_eq!(stats.comparisons, 3);
}

#[test]
fn test_merge_into_larger_output_writes_prefix() {
    let left = Array::from(vec![5u8]);
    let right = Array::from(vec![1u8]);
    let out = Array::from(vec![9u8, 9, 9]);
    merge(left.view(), right.view(), out.view());
    assert_eq!(out, [1, 5, 9]);
}

#[test]
fn test_merge_from_slices_of_one_buffer() {
    let source = Array::from(vec![2, 4, 6, 1, 3, 5]);
    let (left, right) = source.view().split_at(3);
    let out = Array::allocate(6);
    merge(left, right, out.view());
    assert_eq!(out, [1, 2, 3, 4, 5, 6]);
}

#[test]
#[should_panic(expected = "merge output holds 2 elements but 3 are required")]
fn test_merge_rejects_small_output() {
    let left = Array::from(vec![1, 2]);
    let right = Array::from(vec![3]);
    let out = Array::allocate(2);
    merge(left.view(), right.view(), out.view());
}

#[test]
#[should_panic(expected = "merge output must not alias its inputs")]
fn test_merge_rejects_aliasing_output() {
    let mut data = [1, 3, 2, 4, 0, 0];
    let view = View::wrap(&mut data);
    merge(view.slice(0, 2), view.slice(2, 4), view.slice(2, 6));
}
