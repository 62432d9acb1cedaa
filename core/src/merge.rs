//! Stable two-way merge of sorted views.

use crate::array::{Element, View};
use crate::stats::Probe;

/// Merges the sorted views `left` and `right` into the front of `out`.
///
/// The merge is stable: when `left` and `right` hold equal elements, the one
/// from `left` is written first. Runs in `O(left.len() + right.len())` and
/// allocates nothing.
///
/// # Panics
///
/// - If `out` holds fewer than `left.len() + right.len()` elements.
/// - If `out` shares storage with either input.
///
/// In debug builds, also if either input is not sorted.
///
/// ```
/// use algos_core::{Array, merge::merge};
///
/// let left = Array::from(vec![1, 4, 9]);
/// let right = Array::from(vec![2, 4, 10, 11]);
/// let out = Array::allocate(7);
///
/// merge(left.view(), right.view(), out.view());
/// assert_eq!(out, [1, 2, 4, 4, 9, 10, 11]);
/// ```
#[track_caller]
pub fn merge<T: Element>(left: View<'_, T>, right: View<'_, T>, out: View<'_, T>) {
    merge_with(left, right, out, &mut ());
}

#[track_caller]
pub fn merge_with<T: Element, P: Probe + ?Sized>(
    left: View<'_, T>,
    right: View<'_, T>,
    out: View<'_, T>,
    probe: &mut P,
) {
    let total = left.len() + right.len();
    assert!(
        out.len() >= total,
        "merge output holds {} elements but {} are required",
        out.len(),
        total
    );
    assert!(
        !out.overlaps(left) && !out.overlaps(right),
        "merge output must not alias its inputs"
    );
    debug_assert!(left.is_sorted(), "left merge input is not sorted");
    debug_assert!(right.is_sorted(), "right merge input is not sorted");

    let (mut l, mut r, mut o) = (0, 0, 0);
    while l < left.len() && r < right.len() {
        let (a, b) = (left.at(l), right.at(r));
        probe.compared(1);
        // Ties go to `left`.
        if b < a {
            out.set(o, b);
            r += 1;
        } else {
            out.set(o, a);
            l += 1;
        }
        o += 1;
    }

    // At most one of these is non-empty.
    let rest = if l < left.len() {
        left.slice(l, left.len())
    } else {
        right.slice(r, right.len())
    };
    out.slice(o, o + rest.len()).copy_from(rest);
    probe.merged(total);
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod merge_test;
