//! Binary search over views sorted in ascending order.
//!
//! All functions assume the view is sorted. On unsorted input they still
//! terminate and return an index in `0..=len`, but it has no meaning.

use core::ops::Range;

use crate::array::{Element, View};
use crate::stats::Probe;

/// Returns the smallest index `i` such that `view[i] >= value`, or
/// `view.len()` if there is none.
///
/// This is the leftmost position where `value` can be inserted while keeping
/// the view sorted. It also equals the number of elements strictly less than
/// `value`.
///
/// ```
/// use algos_core::{View, search::lower_bound};
///
/// let mut data = [-10, -8, -8, 0, 0, 1, 5, 6, 7, 9];
/// let view = View::wrap(&mut data);
/// assert_eq!(lower_bound(view, 0), 3);
/// assert_eq!(lower_bound(view, 1), 5);
/// assert_eq!(lower_bound(view, 100), 10);
/// ```
pub fn lower_bound<T: Element>(view: View<'_, T>, value: T) -> usize {
    lower_bound_with(view, value, &mut ())
}

pub fn lower_bound_with<T: Element, P: Probe + ?Sized>(
    view: View<'_, T>,
    value: T,
    probe: &mut P,
) -> usize {
    partition_point(view, probe, |element| element < value)
}

/// Returns the smallest index `i` such that `view[i] > value`, or
/// `view.len()` if there is none.
pub fn upper_bound<T: Element>(view: View<'_, T>, value: T) -> usize {
    upper_bound_with(view, value, &mut ())
}

pub fn upper_bound_with<T: Element, P: Probe + ?Sized>(
    view: View<'_, T>,
    value: T,
    probe: &mut P,
) -> usize {
    partition_point(view, probe, |element| element <= value)
}

/// The index range of elements equal to `value`.
pub fn equal_range<T: Element>(view: View<'_, T>, value: T) -> Range<usize> {
    equal_range_with(view, value, &mut ())
}

pub fn equal_range_with<T: Element, P: Probe + ?Sized>(
    view: View<'_, T>,
    value: T,
    probe: &mut P,
) -> Range<usize> {
    let start = lower_bound_with(view, value, probe);
    let len = upper_bound_with(view.slice(start, view.len()), value, probe);
    start..start + len
}

/// Number of elements equal to `value`.
pub fn count<T: Element>(view: View<'_, T>, value: T) -> usize {
    equal_range(view, value).len()
}

/// Index of the first element for which `goes_left` is false.
fn partition_point<T: Element, P: Probe + ?Sized>(
    view: View<'_, T>,
    probe: &mut P,
    goes_left: impl Fn(T) -> bool,
) -> usize {
    let mut left = 0;
    let mut right = view.len();
    while left < right {
        // Avoid overflow
        let mid = left + (right - left) / 2;
        probe.compared(1);
        if goes_left(view.at(mid)) {
            left = mid + 1;
        } else {
            right = mid;
        }
    }
    left
}
