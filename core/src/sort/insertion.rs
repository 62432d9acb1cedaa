use crate::array::{Element, View};
use crate::search::lower_bound_with;
use crate::stats::Probe;

/// Sorts `view` in place with binary insertion sort.
///
/// Each element is placed with a [`lower_bound`](crate::search::lower_bound)
/// search over the sorted prefix, then rotated into position with adjacent
/// swaps. `O(n log n)` comparisons but `O(n²)` moves: meant for small views.
pub fn insertion_sort<T: Element>(view: View<'_, T>) {
    insertion_sort_with(view, &mut ());
}

pub fn insertion_sort_with<T: Element, P: Probe + ?Sized>(view: View<'_, T>, probe: &mut P) {
    for i in 1..view.len() {
        let key = view.at(i);
        let dest = lower_bound_with(view.slice(0, i), key, probe);
        for j in (dest + 1..=i).rev() {
            view.swap(j, j - 1);
        }
        probe.swapped(i - dest);
    }
}
