use crate::array::{Array, Element, View, bytes_of};
use crate::merge::merge_with;
use crate::stats::Probe;

/// Sorts `view` in place with top-down merge sort.
///
/// Each level copies its input into an owned scratch [`Array`], sorts the two
/// halves of that copy recursively, and merges them back into `view`. Merge
/// inputs therefore always live in the scratch copy and the output in the
/// caller's storage, so they never alias.
pub fn merge_sort<T: Element>(view: View<'_, T>) {
    merge_sort_with(view, &mut ());
}

pub fn merge_sort_with<T: Element, P: Probe + ?Sized>(view: View<'_, T>, probe: &mut P) {
    tracing::debug!(len = view.len(), "merge sort");
    sort_into(view, probe);
}

fn sort_into<T: Element, P: Probe + ?Sized>(view: View<'_, T>, probe: &mut P) {
    let len = view.len();
    if len <= 1 {
        return;
    }

    let scratch = Array::copy_of(view);
    probe.allocated(len, bytes_of::<T>(len));
    probe.copied(len, bytes_of::<T>(len));

    let (left, right) = scratch.view().split_at(len / 2);
    sort_into(left, probe);
    sort_into(right, probe);
    merge_with(left, right, view, probe);
}
