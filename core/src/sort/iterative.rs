use crate::array::{Array, Element, View, bytes_of};
use crate::merge::merge_with;
use crate::stats::Probe;

use super::insertion::insertion_sort_with;

/// Sorts `view` in place with bottom-up merge sort.
///
/// 1. Views of at most `base_chunk_size` elements are insertion-sorted whole.
/// 2. Otherwise the view is cut into consecutive chunks of `base_chunk_size`
///    (the last one may be shorter) and each chunk is insertion-sorted.
/// 3. Each pass merges adjacent chunk pairs through a scratch buffer and
///    copies the result back, then doubles the chunk size. Passes continue
///    while more than one chunk group remains, i.e.
///    `ceil(log2(ceil(len / base_chunk_size)))` times.
///
/// # Panics
///
/// Panics if `base_chunk_size` is zero. [`SortOptions`](super::SortOptions)
/// reports that case as an error instead.
#[track_caller]
pub fn merge_sort_iterative<T: Element>(view: View<'_, T>, base_chunk_size: usize) {
    merge_sort_iterative_with(view, base_chunk_size, &mut ());
}

#[track_caller]
pub fn merge_sort_iterative_with<T: Element, P: Probe + ?Sized>(
    view: View<'_, T>,
    base_chunk_size: usize,
    probe: &mut P,
) {
    assert!(base_chunk_size > 0, "base chunk size must be at least 1");
    let len = view.len();
    tracing::debug!(len, base_chunk_size, "iterative merge sort");

    if len <= 1 {
        return;
    }
    if len <= base_chunk_size {
        insertion_sort_with(view, probe);
        return;
    }

    for start in (0..len).step_by(base_chunk_size) {
        let chunk = view.slice(start, start.saturating_add(base_chunk_size));
        insertion_sort_with(chunk, probe);
    }

    // `base_chunk_size < len` here, so `chunk` stays below `len` inside the
    // loop and `2 * chunk` cannot overflow.
    let mut chunk = base_chunk_size;
    let mut groups = len.div_ceil(chunk);
    while groups > 1 {
        let span = chunk * 2;
        for start in (0..len).step_by(span) {
            let pair = view.slice(start, start.saturating_add(span));
            let (left, right) = pair.split_at(chunk);
            if right.is_empty() {
                // A trailing chunk without a partner is already sorted.
                continue;
            }

            let scratch = Array::allocate(pair.len());
            probe.allocated(pair.len(), bytes_of::<T>(pair.len()));
            merge_with(left, right, scratch.view(), probe);
            pair.copy_from(scratch.view());
            probe.copied(pair.len(), bytes_of::<T>(pair.len()));
        }

        groups = groups.div_ceil(2);
        chunk = span;
        tracing::trace!(chunk, groups, "merge pass complete");
    }
    debug_assert!(chunk >= len);
}
