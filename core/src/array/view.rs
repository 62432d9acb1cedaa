use core::cell::Cell;
use core::fmt;

use super::{ArrayView, Element};
use crate::Vec;

/// A non-owning view over a contiguous run of elements.
///
/// See the [module docs](super) for the aliasing rules.
#[derive(Clone, Copy)]
pub struct View<'a, T> {
    cells: &'a [Cell<T>],
}

static_assertions::assert_eq_size!(View<'static, i32>, [usize; 2]);
static_assertions::assert_not_impl_any!(View<'static, i32>: Sync, Send);

#[cold]
#[track_caller]
fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<'a, T: Element> View<'a, T> {
    /// Wraps caller-owned memory without allocating.
    ///
    /// The exclusive borrow is held for as long as the view (or any view
    /// sliced from it) is alive, so the buffer cannot be freed or touched
    /// through another path in the meantime.
    pub fn wrap(buffer: &'a mut [T]) -> Self {
        View {
            cells: Cell::from_mut(buffer).as_slice_of_cells(),
        }
    }

    pub(crate) fn from_cells(cells: &'a [Cell<T>]) -> Self {
        View { cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[track_caller]
    fn cell(&self, index: usize) -> &'a Cell<T> {
        match self.cells.get(index) {
            Some(cell) => cell,
            None => index_out_of_bounds(index, self.len()),
        }
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn at(&self, index: usize) -> T {
        self.cell(index).get()
    }

    /// Returns the element at `index`, or `None` if it is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.cells.get(index).map(Cell::get)
    }

    /// Overwrites the element at `index`. The write is visible through every
    /// view that aliases this position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[track_caller]
    pub fn set(&self, index: usize, value: T) {
        self.cell(index).set(value);
    }

    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    #[track_caller]
    pub fn swap(&self, a: usize, b: usize) {
        self.cell(a).swap(self.cell(b));
    }

    /// Returns a view over `start..end` of this view.
    ///
    /// `end` is clamped to `len()`, then `start` is clamped to `end`, so an
    /// inverted or out-of-range request yields an empty view instead of
    /// panicking. The result aliases this view's storage and never owns it.
    pub fn slice(&self, start: usize, end: usize) -> View<'a, T> {
        let end = end.min(self.len());
        let start = start.min(end);
        View {
            cells: &self.cells[start..end],
        }
    }

    /// Splits into `[0, mid)` and `[mid, len)`, with `mid` clamped to `len()`.
    pub fn split_at(&self, mid: usize) -> (View<'a, T>, View<'a, T>) {
        let (left, right) = self.cells.split_at(mid.min(self.len()));
        (View { cells: left }, View { cells: right })
    }

    /// Copies every element of `src` into this view.
    ///
    /// The two views may overlap: the copy behaves like `memmove`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[track_caller]
    pub fn copy_from(&self, src: View<'_, T>) {
        assert_eq!(
            self.len(),
            src.len(),
            "destination and source views have different lengths"
        );
        let pairs = self.cells.iter().zip(src.cells);
        if self.cells.as_ptr() > src.cells.as_ptr() {
            // Destination starts later: copy back to front so overlapping
            // source elements are read before they are overwritten.
            pairs.rev().for_each(|(dst, src)| dst.set(src.get()));
        } else {
            pairs.for_each(|(dst, src)| dst.set(src.get()));
        }
    }

    pub fn fill(&self, value: T) {
        self.cells.iter().for_each(|cell| cell.set(value));
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + use<'a, T> {
        self.cells.iter().map(Cell::get)
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Whether the elements are in ascending (non-decreasing) order.
    pub fn is_sorted(&self) -> bool {
        self.cells.windows(2).all(|pair| pair[0].get() <= pair[1].get())
    }

    /// Whether the two views share at least one element of storage.
    pub fn overlaps(&self, other: View<'_, T>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let a = self.cells.as_ptr_range();
        let b = other.cells.as_ptr_range();
        a.start < b.end && b.start < a.end
    }
}

impl<T: Element> ArrayView<T> for View<'_, T> {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        View::get(self, index)
    }

    fn owns_storage(&self) -> bool {
        false
    }

    fn as_view(&self) -> View<'_, T> {
        *self
    }
}

impl<T: Element> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Element> PartialEq for View<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Element> Eq for View<'_, T> {}

impl<T: Element> PartialEq<[T]> for View<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter().copied())
    }
}

impl<T: Element, const N: usize> PartialEq<[T; N]> for View<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}
