use core::cell::Cell;
use core::fmt;

use super::{ArrayView, Element, View, bytes_of};
use crate::error::Error;
use crate::{Box, Vec, vec};

/// An owned, fixed-length buffer of elements.
///
/// `Array` is the only handle that releases storage. Every [`View`] taken
/// from it borrows the array, so no view can outlive it.
///
/// - Cloning (or [`Array::assign`]) is a deep copy into fresh storage.
/// - Moving an `Array` moves ownership; [`Array::take`] does the same through
///   a `&mut` and leaves an empty, non-allocating array behind.
pub struct Array<T> {
    cells: Box<[Cell<T>]>,
}

impl<T: Element> Array<T> {
    /// An empty array. Does not allocate.
    pub fn new() -> Self {
        Array {
            cells: Box::new([]),
        }
    }

    /// Allocates `len` zero-initialized elements.
    pub fn allocate(len: usize) -> Self {
        Self::from_vec(vec![T::default(); len])
    }

    /// Like [`Array::allocate`], but reports allocation failure instead of
    /// aborting.
    pub fn try_allocate(len: usize) -> Result<Self, Error> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailed {
                elements: len,
                bytes: bytes_of::<T>(len),
            })?;
        buffer.resize(len, T::default());
        Ok(Self::from_vec(buffer))
    }

    /// Deep-copies every element of `source` into fresh storage.
    ///
    /// Copying an empty view yields an empty array without allocating.
    pub fn copy_of(source: View<'_, T>) -> Self {
        if source.is_empty() {
            return Self::new();
        }
        Array {
            cells: source.iter().map(Cell::new).collect(),
        }
    }

    pub fn from_vec(values: Vec<T>) -> Self {
        Array {
            cells: values.into_iter().map(Cell::new).collect(),
        }
    }

    #[inline]
    pub fn view(&self) -> View<'_, T> {
        View::from_cells(&self.cells)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// See [`View::at`].
    #[inline]
    #[track_caller]
    pub fn at(&self, index: usize) -> T {
        self.view().at(index)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.view().get(index)
    }

    /// See [`View::set`].
    #[inline]
    #[track_caller]
    pub fn set(&self, index: usize, value: T) {
        self.view().set(index, value);
    }

    /// See [`View::slice`].
    pub fn slice(&self, start: usize, end: usize) -> View<'_, T> {
        self.view().slice(start, end)
    }

    /// Replaces the contents with a deep copy of `source`, releasing the
    /// previous storage.
    ///
    /// `source` cannot borrow from `self`: the `&mut` receiver rules that out.
    pub fn assign(&mut self, source: View<'_, T>) {
        *self = Array::copy_of(source);
    }

    /// Moves the storage out, leaving `self` empty.
    pub fn take(&mut self) -> Array<T> {
        core::mem::take(self)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.cells.into_vec().into_iter().map(Cell::into_inner).collect()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.view().to_vec()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.view().iter()
    }
}

impl<T: Element> ArrayView<T> for Array<T> {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        Array::get(self, index)
    }

    fn owns_storage(&self) -> bool {
        true
    }

    fn as_view(&self) -> View<'_, T> {
        self.view()
    }
}

impl<T: Element> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::copy_of(self.view())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source.view());
    }
}

impl<T: Element> From<Vec<T>> for Array<T> {
    fn from(values: Vec<T>) -> Self {
        Array::from_vec(values)
    }
}

impl<T: Element> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array {
            cells: iter.into_iter().map(Cell::new).collect(),
        }
    }
}

impl<T: Element> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.view(), f)
    }
}

impl<T: Element> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.view() == other.view()
    }
}

impl<T: Element> Eq for Array<T> {}

impl<T: Element> PartialEq<[T]> for Array<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.view() == *other
    }
}

impl<T: Element, const N: usize> PartialEq<[T; N]> for Array<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.view() == *other
    }
}
