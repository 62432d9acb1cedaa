//! Owned arrays and zero-copy views over them.
//!
//! There are two handle types:
//!
//! - [`Array<T>`] owns its storage. It allocates on construction and releases
//!   the storage exactly once when dropped. Cloning is a deep copy.
//! - [`View<'a, T>`] borrows a contiguous range of storage owned elsewhere: an
//!   [`Array`], or caller memory handed to [`View::wrap`]. It is `Copy`, never
//!   releases anything, and its lifetime keeps it from outliving the owner.
//!
//! Slicing a view (or an array) is O(1) and yields another `View` that aliases
//! the parent: element `i` of `parent.slice(start, end)` *is* element
//! `start + i` of the parent. Storage is held in [`Cell`](core::cell::Cell)s so
//! every view over the same buffer can read and write it, and writes through
//! one are immediately visible through all others.
//!
//! ```text
//! Array<T>      ──owns──▶ [ c0 | c1 | c2 | c3 | c4 | c5 ]
//! view()        ──────────┘                            │
//! slice(1, 4)   ───────────────▶ [ c1 | c2 | c3 ]      │
//! slice(4, 99)  ─────────────────────────────▶ [ c4 | c5 ]
//! ```
//!
//! Cells are `!Sync`, so views cannot be shared across threads: all mutation
//! happens on one thread, one write at a time.

mod element;
mod owned;
mod view;

pub use element::Element;
pub(crate) use element::bytes_of;
pub use owned::Array;
pub use view::View;

/// Read access shared by owned arrays and borrowed views.
pub trait ArrayView<E> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<E>;

    /// Whether dropping this handle releases the underlying storage.
    fn owns_storage(&self) -> bool;

    /// A borrowing view over every element.
    fn as_view(&self) -> View<'_, E>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
