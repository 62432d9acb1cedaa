//! Recoverable errors for the array and sorting API.
//!
//! Precondition violations (an index outside a view, a merge output that is
//! too small or aliases an input) are not represented here: those panic at the
//! call site instead of returning a plausible but wrong value.

use crate::String;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The bottom-up merge sort needs chunks of at least one element.
    #[error("base chunk size must be at least 1")]
    InvalidChunkSize,

    #[error("unknown sorting algorithm `{0}` (expected merge_sort, imerge_sort or insertion_sort)")]
    UnknownAlgorithm(String),

    /// The allocator could not provide a buffer of the requested size.
    #[error("failed to allocate {elements} elements ({bytes} bytes)")]
    AllocationFailed { elements: usize, bytes: usize },
}
