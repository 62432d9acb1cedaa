//! Algos - array views, merge sorts and binary search
//!
//! # Overview
//!
//! Algos is a small algorithms library built around one storage model: an
//! owned [`Array`] buffer and cheap, copyable [`View`]s that borrow a
//! contiguous window of it. Views alias their parent, so a sort run on a
//! slice rearranges exactly that window of the underlying storage.
//!
//! On top of that model it provides:
//!
//! - Binary search: [`search::lower_bound`], [`search::upper_bound`],
//!   [`search::count`]
//! - Stable merging of two sorted views: [`merge::merge`]
//! - Three sorts: insertion sort, recursive merge sort and bottom-up merge
//!   sort, selectable at runtime through [`SortOptions`]
//! - Integer text conversion in bases 2 to 36: [`radix`]
//!
//! # Quick Start
//!
//! ```
//! use algos::{Algorithm, Array, SortOptions, search};
//!
//! let array = Array::from(vec![7, 5, -8, 9, 0, 6, 1, -8, 0, -10]);
//!
//! SortOptions::new(Algorithm::IterativeMergeSort)
//!     .with_chunk_size(4)
//!     .sort(array.view())
//!     .unwrap();
//! assert_eq!(array, [-10, -8, -8, 0, 0, 1, 5, 6, 7, 9]);
//!
//! // Sort just a window of the array.
//! let window = array.slice(0, 3);
//! window.set(0, 50);
//! algos::sort::merge_sort(window);
//! assert_eq!(array.slice(0, 4), [-8, -8, 50, 0]);
//!
//! assert_eq!(search::count(array.slice(3, 10), 0), 2);
//! ```
//!
//! # Instrumentation
//!
//! Every algorithm has a `_with` variant that reports allocations, copies,
//! merges, comparisons and swaps to a [`Probe`]. [`SortStats`] simply counts
//! them:
//!
//! ```
//! use algos::{Array, SortStats, sort};
//!
//! let array = Array::from(vec![4u32, 3, 2, 1]);
//! let mut stats = SortStats::default();
//! sort::merge_sort_iterative_with(array.view(), 2, &mut stats);
//! assert_eq!(stats.allocations, 1);
//! assert_eq!(stats.elements_merged, 4);
//! ```

#![no_std]

pub use algos_core::{
    Algorithm, Array, ArrayView, Element, Error, Probe, SortOptions, SortStats, View, array,
    merge, search, sort, stats,
};

/// Integer parsing and formatting in bases 2 to 36.
pub use algos_radix as radix;
