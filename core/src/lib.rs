#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Array views and the comparison sorts built on them.
//!
//! The crate is organised leaf-first:
//!
//! - [`array`]: the owned [`Array`] buffer and the borrowing [`View`] over it.
//! - [`search`]: lower/upper bound binary search over a sorted view.
//! - [`merge`]: stable two-way merge into a disjoint output view.
//! - [`sort`]: insertion sort, recursive merge sort and the bottom-up
//!   (iterative) merge sort.
//! - [`stats`]: optional per-run instrumentation passed into the sorts.
//!
//! # Example
//!
//! ```
//! use algos_core::{Array, search, sort};
//!
//! let mut data = [7, 5, -8, 9, 0, 6, 1, -8, 0, -10];
//! let view = algos_core::View::wrap(&mut data);
//! sort::merge_sort(view);
//! assert_eq!(view, [-10, -8, -8, 0, 0, 1, 5, 6, 7, 9]);
//!
//! // Copies never alias the original.
//! let copy = Array::copy_of(view);
//! copy.set(0, 100);
//! assert_eq!(view.at(0), -10);
//!
//! // Two zeros in the sorted data.
//! assert_eq!(search::count(view, 0), 2);
//! ```

// This works on std and no_std and is harmless.
extern crate alloc;

// Re-export (crate only) for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, string::String, vec, vec::Vec};

pub mod array;
pub mod error;
pub mod merge;
pub mod search;
pub mod sort;
pub mod stats;

pub use array::{Array, ArrayView, Element, View};
pub use error::Error;
pub use sort::{Algorithm, SortOptions};
pub use stats::{Probe, SortStats};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_iterative_passes() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
