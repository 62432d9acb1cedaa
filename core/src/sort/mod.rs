//! Comparison sorts over [`View`]s.
//!
//! | Algorithm | Entry point | Extra memory |
//! |-----------|-------------|--------------|
//! | Insertion sort | [`insertion_sort`] | none |
//! | Recursive merge sort | [`merge_sort`] | a full copy per recursion level |
//! | Bottom-up merge sort | [`merge_sort_iterative`] | one scratch buffer per merged pair |
//!
//! All of them sort ascending, in place: the view they are given (and the
//! storage behind it) holds the sorted sequence afterwards.
//!
//! [`SortOptions`] picks an algorithm at runtime and validates its parameters.

mod insertion;
mod iterative;
mod recursive;

use core::fmt;
use core::str::FromStr;

pub use insertion::{insertion_sort, insertion_sort_with};
pub use iterative::{merge_sort_iterative, merge_sort_iterative_with};
pub use recursive::{merge_sort, merge_sort_with};

use crate::array::{Element, View};
use crate::error::Error;
use crate::stats::Probe;
use crate::String;

/// Default chunk size for the bottom-up merge sort.
pub const DEFAULT_CHUNK_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Top-down merge sort over a copy of the input.
    #[default]
    MergeSort,
    /// Bottom-up merge sort with an insertion-sort base case.
    IterativeMergeSort,
    /// Binary insertion sort.
    InsertionSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::MergeSort,
        Algorithm::IterativeMergeSort,
        Algorithm::InsertionSort,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::MergeSort => "merge_sort",
            Algorithm::IterativeMergeSort => "imerge_sort",
            Algorithm::InsertionSort => "insertion_sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "merge_sort" | "merge" => Ok(Algorithm::MergeSort),
            "imerge_sort" | "imerge" => Ok(Algorithm::IterativeMergeSort),
            "insertion_sort" | "insertion" => Ok(Algorithm::InsertionSort),
            other => Err(Error::UnknownAlgorithm(String::from(other))),
        }
    }
}

/// Runtime selection of a sorting algorithm.
///
/// ```
/// use algos_core::{Algorithm, SortOptions, View};
///
/// let options = SortOptions {
///     algorithm: Algorithm::IterativeMergeSort,
///     chunk_size: 4,
/// };
///
/// let mut data = [7, 5, -8, 9, 0, 6, 1, -8, 0, -10];
/// options.sort(View::wrap(&mut data)).unwrap();
/// assert_eq!(data, [-10, -8, -8, 0, 0, 1, 5, 6, 7, 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    pub algorithm: Algorithm,
    /// Base chunk size of the bottom-up merge sort. Ignored by the others.
    pub chunk_size: usize,
}

impl Default for SortOptions {
    fn default() -> Self {
        SortOptions {
            algorithm: Algorithm::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl SortOptions {
    pub fn new(algorithm: Algorithm) -> Self {
        SortOptions {
            algorithm,
            ..Default::default()
        }
    }

    pub fn with_chunk_size(self, chunk_size: usize) -> Self {
        SortOptions { chunk_size, ..self }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize);
        }
        Ok(())
    }

    pub fn sort<T: Element>(&self, view: View<'_, T>) -> Result<(), Error> {
        self.sort_with(view, &mut ())
    }

    pub fn sort_with<T: Element, P: Probe + ?Sized>(
        &self,
        view: View<'_, T>,
        probe: &mut P,
    ) -> Result<(), Error> {
        self.validate()?;
        match self.algorithm {
            Algorithm::MergeSort => merge_sort_with(view, probe),
            Algorithm::IterativeMergeSort => {
                merge_sort_iterative_with(view, self.chunk_size, probe)
            }
            Algorithm::InsertionSort => insertion_sort_with(view, probe),
        }
        Ok(())
    }
}
