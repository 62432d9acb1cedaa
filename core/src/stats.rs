//! Per-run instrumentation for the search, merge and sort routines.
//!
//! Every algorithm has a plain entry point and a `*_with` variant that takes a
//! `&mut impl Probe`. The plain entry points pass `&mut ()`, which ignores
//! every event. Callers who want numbers create a [`SortStats`] for the run and
//! read it afterwards; nothing is shared between runs.
//!
//! ```
//! use algos_core::{SortStats, View, sort};
//!
//! let mut data = [3, 1, 2];
//! let mut stats = SortStats::default();
//! sort::merge_sort_with(View::wrap(&mut data), &mut stats);
//!
//! assert_eq!(data, [1, 2, 3]);
//! assert!(stats.comparisons > 0);
//! assert_eq!(stats.bytes_copied, stats.elements_copied * 4);
//! ```

use core::fmt;

/// Receives events from the algorithms. All hooks default to doing nothing.
pub trait Probe {
    /// A scratch buffer of `elements` (`bytes` in total) was allocated.
    fn allocated(&mut self, elements: usize, bytes: usize) {
        let _ = (elements, bytes);
    }

    /// `elements` were bulk-copied between buffers.
    fn copied(&mut self, elements: usize, bytes: usize) {
        let _ = (elements, bytes);
    }

    /// A merge wrote `elements` to its output.
    fn merged(&mut self, elements: usize) {
        let _ = elements;
    }

    /// `count` element comparisons were made.
    fn compared(&mut self, count: usize) {
        let _ = count;
    }

    /// `count` adjacent swaps were made.
    fn swapped(&mut self, count: usize) {
        let _ = count;
    }
}

impl Probe for () {}

/// Counters collected over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortStats {
    pub allocations: usize,
    pub bytes_allocated: usize,
    pub elements_copied: usize,
    pub bytes_copied: usize,
    pub elements_merged: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

impl Probe for SortStats {
    fn allocated(&mut self, _elements: usize, bytes: usize) {
        self.allocations += 1;
        self.bytes_allocated += bytes;
    }

    fn copied(&mut self, elements: usize, bytes: usize) {
        self.elements_copied += elements;
        self.bytes_copied += bytes;
    }

    fn merged(&mut self, elements: usize) {
        self.elements_merged += elements;
    }

    fn compared(&mut self, count: usize) {
        self.comparisons += count;
    }

    fn swapped(&mut self, count: usize) {
        self.swaps += count;
    }
}

impl<P: Probe + ?Sized> Probe for &mut P {
    fn allocated(&mut self, elements: usize, bytes: usize) {
        (**self).allocated(elements, bytes);
    }

    fn copied(&mut self, elements: usize, bytes: usize) {
        (**self).copied(elements, bytes);
    }

    fn merged(&mut self, elements: usize) {
        (**self).merged(elements);
    }

    fn compared(&mut self, count: usize) {
        (**self).compared(count);
    }

    fn swapped(&mut self, count: usize) {
        (**self).swapped(count);
    }
}

impl fmt::Display for SortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Allocations:     {}", self.allocations)?;
        writeln!(f, "Bytes allocated: {}", self.bytes_allocated)?;
        writeln!(f, "Elements copied: {}", self.elements_copied)?;
        writeln!(f, "Bytes copied:    {}", self.bytes_copied)?;
        writeln!(f, "Elements merged: {}", self.elements_merged)?;
        writeln!(f, "Comparisons:     {}", self.comparisons)?;
        write!(f, "Swaps:           {}", self.swaps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_probe_ignores_events() {
        let probe: &mut dyn Probe = &mut ();
        probe.allocated(4, 16);
        probe.copied(4, 16);
        probe.compared(3);
    }

    #[test]
    fn test_stats_accumulate() {
        let mut stats = SortStats::default();
        stats.allocated(4, 16);
        stats.allocated(2, 8);
        stats.copied(4, 16);
        stats.merged(6);
        stats.compared(5);
        stats.swapped(2);

        assert_eq!(
            stats,
            SortStats {
                allocations: 2,
                bytes_allocated: 24,
                elements_copied: 4,
                bytes_copied: 16,
                elements_merged: 6,
                comparisons: 5,
                swaps: 2,
            }
        );
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn count_seven(mut probe: impl Probe) {
            probe.compared(7);
        }

        let mut stats = SortStats::default();
        count_seven(&mut stats);
        assert_eq!(stats.comparisons, 7);
    }
}
