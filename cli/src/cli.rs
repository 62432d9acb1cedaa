//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use algos_core::Algorithm;
use algos_core::sort::DEFAULT_CHUNK_SIZE;
use algos_radix::Base;
use clap::{Args, Parser, Subcommand};

/// Algos - array views, merge sorts and binary search
#[derive(Parser, Debug)]
#[command(name = "algos", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort a fixed sample with the chosen algorithm and verify the result
    Check(CheckArgs),

    /// Show that slices alias their array and copies do not
    Views,

    /// Sort whitespace-separated integers from a file
    Sort(SortArgs),

    /// Compare two columns of location identifiers
    Locations(LocationsArgs),
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Sorting algorithm: merge_sort, imerge_sort or insertion_sort
    #[arg(long, short, default_value_t = Algorithm::MergeSort)]
    pub algorithm: Algorithm,

    /// Base chunk size for the iterative merge sort
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,
}

/// Arguments for the `sort` command.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Input file (use - for stdin)
    pub file: String,

    /// Sorting algorithm: merge_sort, imerge_sort or insertion_sort
    #[arg(long, short, default_value_t = Algorithm::MergeSort)]
    pub algorithm: Algorithm,

    /// Base chunk size for the iterative merge sort
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Numeric base of the input and output (2 to 36)
    #[arg(long, default_value_t = Base::DECIMAL)]
    pub base: Base,

    /// Print allocation and copy statistics to stderr
    #[arg(long)]
    pub stats: bool,
}

/// Arguments for the `locations` command.
#[derive(Args, Debug)]
pub struct LocationsArgs {
    /// Input file with two columns of unsigned integers (use - for stdin)
    pub file: String,

    /// Sorting algorithm used for both columns
    #[arg(long, short, default_value_t = Algorithm::IterativeMergeSort)]
    pub algorithm: Algorithm,

    /// Base chunk size for the iterative merge sort
    #[arg(long, default_value_t = 2)]
    pub chunk_size: usize,

    /// Print allocation, copy and search statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// List every left value found in the right column
    #[arg(long)]
    pub matches: bool,
}
