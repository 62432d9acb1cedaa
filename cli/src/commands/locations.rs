//! The `locations` command - compare two columns of location identifiers.
//!
//! Both columns are sorted, then paired up in order. The output is the sum of
//! the pairwise distances and a similarity score: every left value `l`
//! contributes `l` times the number of occurrences of `l` in the right column.

use algos_core::search::{lower_bound_with, upper_bound_with};
use algos_core::{Array, SortOptions, SortStats, View};
use algos_radix::Base;

use crate::cli::LocationsArgs;
use crate::common::input::{parse_lines, read_input};
use crate::common::{CliError, CliResult};

/// A single left value present in the right column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub value: u32,
    pub count: usize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub distance: u64,
    pub similarity: u64,
    /// One entry per distinct left value found on the right.
    pub matches: Vec<Match>,
}

/// Run the locations command.
pub fn run(args: LocationsArgs) -> CliResult<()> {
    let options = SortOptions::new(args.algorithm).with_chunk_size(args.chunk_size);
    options.validate()?;

    let (content, display_name) = read_input(&args.file)?;
    let (left, right) = read_columns(&content, &display_name)?;
    tracing::debug!(file = %display_name, rows = left.len(), "read location columns");

    let mut stats = SortStats::default();
    options.sort_with(left.view(), &mut stats)?;
    options.sort_with(right.view(), &mut stats)?;

    let report = compare(left.view(), right.view(), &mut stats);

    if args.matches {
        for Match { value, count } in &report.matches {
            println!("{value} appears {count} times in the right column");
        }
        println!();
    }
    println!(
        "Sum of differences of location identifiers: {}",
        report.distance
    );
    println!("Similarity score: {}", report.similarity);

    if args.stats {
        eprintln!("{stats}");
    }
    Ok(())
}

/// Splits lines of exactly two unsigned integers into a left and right column.
fn read_columns(content: &str, display_name: &str) -> CliResult<(Array<u32>, Array<u32>)> {
    let rows = parse_lines::<u32>(content, display_name, Base::DECIMAL)?;
    let mut left = Vec::with_capacity(rows.len());
    let mut right = Vec::with_capacity(rows.len());
    for (line, values) in rows {
        match values[..] {
            [l, r] => {
                left.push(l);
                right.push(r);
            }
            _ => {
                return Err(CliError::Columns {
                    path: display_name.to_string(),
                    line,
                    found: values.len(),
                });
            }
        }
    }
    Ok((Array::from(left), Array::from(right)))
}

/// Compares two sorted columns of equal length.
///
/// The right column is searched through a slice that shrinks as the left
/// values grow. The slice always starts at the first occurrence of the current
/// left value, so a repeated left value finds the same run again.
pub fn compare(left: View<'_, u32>, right: View<'_, u32>, stats: &mut SortStats) -> Report {
    let mut report = Report::default();
    let mut remaining = right;

    for (l, r) in left.iter().zip(right.iter()) {
        report.distance += u64::from(l.abs_diff(r));

        let start = lower_bound_with(remaining, l, stats);
        remaining = remaining.slice(start, remaining.len());
        let count = upper_bound_with(remaining, l, stats);
        report.similarity += u64::from(l) * count as u64;

        let seen = report.matches.last().is_some_and(|m| m.value == l);
        if count > 0 && !seen {
            report.matches.push(Match { value: l, count });
        }
    }
    report
}
