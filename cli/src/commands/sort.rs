//! The `sort` command - sort integers read from a file.

use algos_core::{Array, SortOptions, SortStats};

use crate::cli::SortArgs;
use crate::common::CliResult;
use crate::common::input::{parse_lines, read_input};

/// Run the sort command.
pub fn run(args: SortArgs) -> CliResult<()> {
    let options = SortOptions::new(args.algorithm).with_chunk_size(args.chunk_size);
    options.validate()?;

    let (content, display_name) = read_input(&args.file)?;
    let values: Array<i64> = parse_lines::<i64>(&content, &display_name, args.base)?
        .into_iter()
        .flat_map(|(_, values)| values)
        .collect();
    tracing::debug!(file = %display_name, count = values.len(), "read values");

    let mut stats = SortStats::default();
    options.sort_with(values.view(), &mut stats)?;

    for value in values.iter() {
        println!("{}", algos_radix::format(value, args.base));
    }
    if args.stats {
        eprintln!("{stats}");
    }
    Ok(())
}
