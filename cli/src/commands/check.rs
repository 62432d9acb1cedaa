//! The `check` command - sort a fixed sample and verify the result.

use algos_core::{Algorithm, Array, SortOptions};

use crate::cli::CheckArgs;
use crate::common::paint::paint;
use crate::common::{CliError, CliResult};

const SAMPLE: [i32; 10] = [7, 5, -8, 9, 0, 6, 1, -8, 0, -10];

/// Run the check command.
pub fn run(args: CheckArgs, no_color: bool) -> CliResult<()> {
    let algorithm = args.algorithm;
    let options = SortOptions::new(algorithm).with_chunk_size(args.chunk_size);
    options.validate()?;

    match algorithm {
        Algorithm::IterativeMergeSort => println!(
            "Using sorting algorithm: {algorithm} (chunk size {})",
            args.chunk_size
        ),
        _ => println!("Using sorting algorithm: {algorithm}"),
    }

    let array = Array::from(SAMPLE.to_vec());
    print_array("Unsorted", &array, no_color);

    options.sort(array.view())?;
    print_array("Sorted", &array, no_color);

    if !array.view().is_sorted() {
        return Err(CliError::Unsorted { algorithm });
    }
    Ok(())
}

fn print_array(label: &str, array: &Array<i32>, no_color: bool) {
    let size = paint(&format!("{{{}:f cyan}}", array.len()), !no_color);
    println!("..:: {label} Array [{size}] ::..");
    println!("{}", signed(array));
}

/// Elements with an explicit sign, separated by spaces.
fn signed(array: &Array<i32>) -> String {
    array
        .iter()
        .map(|value| format!("{value:+}"))
        .collect::<Vec<_>>()
        .join(" ")
}
