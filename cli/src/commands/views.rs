//! The `views` command - show how slices and copies relate to their array.

use algos_core::{Array, View};

use crate::common::CliResult;
use crate::common::paint::paint;

/// Run the views command.
pub fn run(no_color: bool) -> CliResult<()> {
    let mut data: Vec<i32> = (0..6).collect();
    let array = View::wrap(&mut data);
    let slice = array.slice(1, 4);
    let copy = Array::copy_of(array);

    let independent = !copy.view().overlaps(array);
    let answer = if independent {
        "{true:f green}"
    } else {
        "{false:f red}"
    };

    println!("..:: Array Views ::..");
    println!("Copy doesn't alias: {}", paint(answer, !no_color));
    println!("Array:       {}", list(array));
    println!("Array[1:4]:  {}", list(slice));

    // Writes through the slice land in the array, never in the copy.
    slice.set(0, 10);
    println!("Array[1] = 10 through the slice");
    println!("Array:       {}", list(array));
    println!("Copy:        {}", list(copy.view()));
    Ok(())
}

fn list(view: View<'_, i32>) -> String {
    view.iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
