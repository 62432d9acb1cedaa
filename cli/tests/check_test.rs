//! Integration tests for the `check` command.

mod common;

use common::{algos, check_stderr, check_stdout};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn check_default_algorithm() {
    check_stdout(
        &["check", "--no-color"],
        None,
        expect![[r#"
            Using sorting algorithm: merge_sort
            ..:: Unsorted Array [10] ::..
            +7 +5 -8 +9 +0 +6 +1 -8 +0 -10
            ..:: Sorted Array [10] ::..
            -10 -8 -8 +0 +0 +1 +5 +6 +7 +9
        "#]],
    );
}

#[test]
fn check_iterative_with_chunk_size() {
    check_stdout(
        &["check", "--algorithm", "imerge_sort", "--chunk-size", "3", "--no-color"],
        None,
        expect![[r#"
            Using sorting algorithm: imerge_sort (chunk size 3)
            ..:: Unsorted Array [10] ::..
            +7 +5 -8 +9 +0 +6 +1 -8 +0 -10
            ..:: Sorted Array [10] ::..
            -10 -8 -8 +0 +0 +1 +5 +6 +7 +9
        "#]],
    );
}

#[test]
fn check_every_algorithm_succeeds() {
    for algorithm in ["merge", "imerge", "insertion", "insertion_sort"] {
        algos()
            .args(["check", "-a", algorithm])
            .assert()
            .success()
            .stdout(predicate::str::contains("-10 -8 -8 +0 +0 +1 +5 +6 +7 +9"));
    }
}

#[test]
fn check_colors_sizes() {
    algos()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("[\u{1b}[38;5;51m10\u{1b}[0m]"));
}

#[test]
fn check_zero_chunk_size() {
    check_stderr(
        &["check", "--chunk-size", "0", "--no-color"],
        None,
        expect![[r#"
            error: base chunk size must be at least 1
        "#]],
    );
    algos().args(["check", "--chunk-size", "0"]).assert().code(1);
}

#[test]
fn check_unknown_algorithm() {
    algos()
        .args(["check", "--algorithm", "bogo_sort"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "unknown sorting algorithm `bogo_sort` (expected merge_sort, imerge_sort or insertion_sort)",
        ));
}
