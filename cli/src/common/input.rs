//! File input utilities.

use std::io::Read;

use algos_radix::{Base, Radix};

use super::{CliError, CliResult};

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_input(path: &str) -> CliResult<(String, String)> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| CliError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok((content, path.to_string()))
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}

/// Parses every whitespace-separated token of every line, grouped by line.
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
pub fn parse_lines<T: Radix>(
    content: &str,
    display_name: &str,
    base: Base,
) -> CliResult<Vec<(usize, Vec<T>)>> {
    let mut lines = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let values = line
            .split_whitespace()
            .map(|token| algos_radix::parse::<T>(token, base))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| CliError::Parse {
                path: display_name.to_string(),
                line: index + 1,
                source,
            })?;
        if !values.is_empty() {
            lines.push((index + 1, values));
        }
    }
    Ok(lines)
}
