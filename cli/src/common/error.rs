//! Error handling utilities for the CLI.

use algos_core::Algorithm;
use algos_radix::RadixError;
use nu_ansi_term::Color;

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("{path}:{line}: {source}")]
    Parse {
        path: String,
        line: usize,
        source: RadixError,
    },

    #[error("{path}:{line}: expected 2 columns but found {found}")]
    Columns {
        path: String,
        line: usize,
        found: usize,
    },

    #[error(transparent)]
    Sort(#[from] algos_core::Error),

    #[error("{algorithm} left the sample unsorted")]
    Unsorted { algorithm: Algorithm },
}

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    eprintln!("{}", render(&error, no_color));
    std::process::exit(1);
}

fn render(error: &CliError, no_color: bool) -> String {
    let label = if no_color {
        "error".to_string()
    } else {
        Color::Red.bold().paint("error").to_string()
    };
    format!("{label}: {error}")
}
