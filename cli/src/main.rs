//! Algos CLI - array views, merge sorts and binary search from the shell.

use algos_cli::cli::{Cli, Command};
use algos_cli::{commands, common};
use clap::Parser;

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the level, WARN if unset or invalid
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check(args) => commands::check::run(args, cli.no_color),
        Command::Views => commands::views::run(cli.no_color),
        Command::Sort(args) => commands::sort::run(args),
        Command::Locations(args) => commands::locations::run(args),
    };

    if let Err(e) = result {
        common::error::render_and_exit(e, cli.no_color);
    }
}
