//! CLI entry point for the segregation simulator

use clap::Parser;
use schelling::io::cli::{Cli, CommandRunner};
use tracing_subscriber::EnvFilter;

fn main() -> schelling::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut runner = CommandRunner::new(cli);
    runner.process()
}
