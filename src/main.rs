//! xmlinline - Inline `<include>` directives of an XML file into one document
//!
//! xmlinline provides:
//! - Resolution of top-level `<include>` elements against the input's directory
//! - Windows-style include paths on any host
//! - Indented UTF-8 output with an XML declaration
//! - Optional progress and per-phase timing reports

use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod inline;

fn main() -> ExitCode {
    let started = Instant::now();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = cli::Cli::parse();
    cli::run(cli, started)
}
