//! Tic-tac-toe terminal host.
//!
//! Reads moves from stdin and redraws the board after each one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod host;
mod input;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::DisplayConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => DisplayConfig::from_file(path)?,
        None => DisplayConfig::default(),
    };

    info!("Starting tic-tac-toe");
    println!("Enter moves as `<row> <column>` (0-2), or `q` to quit.");

    let stdin = std::io::stdin();
    let state = host::run_game(&config, stdin.lock(), std::io::stdout())?;
    info!(?state, "Exiting");
    Ok(())
}
