//! Command-line interface for the tic-tac-toe host.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display config. Defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(cli.config.is_none());
        assert_eq!(cli.log_filter, "warn");
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::parse_from(["tictactoe", "--config", "board.toml", "--log-filter", "debug"]);
        assert_eq!(cli.config, Some(PathBuf::from("board.toml")));
        assert_eq!(cli.log_filter, "debug");
    }
}
