//! Display configuration for the terminal host.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::Mark;
use tracing::{debug, info, instrument};

/// How the board is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol drawn for X.
    #[serde(default = "default_x_symbol")]
    x_symbol: String,

    /// Symbol drawn for O.
    #[serde(default = "default_o_symbol")]
    o_symbol: String,

    /// Symbol drawn for an empty cell.
    #[serde(default = "default_empty_symbol")]
    empty_symbol: String,

    /// Print row and column numbers around the board.
    #[serde(default = "default_show_coordinates")]
    show_coordinates: bool,
}

fn default_x_symbol() -> String {
    "X".to_string()
}

fn default_o_symbol() -> String {
    "O".to_string()
}

fn default_empty_symbol() -> String {
    "·".to_string()
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            x_symbol: default_x_symbol(),
            o_symbol: default_o_symbol(),
            empty_symbol: default_empty_symbol(),
            show_coordinates: default_show_coordinates(),
        }
    }
}

impl DisplayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Symbol for a cell's mark.
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.x_symbol(),
            Mark::O => self.o_symbol(),
            Mark::Empty => self.empty_symbol(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
