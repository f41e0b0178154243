//! Engine configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_grid::{BlockPolicy, ScanPolicy};
use strum::Display as StrumDisplay;
use tracing::{debug, info, instrument};

/// Built-in board setups.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, StrumDisplay, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    /// 6x7 gravity board, four in a row.
    ConnectFour,
    /// 3x3 free placement, three in a row.
    TicTacToe,
}

/// Board and scanner settings for a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Number of columns.
    #[serde(default = "default_cols")]
    cols: usize,

    /// Markers in a row needed to win.
    #[serde(default = "default_win_length")]
    win_length: usize,

    /// Markers drop to the lowest open row of a column.
    #[serde(default = "default_gravity")]
    gravity: bool,

    /// Row and column windowing for win detection.
    #[serde(default)]
    scan_policy: ScanPolicy,

    /// Block column preference for the gravity scanner.
    #[serde(default)]
    block_policy: BlockPolicy,

    /// Seed for the random fallback move. Entropy-seeded when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_rows() -> usize {
    6
}

#[instrument]
fn default_cols() -> usize {
    7
}

#[instrument]
fn default_win_length() -> usize {
    4
}

#[instrument]
fn default_gravity() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::connect_four()
    }
}

impl EngineConfig {
    /// Standard connect-four setup.
    pub fn connect_four() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            win_length: default_win_length(),
            gravity: default_gravity(),
            scan_policy: ScanPolicy::Sliding,
            block_policy: BlockPolicy::LastFound,
            seed: None,
        }
    }

    /// Standard tic-tac-toe setup.
    pub fn tic_tac_toe() -> Self {
        Self {
            rows: 3,
            cols: 3,
            win_length: 3,
            gravity: false,
            scan_policy: ScanPolicy::WholeLine,
            block_policy: BlockPolicy::LastFound,
            seed: None,
        }
    }

    /// Configuration for a preset.
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::ConnectFour => Self::connect_four(),
            Preset::TicTacToe => Self::tic_tac_toe(),
        }
    }

    /// Replaces the random fallback seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Loads configuration from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;
        let config = Self::from_toml(&content)?;
        info!(
            rows = config.rows,
            cols = config.cols,
            win_length = config.win_length,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Rejects empty boards and win lengths that cannot be played.
    #[instrument(
        skip(self),
        fields(rows = self.rows, cols = self.cols, win_length = self.win_length)
    )]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::new(format!(
                "Board must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        let longest = self.rows.max(self.cols);
        if self.win_length < 2 || self.win_length > longest {
            return Err(ConfigError::new(format!(
                "Win length {} must be between 2 and {}",
                self.win_length, longest
            )));
        }
        Ok(())
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
