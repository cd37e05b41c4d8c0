//! Play configuration loaded from TOML and overridden from the command line.

use crate::cli::BoardArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use ntoe::{Board, BoardError, Player, Scoring, TieBreak};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Board size N.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Marks in a row needed to win; the full board size when unset.
    #[serde(default)]
    win_length: Option<usize>,

    /// Weight of the opponent's lines relative to the player's own.
    #[serde(default = "default_defensiveness")]
    defensiveness: f64,

    /// Break ties between equally weighted slots at random.
    #[serde(default)]
    random_ties: bool,

    /// Player who moves first in self-play.
    #[serde(default = "default_first_player")]
    first_player: Player,
}

fn default_board_size() -> usize {
    3
}

fn default_defensiveness() -> f64 {
    ntoe::DEFAULT_DEFENSIVENESS
}

fn default_first_player() -> Player {
    Player::X
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            win_length: None,
            defensiveness: default_defensiveness(),
            random_ties: false,
            first_player: default_first_player(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise defaults, then applies
    /// command-line overrides.
    #[instrument(skip(args), fields(path = %args.config.display()))]
    pub fn load(args: &BoardArgs) -> Result<Self, ConfigError> {
        let mut config = if args.config.exists() {
            Self::from_file(&args.config)?
        } else {
            debug!("Config file not found, using defaults");
            Self::default()
        };

        if let Some(size) = args.size {
            config.board_size = size;
        }
        if let Some(win_length) = args.win_length {
            config.win_length = Some(win_length);
        }
        if let Some(defensiveness) = args.defensiveness {
            config.defensiveness = defensiveness;
        }
        if let Some(random_ties) = args.random_ties {
            config.random_ties = random_ties;
        }
        Ok(config)
    }

    /// Win length in effect.
    pub fn effective_win_length(&self) -> usize {
        self.win_length.unwrap_or(self.board_size)
    }

    /// Builds an empty board of the configured shape.
    pub fn empty_board(&self) -> Result<Board, BoardError> {
        Board::with_win_length(self.board_size, self.effective_win_length())
    }

    /// Builds a board of the configured shape from its textual form.
    pub fn parse_board(&self, text: &str) -> Result<Board, BoardError> {
        Board::parse(self.board_size, self.effective_win_length(), text)
    }

    /// Scoring parameters in effect.
    pub fn scoring(&self) -> Result<Scoring, BoardError> {
        let tie_break = if self.random_ties {
            TieBreak::Random
        } else {
            TieBreak::FirstInScanOrder
        };
        Scoring::new(self.defensiveness, tie_break)
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
