//! Configuration file loading.
//!
//! Settings come from `checkers.toml` in the current directory (or a path
//! given on the command line); command-line flags override them.

use crate::contestant::ContestantKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Who plays each side in an interactive game.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PlayersConfig {
    #[serde(default = "default_red")]
    pub red: ContestantKind,
    #[serde(default = "default_black")]
    pub black: ContestantKind,
}

fn default_red() -> ContestantKind {
    ContestantKind::Human
}

fn default_black() -> ContestantKind {
    ContestantKind::Random
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            red: default_red(),
            black: default_black(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CheckersConfig {
    /// Seed for random players. A fresh seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Turns after which a game is abandoned. Defaults to 500.
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
    /// Number of self-play games. Defaults to 20.
    #[serde(default = "default_games")]
    pub games: u32,
    #[serde(default)]
    pub players: PlayersConfig,
}

fn default_max_turns() -> u32 {
    500
}

fn default_games() -> u32 {
    20
}

impl Default for CheckersConfig {
    fn default() -> Self {
        CheckersConfig {
            seed: None,
            max_turns: default_max_turns(),
            games: default_games(),
            players: PlayersConfig::default(),
        }
    }
}

impl CheckersConfig {
    /// Loads configuration.
    ///
    /// With an explicit `path` the file must exist. Otherwise
    /// [`Self::default_path()`] is read if present, and defaults are used if
    /// it is not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_path(), false),
        };
        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::ReadError { path: path.clone(), source })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("checkers.toml")
    }

    /// Returns the configured seed, or a random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
