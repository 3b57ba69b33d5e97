//! TOML configuration for sessions and self-play.
//!
//! ```toml
//! [bot]
//! depth = 3
//! seed = 42
//!
//! [selfplay]
//! games = 4
//! opponent = "random"
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use minimax_bot::BotConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Engine facing the minimax bot in self-play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    #[default]
    Minimax,
    Random,
}

impl FromStr for OpponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minimax" | "bot" => Ok(OpponentKind::Minimax),
            "random" => Ok(OpponentKind::Random),
            other => Err(format!("unknown opponent '{other}' (expected minimax or random)")),
        }
    }
}

impl fmt::Display for OpponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OpponentKind::Minimax => "minimax",
            OpponentKind::Random => "random",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub games: u32,
    /// Plies before a game is called a draw.
    pub max_plies: u32,
    /// Swap colors every other game.
    pub alternate_colors: bool,
    pub opponent: OpponentKind,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            games: 2,
            max_plies: 200,
            alternate_colors: true,
            opponent: OpponentKind::Minimax,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub bot: BotConfig,
    pub selfplay: SelfPlayConfig,
}

impl SessionConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
