use std::path::PathBuf;

use castellan_core::{MoveError, PromotionError, SetupError};
use thiserror::Error;

/// Why the turn policy refused a request.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("the game is over")]
    GameOver,

    #[error("that piece does not belong to the side to move")]
    NotYourTurn,

    #[error("no piece is selected")]
    NothingSelected,

    #[error("the bot is to move")]
    BotTurn,

    #[error("pieces can only be placed or removed in sandbox mode before play starts")]
    SetupLocked,

    #[error("kings cannot be removed")]
    KingRemoval,

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Promotion(#[from] PromotionError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Worker(#[from] WorkerError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("search task failed: {0}")]
    Join(String),

    #[error("the engine was lost in an earlier failed search")]
    EngineLost,
}
