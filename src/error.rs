//! Error types for moves, configuration and startup

use std::path::PathBuf;

/// Reasons a move is refused. None of them change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,

    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell ({row}, {col}) is already taken")]
    Occupied { row: i32, col: i32 },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Top-level errors surfaced by the binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),
}
