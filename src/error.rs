use std::path::PathBuf;

use crate::go::{BoardPosition, GoPlayer};

/// Errors raised by board mutations. None of them leave a partial change behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board size {0}")]
    InvalidSize(usize),

    #[error("position {position} is outside a {size}x{size} board")]
    OutOfBounds { position: BoardPosition, size: usize },

    #[error("position {0} is already occupied")]
    OccupiedCell(BoardPosition),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("it is {expected}'s turn, not {attempted}'s")]
    OutOfTurn {
        expected: GoPlayer,
        attempted: GoPlayer,
    },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors that can occur while reading or writing SGF records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SgfError {
    #[error("failed to parse SGF: {0}")]
    Parse(String),

    #[error("SGF records with variations are not supported")]
    Variations,

    #[error("pass moves are not supported")]
    Pass,

    #[error("invalid SGF coordinate ({0}, {1})")]
    Coordinate(u8, u8),

    #[error("a {0}x{0} board does not fit in SGF coordinates")]
    BoardTooLarge(usize),

    #[error("only square boards are supported, got {0}x{1}")]
    NonSquareBoard(u32, u32),

    #[error("invalid setup: {0}")]
    Setup(#[from] BoardError),

    #[error("illegal move in record: {0}")]
    Move(#[from] MoveError),
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
