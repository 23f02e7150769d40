use std::path::PathBuf;

use crate::game::Player;

/// Errors returned when a piece cannot be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid column {0}")]
    InvalidColumn(isize),

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Errors that can occur when building a genome from explicit genes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenomeError {
    #[error("gene {index} names column {column}, outside the board")]
    GeneOutOfRange { index: usize, column: usize },

    #[error("expected {expected} genes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Errors that can occur while playing an exhibition game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExhibitionError {
    #[error("{agent} ({player}) produced {attempts} illegal moves in a row")]
    MoveAttemptsExhausted {
        agent: String,
        player: Player,
        attempts: usize,
    },
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

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
