//! Error types for configuration and round play

use crate::core::WordError;
use thiserror::Error;

/// Rejected game configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid secret word: {0}")]
    InvalidSecret(#[from] WordError),
    #[error("Word length must be at least 1")]
    ZeroWordLength,
    #[error("Maximum attempts must be at least 1")]
    ZeroAttempts,
}

/// Recoverable failure of a round operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Not enough letters: {filled} of {required}")]
    IncompleteAttempt { filled: usize, required: usize },
}
