//! Game configuration fixed at startup

use super::ConfigError;
use crate::core::Word;

/// Secret word used when none is configured
pub const DEFAULT_SECRET: &str = "REACT";

/// Default number of letters per word
pub const WORD_LENGTH: usize = 5;

/// Default number of attempts per round
pub const MAX_ATTEMPTS: usize = 6;

/// Configuration for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    secret: Word,
    max_attempts: usize,
}

impl GameConfig {
    /// Build a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `word_length` or `max_attempts` is zero
    /// - The secret is not alphabetic or not exactly `word_length` letters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::GameConfig;
    ///
    /// let config = GameConfig::new("react", 5, 6).unwrap();
    /// assert_eq!(config.secret().text(), "REACT");
    ///
    /// assert!(GameConfig::new("reacts", 5, 6).is_err());
    /// ```
    pub fn new(secret: &str, word_length: usize, max_attempts: usize) -> Result<Self, ConfigError> {
        if word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        let secret = Word::with_length(secret, word_length)?;

        Ok(Self {
            secret,
            max_attempts,
        })
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET, WORD_LENGTH, MAX_ATTEMPTS).expect("default config is valid")
    }
}
