//! Single-guess scoring command
//!
//! Classifies one guess against the configured secret without playing a round.

use crate::core::{Feedback, Word};
use crate::game::GameConfig;

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against the configured secret
///
/// # Errors
///
/// Returns an error if the guess is not alphabetic or does not have the
/// configured word length.
pub fn score_guess(config: &GameConfig, guess: &str) -> Result<ScoreResult, String> {
    let guess = Word::with_length(guess.trim(), config.word_length())
        .map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback = Feedback::classify(&guess, config.secret());

    Ok(ScoreResult { guess, feedback })
}
