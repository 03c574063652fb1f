//! Word representation
//!
//! A Word stores an uppercase ASCII word as bytes for feedback calculation.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An uppercase ASCII word used as a guess or a secret
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("react").unwrap();
    /// assert_eq!(word.text(), "REACT");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        let text = text.to_ascii_uppercase();
        let letters = text.as_bytes().to_vec();

        Ok(Self { text, letters })
    }

    /// Create a new Word that must be exactly `length` letters long
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the letter count differs, or any
    /// error [`Word::new`] returns.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; a Word holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        count_letters(self.letters.iter().copied())
    }
}

/// Count occurrences of each letter
pub(crate) fn count_letters(letters: impl IntoIterator<Item = u8>) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("REACT").unwrap();
        assert_eq!(word.text(), "REACT");
        assert_eq!(word.letters(), b"REACT");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("react").unwrap();
        assert_eq!(word.text(), "REACT");

        let word2 = Word::new("ReAcT").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_with_length_checks_length() {
        assert!(Word::with_length("react", 5).is_ok());
        assert_eq!(
            Word::with_length("reacts", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
        assert_eq!(
            Word::with_length("ace", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("reac7"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("rea t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("reac!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("réact"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("eerie").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'E'), Some(&3));
        assert_eq!(counts.get(&b'R'), Some(&1));
        assert_eq!(counts.get(&b'I'), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_letter_counts_long_word() {
        let word = Word::new("A".repeat(300)).unwrap();
        assert_eq!(word.letter_counts().get(&b'A'), Some(&300));
    }

    #[test]
    fn word_display() {
        let word = Word::new("react").unwrap();
        assert_eq!(format!("{word}"), "REACT");
    }
}
