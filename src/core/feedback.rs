//! Guess feedback calculation and representation
//!
//! Each position of a submitted guess is classified as:
//! - Absent (grey): letter not in the secret, after accounting for duplicates
//! - Present (yellow): letter in the secret, wrong position
//! - Exact (green): letter in the correct position
//!
//! Classifications are ordered `Absent < Present < Exact` so the keyboard
//! status can only move upwards.

use super::Word;
use super::word::count_letters;
use std::fmt;
use std::str::FromStr;

/// Per-letter result of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Classification {
    /// Letter not in the secret (grey)
    Absent,
    /// Letter in the secret, wrong position (yellow)
    Present,
    /// Letter in the correct position (green)
    Exact,
}

impl Classification {
    /// Emoji square for share output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character notation (`G`, `Y`, `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for one submitted guess
///
/// Holds exactly one [`Classification`] per letter of the guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Classification>);

impl Feedback {
    /// Classify `guess` against `secret`
    ///
    /// Implements Wordle's feedback rules, including proper handling of
    /// duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those secret positions
    /// 2. Count the letters of the unconsumed secret positions
    /// 3. Second pass, left to right: mark present letters from the remaining
    ///    counts, everything else is absent
    ///
    /// Both words must have the same length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification, Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("react").unwrap();
    /// let feedback = Feedback::classify(&guess, &secret);
    ///
    /// // C(yellow) R(yellow) A(green) N(grey) E(yellow)
    /// assert_eq!(feedback.to_string(), "YYG-Y");
    /// assert_eq!(feedback.classifications()[2], Classification::Exact);
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, secret: &Word) -> Self {
        debug_assert_eq!(
            guess.len(),
            secret.len(),
            "guess and secret must have the same length"
        );

        let guess = guess.letters();
        let secret = secret.letters();
        let mut result = vec![Classification::Absent; guess.len()];
        let mut consumed = vec![false; secret.len()];

        // First pass: exact position matches
        for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
            if g == s {
                result[i] = Classification::Exact;
                consumed[i] = true;
            }
        }

        // Letters still available for present matches
        let mut remaining = count_letters(
            secret
                .iter()
                .zip(&consumed)
                .filter(|(_, used)| !**used)
                .map(|(&s, _)| s),
        );

        // Second pass: wrong position, but letter still available
        for (i, &g) in guess.iter().enumerate() {
            if result[i] == Classification::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                result[i] = Classification::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position classifications
    #[inline]
    #[must_use]
    pub fn classifications(&self) -> &[Classification] {
        &self.0
    }

    /// Number of classified positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == Classification::Exact)
    }

    /// Count the number of green squares
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0
            .iter()
            .filter(|&&c| c == Classification::Exact)
            .count()
    }

    /// Count the number of yellow squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&c| c == Classification::Present)
            .count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.symbol())?;
        }
        Ok(())
    }
}

/// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts:
/// - 'G'/'g'/🟩 for exact
/// - 'Y'/'y'/🟨 for present
/// - '-'/'_'/⬜ for absent
impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Empty feedback string".to_string());
        }

        s.chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Ok(Classification::Exact),
                'Y' | 'y' | '🟨' => Ok(Classification::Present),
                '-' | '_' | '⬜' => Ok(Classification::Absent),
                _ => Err(format!("Invalid feedback string: {s}")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(guess: &str, secret: &str) -> Feedback {
        Feedback::classify(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    fn parse(s: &str) -> Feedback {
        s.parse().unwrap()
    }

    #[test]
    fn feedback_all_exact() {
        let feedback = classify("react", "react");

        assert!(feedback.is_solved());
        assert_eq!(feedback.count_exact(), 5);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = classify("build", "react");

        assert_eq!(feedback, parse("-----"));
        assert!(!feedback.is_solved());
    }

    #[test]
    fn feedback_trace_against_react() {
        // T R A C E vs R E A C T: A and C line up, T R E are misplaced
        let feedback = classify("trace", "react");
        assert_eq!(feedback, parse("YYGGY"));
    }

    #[test]
    fn feedback_duplicate_letters_exact_consumes_first() {
        // EERIE vs REACT: the E at index 1 is exact and uses up the only E
        let feedback = classify("eerie", "react");
        assert_eq!(feedback, parse("-GY--"));

        let e_marks = feedback
            .classifications()
            .iter()
            .zip(b"EERIE")
            .filter(|(c, l)| **l == b'E' && **c != Classification::Absent)
            .count();
        assert_eq!(e_marks, 1);
    }

    #[test]
    fn feedback_duplicate_letters_left_to_right() {
        // Only one E in the secret and neither guess E is exact:
        // the leftmost E gets the yellow
        let feedback = classify("eeabc", "xyzwe");
        assert_eq!(feedback, parse("Y----"));
    }

    #[test]
    fn feedback_duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: S yellow, both E yellow (ERASE has two)
        let feedback = classify("speed", "erase");
        assert_eq!(feedback, parse("Y-YY-"));
    }

    #[test]
    fn feedback_duplicate_letters_complex() {
        // ROBOT vs FLOOR: second O is green, first O takes the other O as yellow
        let feedback = classify("robot", "floor");
        assert_eq!(feedback, parse("YY-G-"));
        assert_eq!(feedback.count_exact(), 1);
        assert_eq!(feedback.count_present(), 2);
    }

    #[test]
    fn feedback_other_lengths() {
        assert_eq!(classify("cat", "act"), parse("YYG"));
        assert!(classify("letters", "letters").is_solved());
    }

    #[test]
    fn feedback_long_words_with_many_repeats() {
        // More than 255 unmatched copies of a letter on each side
        let secret = format!("{}{}", "A".repeat(300), "B".repeat(300));
        let guess = format!("{}{}", "B".repeat(300), "A".repeat(300));
        let feedback = classify(&guess, &secret);

        assert_eq!(feedback.len(), 600);
        assert_eq!(feedback.count_present(), 600);

        let feedback = classify(&"B".repeat(256), &"A".repeat(256));
        assert_eq!(feedback.count_present() + feedback.count_exact(), 0);
    }

    #[test]
    fn feedback_from_str_variants() {
        let p1 = parse("GYG--");
        let p2 = parse("🟩🟨🟩⬜⬜");
        let p3 = parse("gyg__");

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.len(), 5);
    }

    #[test]
    fn feedback_from_str_invalid() {
        assert!("GXGGY".parse::<Feedback>().is_err());
        assert!("".parse::<Feedback>().is_err());
    }

    #[test]
    fn feedback_to_emoji_and_display() {
        let feedback = parse("GY-GY");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(feedback.to_string(), "GY-GY");
    }

    #[test]
    fn classification_ordering_is_monotonic() {
        assert!(Classification::Absent < Classification::Present);
        assert!(Classification::Present < Classification::Exact);
    }
}
