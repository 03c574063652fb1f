//! Mutable state of a single round

use crate::core::{Feedback, KeyboardStatus, Word};

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// Solved using `attempts` rows
    Won { attempts: usize },
    /// Every row used without solving
    Lost,
}

/// Externally visible state of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Active,
    Terminal,
}

/// One row of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    letters: Vec<Option<u8>>,
    feedback: Option<Feedback>,
}

impl Attempt {
    fn empty(word_length: usize) -> Self {
        Self {
            letters: vec![None; word_length],
            feedback: None,
        }
    }

    /// Letter in slot `col`, if filled
    #[must_use]
    pub fn letter(&self, col: usize) -> Option<char> {
        self.letters.get(col).copied().flatten().map(char::from)
    }

    /// All slots in order
    pub fn letters(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.letters.iter().map(|l| l.map(char::from))
    }

    /// Feedback, once the attempt has been submitted
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.iter().all(Option::is_some)
    }

    /// The filled letters as a word, if every slot is filled
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let text: Option<String> = self.letters().collect();
        text.and_then(|t| Word::new(t).ok())
    }
}

/// Full mutable game state for one round
///
/// Only the round controller mutates a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    attempts: Vec<Attempt>,
    row: usize,
    col: usize,
    result: Option<RoundResult>,
    keyboard: KeyboardStatus,
}

impl Session {
    /// Create an empty session with `max_attempts` rows of `word_length` slots
    #[must_use]
    pub fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            attempts: (0..max_attempts)
                .map(|_| Attempt::empty(word_length))
                .collect(),
            row: 0,
            col: 0,
            result: None,
            keyboard: KeyboardStatus::new(),
        }
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Index of the attempt being typed
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.row
    }

    /// Index of the next free slot in the current attempt
    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub fn current_attempt(&self) -> &Attempt {
        &self.attempts[self.row]
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.attempts.first().map_or(0, |a| a.letters.len())
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        if self.is_terminal() {
            RoundState::Terminal
        } else {
            RoundState::Active
        }
    }

    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    /// Submitted attempts in order
    pub fn submitted(&self) -> impl Iterator<Item = &Attempt> {
        self.attempts.iter().filter(|a| a.feedback.is_some())
    }

    /// Write `letter` into the next free slot; returns the filled cell
    pub(crate) fn push_letter(&mut self, letter: u8) -> Option<(usize, usize)> {
        if self.is_terminal() || self.col >= self.word_length() {
            return None;
        }
        let cell = (self.row, self.col);
        self.attempts[self.row].letters[self.col] = Some(letter);
        self.col += 1;
        Some(cell)
    }

    /// Clear the last filled slot; returns the cleared cell
    pub(crate) fn pop_letter(&mut self) -> Option<(usize, usize)> {
        if self.is_terminal() || self.col == 0 {
            return None;
        }
        self.col -= 1;
        self.attempts[self.row].letters[self.col] = None;
        Some((self.row, self.col))
    }

    pub(crate) fn set_feedback(&mut self, feedback: Feedback) {
        self.attempts[self.row].feedback = Some(feedback);
    }

    pub(crate) fn keyboard_mut(&mut self) -> &mut KeyboardStatus {
        &mut self.keyboard
    }

    /// Move to the next row; false when the current row is the last one
    pub(crate) fn advance(&mut self) -> bool {
        if self.row + 1 >= self.max_attempts() {
            return false;
        }
        self.row += 1;
        self.col = 0;
        true
    }

    pub(crate) fn finish(&mut self, result: RoundResult) {
        self.result = Some(result);
    }

    /// Reinitialize to the creation state
    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.word_length(), self.max_attempts());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new(5, 6);
        assert_eq!(session.attempts().len(), 6);
        assert_eq!(session.word_length(), 5);
        assert_eq!(session.current_row(), 0);
        assert_eq!(session.current_col(), 0);
        assert_eq!(session.state(), RoundState::Active);
        assert!(session.keyboard().is_empty());
        assert_eq!(session.submitted().count(), 0);
    }

    #[test]
    fn push_stops_at_word_length() {
        let mut session = Session::new(3, 2);
        assert_eq!(session.push_letter(b'C'), Some((0, 0)));
        assert_eq!(session.push_letter(b'A'), Some((0, 1)));
        assert_eq!(session.push_letter(b'T'), Some((0, 2)));
        assert_eq!(session.push_letter(b'S'), None);
        assert_eq!(session.current_col(), 3);
        assert!(session.current_attempt().is_full());
        assert_eq!(session.current_attempt().word().unwrap().text(), "CAT");
    }

    #[test]
    fn pop_stops_at_zero() {
        let mut session = Session::new(3, 2);
        session.push_letter(b'C');
        assert_eq!(session.pop_letter(), Some((0, 0)));
        assert_eq!(session.pop_letter(), None);
        assert_eq!(session.current_attempt().letter(0), None);
    }

    #[test]
    fn advance_stops_at_last_row() {
        let mut session = Session::new(3, 2);
        assert!(session.advance());
        assert_eq!(session.current_row(), 1);
        assert!(!session.advance());
        assert_eq!(session.current_row(), 1);
    }

    #[test]
    fn terminal_blocks_mutation() {
        let mut session = Session::new(3, 2);
        session.push_letter(b'C');
        session.finish(RoundResult::Lost);
        assert_eq!(session.push_letter(b'A'), None);
        assert_eq!(session.pop_letter(), None);
        assert_eq!(session.current_col(), 1);
    }

    #[test]
    fn reset_restores_creation_state() {
        let mut session = Session::new(3, 2);
        session.push_letter(b'C');
        session
            .keyboard_mut()
            .record(b'C', crate::core::Classification::Exact);
        session.advance();
        session.finish(RoundResult::Won { attempts: 2 });

        session.reset();
        assert_eq!(session, Session::new(3, 2));
    }
}
