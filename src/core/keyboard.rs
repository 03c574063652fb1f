//! Keyboard letter status
//!
//! Tracks the best classification seen for each letter across a round.

use super::Classification;
use rustc_hash::FxHashMap;

/// Best-known classification per letter
///
/// Statuses only ever improve: grey → yellow → green.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<u8, Classification>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a classification for `letter`
    ///
    /// Returns `true` if the stored status changed. A classification lower
    /// than the stored one is ignored.
    pub fn record(&mut self, letter: u8, classification: Classification) -> bool {
        let letter = letter.to_ascii_uppercase();
        match self.letters.get(&letter) {
            Some(&current) if current >= classification => false,
            _ => {
                self.letters.insert(letter, classification);
                true
            }
        }
    }

    /// Current status of `letter`, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Classification> {
        if !letter.is_ascii() {
            return None;
        }
        self.letters
            .get(&(letter.to_ascii_uppercase() as u8))
            .copied()
    }

    /// Iterate over all known letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, Classification)> + '_ {
        let mut entries: Vec<_> = self
            .letters
            .iter()
            .map(|(&letter, &status)| (char::from(letter), status))
            .collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries.into_iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{Absent, Exact, Present};

    #[test]
    fn record_new_letter() {
        let mut keys = KeyboardStatus::new();
        assert!(keys.record(b'R', Absent));
        assert_eq!(keys.get('R'), Some(Absent));
        assert_eq!(keys.get('r'), Some(Absent));
        assert_eq!(keys.get('Q'), None);
    }

    #[test]
    fn record_upgrades() {
        let mut keys = KeyboardStatus::new();
        keys.record(b'E', Absent);
        assert!(keys.record(b'E', Present));
        assert!(keys.record(b'E', Exact));
        assert_eq!(keys.get('E'), Some(Exact));
    }

    #[test]
    fn record_never_downgrades() {
        let mut keys = KeyboardStatus::new();
        keys.record(b'E', Exact);
        assert!(!keys.record(b'E', Present));
        assert!(!keys.record(b'E', Absent));
        assert_eq!(keys.get('E'), Some(Exact));

        keys.record(b'A', Present);
        assert!(!keys.record(b'A', Absent));
        assert_eq!(keys.get('A'), Some(Present));
    }

    #[test]
    fn record_same_status_is_unchanged() {
        let mut keys = KeyboardStatus::new();
        keys.record(b'T', Present);
        assert!(!keys.record(b'T', Present));
    }

    #[test]
    fn iter_sorted_and_clear() {
        let mut keys = KeyboardStatus::new();
        keys.record(b'T', Present);
        keys.record(b'A', Exact);
        keys.record(b'M', Absent);

        let letters: Vec<char> = keys.iter().map(|(l, _)| l).collect();
        assert_eq!(letters, vec!['A', 'M', 'T']);

        keys.clear();
        assert!(keys.is_empty());
        assert_eq!(keys.len(), 0);
    }
}
