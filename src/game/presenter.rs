//! Outbound presentation notifications
//!
//! The round controller never draws anything itself. It reports every
//! visible change through a [`Presenter`], so the TUI, the line mode and
//! tests can each plug in their own implementation.

use crate::core::Classification;

/// Receiver of the controller's presentation notifications
pub trait Presenter {
    /// Show `letter` in the cell at (`row`, `col`), or clear it when `None`
    fn render_letter(&mut self, row: usize, col: usize, letter: Option<char>);

    /// Mark the cell at (`row`, `col`) with its classification
    fn render_classification(&mut self, row: usize, col: usize, classification: Classification);

    /// Update the on-screen key for `letter`
    fn render_keyboard_status(&mut self, letter: char, classification: Classification);

    /// Show a message; an empty string clears the current one
    fn show_message(&mut self, text: &str);

    /// Clear every letter, classification and key status
    fn clear_board(&mut self);
}

/// Presenter that discards every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_letter(&mut self, _row: usize, _col: usize, _letter: Option<char>) {}

    fn render_classification(&mut self, _row: usize, _col: usize, _classification: Classification) {
    }

    fn render_keyboard_status(&mut self, _letter: char, _classification: Classification) {}

    fn show_message(&mut self, _text: &str) {}

    fn clear_board(&mut self) {}
}

/// A single recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Letter {
        row: usize,
        col: usize,
        letter: Option<char>,
    },
    Classification {
        row: usize,
        col: usize,
        classification: Classification,
    },
    KeyboardStatus {
        letter: char,
        classification: Classification,
    },
    Message(String),
    ClearBoard,
}

/// Presenter that records notifications in order
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    pub notifications: Vec<Notification>,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded notifications, leaving the log empty
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Most recent message shown, if any
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.notifications.iter().rev().find_map(|n| match n {
            Notification::Message(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn render_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
        self.notifications
            .push(Notification::Letter { row, col, letter });
    }

    fn render_classification(&mut self, row: usize, col: usize, classification: Classification) {
        self.notifications.push(Notification::Classification {
            row,
            col,
            classification,
        });
    }

    fn render_keyboard_status(&mut self, letter: char, classification: Classification) {
        self.notifications.push(Notification::KeyboardStatus {
            letter,
            classification,
        });
    }

    fn show_message(&mut self, text: &str) {
        self.notifications.push(Notification::Message(text.to_string()));
    }

    fn clear_board(&mut self) {
        self.notifications.push(Notification::ClearBoard);
    }
}
