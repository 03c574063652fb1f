//! Line-oriented presenter for plain terminals

use super::formatters::colored_tile;
use crate::core::Classification;
use crate::game::Presenter;
use colored::Colorize;
use std::io::Write;
use tracing::warn;

/// Prints each scored row and every message as plain lines
///
/// Letters are buffered per row and printed once the last cell of the row
/// has been classified.
pub struct ConsolePresenter<W: Write> {
    out: W,
    row: Vec<(Option<char>, Option<Classification>)>,
}

impl<W: Write> ConsolePresenter<W> {
    #[must_use]
    pub fn new(out: W, word_length: usize) -> Self {
        Self {
            out,
            row: vec![(None, None); word_length],
        }
    }

    /// Consume the presenter and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!(error = %e, "failed to write console output");
        }
    }

    fn flush_row(&mut self) {
        let line = self
            .row
            .iter()
            .map(|&(letter, class)| colored_tile(letter.unwrap_or(' '), class).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.emit(&format!("  {line}"));
        self.row.fill((None, None));
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn render_letter(&mut self, _row: usize, col: usize, letter: Option<char>) {
        if let Some(cell) = self.row.get_mut(col) {
            cell.0 = letter;
        }
    }

    fn render_classification(&mut self, _row: usize, col: usize, classification: Classification) {
        if let Some(cell) = self.row.get_mut(col) {
            cell.1 = Some(classification);
        }
        if col + 1 == self.row.len() {
            self.flush_row();
        }
    }

    fn render_keyboard_status(&mut self, _letter: char, _classification: Classification) {
        // The keyboard is printed as a whole after each scored row
    }

    fn show_message(&mut self, text: &str) {
        if !text.is_empty() {
            self.emit(&format!("{}", text.bright_yellow().bold()));
        }
    }

    fn clear_board(&mut self) {
        self.row.fill((None, None));
        self.emit(&format!("\n{}\n", "🔄 New game started!".bright_cyan()));
    }
}
