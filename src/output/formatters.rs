//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback, KeyboardStatus, Word};
use crate::game::{RoundResult, Session};
use colored::{ColoredString, Colorize};

/// Keyboard rows in on-screen order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format one letter as a colored tile like " R "
#[must_use]
pub fn colored_tile(letter: char, classification: Option<Classification>) -> ColoredString {
    let text = format!(" {letter} ");
    match classification {
        Some(Classification::Exact) => text.black().on_green().bold(),
        Some(Classification::Present) => text.black().on_yellow().bold(),
        Some(Classification::Absent) => text.white().on_bright_black().bold(),
        None => text.bold(),
    }
}

/// Format a scored guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.classifications())
        .map(|(&letter, &c)| colored_tile(char::from(letter), Some(c)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the keyboard with each guessed letter colored by its status
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardStatus) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|key| match keyboard.get(key) {
                    Some(Classification::Exact) => key.to_string().green().bold().to_string(),
                    Some(Classification::Present) => key.to_string().yellow().bold().to_string(),
                    Some(Classification::Absent) => key.to_string().bright_black().to_string(),
                    None => key.to_string(),
                })
                .collect();
            format!("{}{}", " ".repeat(i), keys.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the shareable emoji summary of a finished or ongoing round
///
/// The header shows attempts used, or `X` for a lost round.
///
/// ```text
/// Wordle 3/6
///
/// ⬜🟨⬜⬜🟨
/// 🟨🟨🟩🟩🟨
/// 🟩🟩🟩🟩🟩
/// ```
#[must_use]
pub fn share_grid(session: &Session) -> String {
    let score = match session.result() {
        Some(RoundResult::Won { attempts }) => attempts.to_string(),
        Some(RoundResult::Lost) => "X".to_string(),
        None => session.submitted().count().to_string(),
    };

    let rows: Vec<String> = session
        .submitted()
        .filter_map(|attempt| attempt.feedback().map(Feedback::to_emoji))
        .collect();

    format!(
        "Wordle {score}/{}\n\n{}",
        session.max_attempts(),
        rows.join("\n")
    )
}

/// Create a progress bar string
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, InputEvent, NullPresenter, RoundController};

    fn play(words: &[&str]) -> RoundController<NullPresenter> {
        let mut c = RoundController::new(GameConfig::default(), NullPresenter);
        for word in words {
            for ch in word.chars() {
                c.dispatch(InputEvent::Letter(ch)).unwrap();
            }
            c.dispatch(InputEvent::Confirm).unwrap();
        }
        c
    }

    #[test]
    fn share_grid_for_win() {
        let c = play(&["build", "trace", "react"]);
        assert_eq!(
            share_grid(c.session()),
            "Wordle 3/6\n\n⬜⬜⬜⬜⬜\n🟨🟨🟩🟩🟨\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_grid_for_loss() {
        let c = play(&["build"; 6]);
        let grid = share_grid(c.session());
        assert!(grid.starts_with("Wordle X/6\n\n"));
        assert_eq!(grid.lines().count(), 8);
    }

    #[test]
    fn share_grid_in_progress() {
        let c = play(&["trace"]);
        assert_eq!(share_grid(c.session()), "Wordle 1/6\n\n🟨🟨🟩🟩🟨");
    }

    #[test]
    fn colored_row_keeps_letters() {
        colored::control::set_override(false);
        let guess = Word::new("trace").unwrap();
        let feedback = "YYGGY".parse().unwrap();
        assert_eq!(colored_row(&guess, &feedback), " T   R   A   C   E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
