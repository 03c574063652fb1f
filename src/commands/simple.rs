//! Simple line mode
//!
//! Text-based game without TUI. Each typed line is fed to the round
//! controller as letter events followed by a confirm.

use crate::game::{GameConfig, GameError, InputEvent, Outcome, Presenter, RoundController, Statistics};
use crate::output::formatters::colored_keyboard;
use crate::output::{ConsolePresenter, print_round_summary, print_statistics};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    /// Empty line, same as pressing Enter
    Confirm,
    Guess(String),
}

impl LineCommand {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" | ":exit" => Self::Quit,
            "" => Self::Confirm,
            word => Self::Guess(word.to_string()),
        }
    }
}

/// Feed one line of input to the controller
///
/// A guess replaces whatever is typed in the current attempt, then submits.
///
/// # Errors
///
/// Returns [`GameError::IncompleteAttempt`] if the guess is too short.
pub fn apply_line<P: Presenter>(
    controller: &mut RoundController<P>,
    command: &LineCommand,
) -> Result<Outcome, GameError> {
    match command {
        LineCommand::Quit => Ok(Outcome::Ignored),
        LineCommand::Confirm => controller.dispatch(InputEvent::Confirm),
        LineCommand::Guess(word) => {
            if !controller.session().is_terminal() {
                while controller.session().current_col() > 0 {
                    controller.dispatch(InputEvent::Delete)?;
                }
            }
            for ch in word.chars() {
                controller.dispatch(InputEvent::Letter(ch))?;
            }
            controller.dispatch(InputEvent::Confirm)
        }
    }
}

/// Run the simple line mode until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: GameConfig) -> Result<Statistics, String> {
    let word_length = config.word_length();
    let max_attempts = config.max_attempts();
    let mut controller = RoundController::new(config, ConsolePresenter::new(io::stdout(), word_length));
    let mut stats = Statistics::new(max_attempts);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Line Mode                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the {word_length}-letter word in {max_attempts} attempts.");
    println!(
        "  {} right spot   {} wrong spot   {} not in word",
        " G ".black().on_green(),
        " Y ".black().on_yellow(),
        " - ".white().on_bright_black()
    );
    println!("Commands: ':quit' to exit, empty line to play again after a round\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let session = controller.session();
        let prompt = if session.is_terminal() {
            "Press Enter to play again".to_string()
        } else {
            format!("Attempt {}/{max_attempts}", session.current_row() + 1)
        };
        print!("{prompt}: ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.map_err(|e| e.to_string())?;

        let command = LineCommand::parse(&line);
        if command == LineCommand::Quit {
            break;
        }

        match apply_line(&mut controller, &command) {
            Ok(Outcome::Scored { .. }) => {
                println!("\n{}\n", colored_keyboard(controller.session().keyboard()));
            }
            Ok(outcome) if outcome.ends_round() => {
                if let Some(result) = controller.session().result() {
                    stats.record(result);
                }
                print_round_summary(controller.session());
            }
            Ok(_) => {}
            Err(e) => debug!(error = %e, "line rejected"),
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}
