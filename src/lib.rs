//! Wordle Game
//!
//! A single-round Wordle game: guess the secret word in a bounded number of
//! attempts, with per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{GameConfig, InputEvent, NullPresenter, Outcome, RoundController};
//!
//! let mut round = RoundController::new(GameConfig::default(), NullPresenter);
//!
//! for letter in "REACT".chars() {
//!     round.dispatch(InputEvent::Letter(letter)).unwrap();
//! }
//! let outcome = round.dispatch(InputEvent::Confirm).unwrap();
//!
//! assert!(matches!(outcome, Outcome::Won { .. }));
//! assert!(round.session().is_terminal());
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic tracing
pub mod logging;
