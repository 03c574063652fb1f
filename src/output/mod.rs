//! Terminal output formatting
//!
//! Colored line output for the line mode and the `score` command.

pub mod console;
pub mod display;
pub mod formatters;

pub use console::ConsolePresenter;
pub use display::{print_round_summary, print_score_result, print_statistics};
