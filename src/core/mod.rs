//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and independent of any front-end.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Classification, Feedback};
pub use keyboard::KeyboardStatus;
pub use word::{Word, WordError};
