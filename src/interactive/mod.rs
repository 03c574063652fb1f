//! Interactive TUI interface
//!
//! Full-screen game board with an on-screen keyboard. Physical keys and
//! mouse clicks on the keyboard both become [`crate::game::InputEvent`]s.

mod app;
mod board;
pub mod keyboard;
mod rendering;

pub use app::{App, input_event_for_key, run_tui};
pub use board::{BoardView, Tile};
pub use rendering::{ScreenAreas, screen_areas, ui, visible_window};
