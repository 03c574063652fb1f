//! Round state machine
//!
//! [`RoundController`] owns the [`Session`], accepts [`InputEvent`]s and
//! reports visible changes to a [`Presenter`].

mod config;
mod controller;
mod error;
mod event;
mod presenter;
mod session;
mod stats;

pub use config::{DEFAULT_SECRET, GameConfig, MAX_ATTEMPTS, WORD_LENGTH};
pub use controller::{MSG_NOT_ENOUGH_LETTERS, MSG_WON, Outcome, RoundController, loss_message};
pub use error::{ConfigError, GameError};
pub use event::InputEvent;
pub use presenter::{Notification, NullPresenter, Presenter, RecordingPresenter};
pub use session::{Attempt, RoundResult, RoundState, Session};
pub use stats::Statistics;
