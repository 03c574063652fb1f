//! Round controller
//!
//! Owns the [`Session`] and applies input to it. Every visible change is
//! reported to the [`Presenter`]; every call returns an [`Outcome`].

use super::{GameConfig, GameError, InputEvent, Presenter, RoundResult, Session};
use crate::core::Feedback;
use tracing::{debug, info, trace};

/// Message shown when submitting a partially filled attempt
pub const MSG_NOT_ENOUGH_LETTERS: &str = "Not enough letters";

/// Message shown after a winning submit
pub const MSG_WON: &str = "You won! Press Enter to play again.";

/// Message shown after the final losing submit
#[must_use]
pub fn loss_message(secret: &str) -> String {
    format!("Game over! The word was: {secret}")
}

/// What an operation did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    LetterPlaced {
        row: usize,
        col: usize,
        letter: char,
    },
    LetterCleared {
        row: usize,
        col: usize,
    },
    /// Attempt scored without ending the round
    Scored {
        row: usize,
        feedback: Feedback,
    },
    Won {
        row: usize,
        feedback: Feedback,
    },
    Lost {
        feedback: Feedback,
        secret: String,
    },
    Reset,
}

impl Outcome {
    /// True for the transitions into the terminal state
    #[must_use]
    pub const fn ends_round(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// Drives one round of play against a fixed secret
pub struct RoundController<P: Presenter> {
    config: GameConfig,
    session: Session,
    presenter: P,
}

impl<P: Presenter> RoundController<P> {
    #[must_use]
    pub fn new(config: GameConfig, presenter: P) -> Self {
        let session = Session::new(config.word_length(), config.max_attempts());
        Self {
            config,
            session,
            presenter,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consume the controller and return its presenter
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Apply an input event according to the round state
    ///
    /// Once the round is over only [`InputEvent::Confirm`] does anything: it
    /// starts a new round. Otherwise Confirm submits, Delete removes a
    /// letter and ASCII letters are appended uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IncompleteAttempt`] when Confirm submits an
    /// attempt that is not full.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Outcome, GameError> {
        if self.session.is_terminal() {
            return Ok(match event {
                InputEvent::Confirm => self.reset(),
                _ => {
                    trace!(?event, "input ignored after round end");
                    Outcome::Ignored
                }
            });
        }

        match event {
            InputEvent::Confirm => self.submit(),
            InputEvent::Delete => Ok(self.remove_letter()),
            InputEvent::Letter(c) if c.is_ascii_alphabetic() => {
                Ok(self.append_letter(c.to_ascii_uppercase()))
            }
            InputEvent::Letter(c) => {
                trace!(letter = ?c, "non-letter input ignored");
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Write a letter into the next free slot of the current attempt
    pub fn append_letter(&mut self, letter: char) -> Outcome {
        if !letter.is_ascii_alphabetic() {
            return Outcome::Ignored;
        }
        let letter = letter.to_ascii_uppercase();

        match self.session.push_letter(letter as u8) {
            Some((row, col)) => {
                trace!(row, col, %letter, "letter placed");
                self.presenter.render_letter(row, col, Some(letter));
                Outcome::LetterPlaced { row, col, letter }
            }
            None => Outcome::Ignored,
        }
    }

    /// Clear the last filled slot of the current attempt
    pub fn remove_letter(&mut self) -> Outcome {
        match self.session.pop_letter() {
            Some((row, col)) => {
                trace!(row, col, "letter cleared");
                self.presenter.render_letter(row, col, None);
                self.presenter.show_message("");
                Outcome::LetterCleared { row, col }
            }
            None => Outcome::Ignored,
        }
    }

    /// Score the current attempt
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IncompleteAttempt`] if the attempt is not full.
    /// The session is left unchanged.
    pub fn submit(&mut self) -> Result<Outcome, GameError> {
        if self.session.is_terminal() {
            return Ok(Outcome::Ignored);
        }

        let attempt = self.session.current_attempt();
        let Some(guess) = attempt.is_full().then(|| attempt.word()).flatten() else {
            let filled = self.session.current_col();
            let required = self.session.word_length();
            self.presenter.show_message(MSG_NOT_ENOUGH_LETTERS);
            return Err(GameError::IncompleteAttempt { filled, required });
        };

        let row = self.session.current_row();
        let feedback = Feedback::classify(&guess, self.config.secret());
        debug!(guess = %guess, feedback = %feedback.to_emoji(), row, "scored guess");

        for (col, &classification) in feedback.classifications().iter().enumerate() {
            self.presenter.render_classification(row, col, classification);
        }

        for (&letter, &classification) in guess.letters().iter().zip(feedback.classifications()) {
            if self.session.keyboard_mut().record(letter, classification) {
                self.presenter
                    .render_keyboard_status(char::from(letter), classification);
            }
        }

        self.session.set_feedback(feedback.clone());

        if feedback.is_solved() {
            let attempts = row + 1;
            self.session.finish(RoundResult::Won { attempts });
            info!(attempts, "round won");
            self.presenter.show_message(MSG_WON);
            return Ok(Outcome::Won { row, feedback });
        }

        if !self.session.advance() {
            let secret = self.config.secret().text().to_string();
            self.session.finish(RoundResult::Lost);
            info!(%secret, "round lost");
            self.presenter.show_message(&loss_message(&secret));
            return Ok(Outcome::Lost { feedback, secret });
        }

        Ok(Outcome::Scored { row, feedback })
    }

    /// Start over with an empty board
    pub fn reset(&mut self) -> Outcome {
        self.session.reset();
        info!("round reset");
        self.presenter.clear_board();
        self.presenter.show_message("");
        Outcome::Reset
    }
}
