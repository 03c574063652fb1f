//! Source-agnostic input events
//!
//! Physical keys, on-screen keyboard clicks and typed lines all normalize to
//! [`InputEvent`] before reaching the round controller.

/// A discrete input action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A typed character; only ASCII letters are accepted by the controller
    Letter(char),
    /// Remove the last letter
    Delete,
    /// Submit the attempt, or start a new round once the game is over
    Confirm,
}

impl InputEvent {
    /// Normalize a DOM-style key name
    ///
    /// `"Enter"` confirms, `"Backspace"` deletes and a single ASCII letter
    /// becomes an uppercase [`InputEvent::Letter`]. Anything else is `None`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::InputEvent;
    ///
    /// assert_eq!(InputEvent::from_key_name("Enter"), Some(InputEvent::Confirm));
    /// assert_eq!(InputEvent::from_key_name("r"), Some(InputEvent::Letter('R')));
    /// assert_eq!(InputEvent::from_key_name("Shift"), None);
    /// ```
    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Confirm),
            "Backspace" => Some(Self::Delete),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Letter event for an ASCII alphabetic character, uppercased
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase()))
    }
}
