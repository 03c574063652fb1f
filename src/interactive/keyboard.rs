//! On-screen keyboard layout
//!
//! The same layout drives drawing and mouse hit-testing, so a click maps to
//! exactly the key drawn under it.

use crate::game::InputEvent;
use ratatui::layout::Rect;

/// Height of a key in cells
pub const KEY_HEIGHT: u16 = 3;

/// Horizontal gap between keys
pub const KEY_GAP: u16 = 1;

/// Height of the whole keyboard
pub const KEYBOARD_HEIGHT: u16 = KEY_HEIGHT * 3;

const LETTER_KEY_WIDTH: u16 = 5;
const LARGE_KEY_WIDTH: u16 = 9;

/// A key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCap {
    Letter(char),
    Enter,
    Backspace,
}

impl KeyCap {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    #[must_use]
    pub const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => LETTER_KEY_WIDTH,
            Self::Enter | Self::Backspace => LARGE_KEY_WIDTH,
        }
    }

    /// The input event a press of this key produces
    #[must_use]
    pub const fn event(self) -> InputEvent {
        match self {
            Self::Letter(c) => InputEvent::Letter(c),
            Self::Enter => InputEvent::Confirm,
            Self::Backspace => InputEvent::Delete,
        }
    }
}

/// Keyboard rows, top to bottom
#[must_use]
pub fn rows() -> [Vec<KeyCap>; 3] {
    let letters = |row: &str| row.chars().map(KeyCap::Letter).collect::<Vec<_>>();

    let mut bottom = vec![KeyCap::Enter];
    bottom.extend(letters("ZXCVBNM"));
    bottom.push(KeyCap::Backspace);

    [letters("QWERTYUIOP"), letters("ASDFGHJKL"), bottom]
}

/// Position every key inside `area`, each row centered
///
/// Keys that do not fit horizontally or vertically are left out.
#[must_use]
pub fn layout_keys(area: Rect) -> Vec<(KeyCap, Rect)> {
    let mut placed = Vec::new();

    for (i, row) in rows().iter().enumerate() {
        let y = area.y + i as u16 * KEY_HEIGHT;
        if y + KEY_HEIGHT > area.bottom() {
            break;
        }

        let row_width: u16 =
            row.iter().map(|k| k.width()).sum::<u16>() + KEY_GAP * (row.len() as u16 - 1);
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        for &key in row {
            if x + key.width() > area.right() {
                break;
            }
            placed.push((key, Rect::new(x, y, key.width(), KEY_HEIGHT)));
            x += key.width() + KEY_GAP;
        }
    }

    placed
}

/// Find the key drawn at terminal cell (`column`, `row`)
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<KeyCap> {
    layout_keys(area)
        .into_iter()
        .find(|(_, rect)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(key, _)| key)
}
