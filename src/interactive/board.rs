//! Board view state for the TUI
//!
//! Mirrors what the round controller has asked to be shown. The renderer
//! reads only from here.

use crate::core::Classification;
use crate::game::Presenter;
use rustc_hash::FxHashMap;

/// One grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub classification: Option<Classification>,
}

/// Grid, key colors and message as last rendered
#[derive(Debug, Clone)]
pub struct BoardView {
    tiles: Vec<Vec<Tile>>,
    keys: FxHashMap<char, Classification>,
    message: String,
}

impl BoardView {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            tiles: vec![vec![Tile::default(); cols]; rows],
            keys: FxHashMap::default(),
            message: String::new(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.tiles
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn key_status(&self, letter: char) -> Option<Classification> {
        self.keys.get(&letter).copied()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn tile_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(row).and_then(|r| r.get_mut(col))
    }
}

impl Presenter for BoardView {
    fn render_letter(&mut self, row: usize, col: usize, letter: Option<char>) {
        if let Some(tile) = self.tile_mut(row, col) {
            tile.letter = letter;
        }
    }

    fn render_classification(&mut self, row: usize, col: usize, classification: Classification) {
        if let Some(tile) = self.tile_mut(row, col) {
            tile.classification = Some(classification);
        }
    }

    fn render_keyboard_status(&mut self, letter: char, classification: Classification) {
        self.keys.insert(letter, classification);
    }

    fn show_message(&mut self, text: &str) {
        text.clone_into(&mut self.message);
    }

    fn clear_board(&mut self) {
        for row in &mut self.tiles {
            row.fill(Tile::default());
        }
        self.keys.clear();
        self.message.clear();
    }
}
