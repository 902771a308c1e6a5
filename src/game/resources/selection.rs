//! Selection resource for tracking the selected piece

use crate::game::notation::Square;
use bevy::prelude::*;

/// Resource storing the currently selected square and its legal destinations
///
/// At most one piece is selected at a time. `possible_moves` is recomputed
/// on every selection change and emptied whenever the selection clears.
#[derive(Resource, Debug, Default)]
pub struct Selection {
    pub selected: Option<Square>,
    pub possible_moves: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, square: Square, destinations: Vec<Square>) {
        self.selected = Some(square);
        self.possible_moves = destinations;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_destination(&self, square: Square) -> bool {
        self.possible_moves.contains(&square)
    }
}
