//! Turn tracking

use crate::game::components::PieceColor;
use bevy::prelude::*;

/// Resource tracking whose turn it is
///
/// Flips on every completed move unless the match ends, in which case it
/// freezes with the final mover's color.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct CurrentTurn {
    pub color: PieceColor,
    /// Increments after both players have moved
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        CurrentTurn {
            color: PieceColor::White,
            move_number: 1,
        }
    }
}

impl CurrentTurn {
    pub fn flip(&mut self) {
        if self.color == PieceColor::Black {
            self.move_number += 1;
        }
        self.color = self.color.opposite();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_moves_first() {
        let turn = CurrentTurn::default();
        assert_eq!(turn.color, PieceColor::White);
        assert_eq!(turn.move_number, 1);
    }

    #[test]
    fn test_move_number_increments_after_black() {
        let mut turn = CurrentTurn::default();
        turn.flip();
        assert_eq!(turn.color, PieceColor::Black);
        assert_eq!(turn.move_number, 1);

        turn.flip();
        assert_eq!(turn.color, PieceColor::White);
        assert_eq!(turn.move_number, 2);
    }
}
