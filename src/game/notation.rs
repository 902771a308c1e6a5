//! Board coordinates and algebraic notation
//!
//! The board is stored top-to-bottom from Black's back rank: row 0 is
//! notated rank 8, row 7 is rank 1. Columns map to files left to right
//! (column 0 is file 'a'). `to_notation`/`from_notation` form a strict
//! bijection over the 64 valid squares.

use crate::game::error::{GameError, GameResult};
use bevy::reflect::Reflect;
use std::fmt;

const FILE_LETTERS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// One of the 64 board positions, addressed by array coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square from row/column indices (both 0-7)
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8, "square ({row}, {col}) off the board");
        Square { row, col }
    }

    /// Algebraic notation for this square, e.g. (6, 4) -> "e2"
    pub fn to_notation(self) -> String {
        format!("{}{}", FILE_LETTERS[self.col as usize], 8 - self.row)
    }

    /// Parse algebraic notation, e.g. "e2" -> (6, 4)
    pub fn from_notation(notation: &str) -> GameResult<Self> {
        let invalid = || GameError::InvalidNotation {
            notation: notation.to_owned(),
        };

        let mut chars = notation.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = FILE_LETTERS
            .iter()
            .position(|&letter| letter == file)
            .ok_or_else(invalid)?;
        let rank = rank
            .to_digit(10)
            .filter(|digit| (1..=8).contains(digit))
            .ok_or_else(invalid)?;

        Ok(Square::new((8 - rank) as u8, col as u8))
    }

    /// Iterate every square, row 0 (rank 8) first
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_corners() {
        assert_eq!(Square::new(0, 0).to_notation(), "a8");
        assert_eq!(Square::new(7, 0).to_notation(), "a1");
        assert_eq!(Square::new(0, 7).to_notation(), "h8");
        assert_eq!(Square::new(7, 7).to_notation(), "h1");
        assert_eq!(Square::new(6, 4).to_notation(), "e2");
    }

    #[test]
    fn test_round_trip_all_squares() {
        for square in Square::all() {
            let notation = square.to_notation();
            assert_eq!(Square::from_notation(&notation), Ok(square));
        }
    }

    #[test]
    fn test_round_trip_all_notations() {
        for file in 'a'..='h' {
            for rank in 1..=8 {
                let notation = format!("{file}{rank}");
                let square = Square::from_notation(&notation).unwrap();
                assert_eq!(square.to_notation(), notation);
            }
        }
    }

    #[test]
    fn test_rejects_malformed_notation() {
        for bad in ["", "e", "e22", "i4", "a0", "a9", "4e", "  "] {
            assert!(
                matches!(
                    Square::from_notation(bad),
                    Err(GameError::InvalidNotation { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }
}
