//! Logical board state with stable piece identity
//!
//! The rules engine hands out identity-free snapshots ([`RawGrid`]); this
//! module holds the identity-bearing board the rest of the game works
//! with. A [`BoardState`] is created once at game start and replaced
//! wholesale by the reconciler on every successful move — it is never
//! mutated in place, so downstream diffing (board sync, animation) always
//! compares two distinct values.

use crate::game::components::{PieceColor, PieceId, PieceKind};
use crate::game::notation::Square;
use bevy::prelude::*;

/// A piece as reported by the rules engine: type and color, no identity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawPiece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

/// Identity-free 8x8 snapshot, indexed `[row][col]` with row 0 = rank 8
pub type RawGrid = [[Option<RawPiece>; 8]; 8];

/// A piece on the logical board, carrying its stable id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardPiece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: PieceColor,
}

/// The identity-bearing board, replaced (never mutated) on every move
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub(crate) squares: [[Option<BoardPiece>; 8]; 8],
}

impl BoardState {
    /// Build the starting board, assigning each piece an id derived from
    /// its initial square
    pub fn with_initial_ids(raw: &RawGrid) -> Self {
        let mut squares: [[Option<BoardPiece>; 8]; 8] = Default::default();
        for square in Square::all() {
            if let Some(piece) = raw[square.row as usize][square.col as usize] {
                squares[square.row as usize][square.col as usize] = Some(BoardPiece {
                    id: PieceId(square),
                    kind: piece.kind,
                    color: piece.color,
                });
            }
        }
        BoardState { squares }
    }

    pub fn piece_at(&self, square: Square) -> Option<BoardPiece> {
        self.squares[square.row as usize][square.col as usize]
    }

    /// Iterate occupied squares, row 0 (rank 8) first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, BoardPiece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(kind: PieceKind, color: PieceColor) -> Option<RawPiece> {
        Some(RawPiece { kind, color })
    }

    #[test]
    fn test_initial_ids_derive_from_origin_square() {
        let mut grid: RawGrid = Default::default();
        grid[7][4] = raw(PieceKind::King, PieceColor::White);
        grid[0][4] = raw(PieceKind::King, PieceColor::Black);

        let board = BoardState::with_initial_ids(&grid);
        assert_eq!(board.piece_count(), 2);

        let white_king = board.piece_at(Square::new(7, 4)).unwrap();
        assert_eq!(white_king.id, PieceId(Square::new(7, 4)));
        assert_eq!(white_king.kind, PieceKind::King);
        assert_eq!(white_king.color, PieceColor::White);
    }

    #[test]
    fn test_empty_squares_stay_empty() {
        let grid: RawGrid = Default::default();
        let board = BoardState::with_initial_ids(&grid);
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board.piece_at(Square::new(3, 3)), None);
    }
}
