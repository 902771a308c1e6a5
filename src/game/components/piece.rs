//! Piece-related components

use crate::game::notation::Square;
use bevy::prelude::*;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    #[default]
    Pawn,
}

impl PieceKind {
    pub fn label(self) -> &'static str {
        match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        }
    }
}

/// Stable identity of one piece for the lifetime of a match
///
/// Assigned once at game start from the piece's initial square and carried
/// unchanged across every board regeneration until the piece is captured.
/// The square it wraps is the piece's origin, not its current position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub struct PieceId(pub Square);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The rendering collaborator's view of one piece
///
/// `row`/`col` are the logical position; the glide system moves the
/// transform toward it over successive frames.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: PieceColor,
    pub row: u8,
    pub col: u8,
}

impl Piece {
    pub fn square(&self) -> Square {
        Square::new(self.row, self.col)
    }

    /// World-space target for this piece's logical square
    pub fn target_translation(&self) -> Vec3 {
        square_translation(self.square())
    }
}

/// World-space position of a board square's center
pub fn square_translation(square: Square) -> Vec3 {
    Vec3::new(square.col as f32, 0.0, square.row as f32)
}

/// Marker for the currently selected piece entity
#[derive(Component, Clone, Copy, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct SelectedPiece {
    pub square: Square,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_opposite() {
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opposite(), PieceColor::White);
    }

    #[test]
    fn test_piece_id_displays_origin_square() {
        let id = PieceId(Square::new(6, 4));
        assert_eq!(id.to_string(), "e2");
    }

    #[test]
    fn test_target_translation_maps_grid_to_world() {
        let piece = Piece {
            row: 3,
            col: 5,
            ..default()
        };
        assert_eq!(piece.target_translation(), Vec3::new(5.0, 0.0, 3.0));
    }
}
