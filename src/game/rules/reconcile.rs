//! Piece identity reconciliation
//!
//! The rules engine regenerates its whole board on every query, with no
//! identity attached. This module re-attaches the stable ids: given the
//! previous board, the fresh raw snapshot, and the applied move's effect
//! list, it produces a new board where every surviving piece wears the id
//! it had before the move.
//!
//! Identity transfer is keyed off the effect list rather than inferred
//! from positions. That keeps castling sound (two movers per move) and en
//! passant sound (the captured pawn's square differs from the mover's
//! destination), where position inference would reassign the wrong id.

use crate::game::error::{GameError, GameResult};
use crate::game::notation::Square;
use crate::game::resources::{AppliedMove, BoardPiece, BoardState, RawGrid};
use std::collections::{HashMap, HashSet};

/// Re-attach stable ids to a freshly regenerated board
///
/// Every occupied square of `raw` either is the destination of a move
/// effect (and inherits the id from the effect's origin) or was untouched
/// by the move (and inherits the id it already had). A missing source, or
/// any identity disappearing beyond the announced capture, means the
/// engine's board and ours have diverged and fails with
/// [`GameError::StaleIdentity`].
pub fn reconcile(
    previous: &BoardState,
    raw: &RawGrid,
    applied: &AppliedMove,
) -> GameResult<BoardState> {
    let moved_from: HashMap<Square, Square> = applied
        .effects
        .iter()
        .map(|effect| (effect.to, effect.from))
        .collect();

    let mut squares: [[Option<BoardPiece>; 8]; 8] = Default::default();
    let mut surviving = HashSet::new();
    for square in Square::all() {
        let Some(piece) = raw[square.row as usize][square.col as usize] else {
            continue;
        };
        let source = moved_from.get(&square).copied().unwrap_or(square);
        let inherited = previous
            .piece_at(source)
            .ok_or(GameError::StaleIdentity { square })?;
        surviving.insert(inherited.id);
        squares[square.row as usize][square.col as usize] = Some(BoardPiece {
            id: inherited.id,
            kind: piece.kind,
            color: piece.color,
        });
    }

    // exactly the announced capture may vanish, nothing else
    let removed = applied
        .captured
        .and_then(|square| previous.piece_at(square))
        .map(|piece| piece.id);
    for (square, piece) in previous.pieces() {
        if Some(piece.id) == removed {
            continue;
        }
        if !surviving.contains(&piece.id) {
            return Err(GameError::StaleIdentity { square });
        }
    }

    Ok(BoardState { squares })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::{PieceColor, PieceId, PieceKind};
    use crate::game::resources::{MoveEffect, RawPiece};

    fn sq(notation: &str) -> Square {
        Square::from_notation(notation).unwrap()
    }

    fn grid(pieces: &[(&str, PieceKind, PieceColor)]) -> RawGrid {
        let mut grid: RawGrid = Default::default();
        for &(notation, kind, color) in pieces {
            let square = sq(notation);
            grid[square.row as usize][square.col as usize] = Some(RawPiece { kind, color });
        }
        grid
    }

    fn id_at(board: &BoardState, notation: &str) -> PieceId {
        board.piece_at(sq(notation)).unwrap().id
    }

    const START: &[(&str, PieceKind, PieceColor)] = &[
        ("e1", PieceKind::King, PieceColor::White),
        ("h1", PieceKind::Rook, PieceColor::White),
        ("e5", PieceKind::Pawn, PieceColor::White),
        ("e8", PieceKind::King, PieceColor::Black),
        ("d5", PieceKind::Pawn, PieceColor::Black),
    ];

    fn previous() -> BoardState {
        BoardState::with_initial_ids(&grid(START))
    }

    #[test]
    fn test_plain_move_transfers_the_mover_id_only() {
        let previous = previous();
        let raw = grid(&[
            ("e2", PieceKind::King, PieceColor::White),
            ("h1", PieceKind::Rook, PieceColor::White),
            ("e5", PieceKind::Pawn, PieceColor::White),
            ("e8", PieceKind::King, PieceColor::Black),
            ("d5", PieceKind::Pawn, PieceColor::Black),
        ]);
        let applied = AppliedMove {
            effects: vec![MoveEffect {
                from: sq("e1"),
                to: sq("e2"),
            }],
            captured: None,
        };

        let next = reconcile(&previous, &raw, &applied).unwrap();
        assert_eq!(id_at(&next, "e2"), PieceId(sq("e1")));
        assert_eq!(id_at(&next, "h1"), PieceId(sq("h1")));
        assert_eq!(next.piece_at(sq("e1")), None);
        assert_eq!(next.piece_count(), previous.piece_count());
    }

    #[test]
    fn test_capture_removes_exactly_the_captured_id() {
        let previous = previous();
        // white e5 pawn takes the black pawn on d5
        let raw = grid(&[
            ("e1", PieceKind::King, PieceColor::White),
            ("h1", PieceKind::Rook, PieceColor::White),
            ("d5", PieceKind::Pawn, PieceColor::White),
            ("e8", PieceKind::King, PieceColor::Black),
        ]);
        let applied = AppliedMove {
            effects: vec![MoveEffect {
                from: sq("e5"),
                to: sq("d5"),
            }],
            captured: Some(sq("d5")),
        };

        let next = reconcile(&previous, &raw, &applied).unwrap();
        assert_eq!(id_at(&next, "d5"), PieceId(sq("e5")));
        assert_eq!(next.piece_count(), previous.piece_count() - 1);
    }

    #[test]
    fn test_castling_transfers_both_ids() {
        let previous = previous();
        let raw = grid(&[
            ("g1", PieceKind::King, PieceColor::White),
            ("f1", PieceKind::Rook, PieceColor::White),
            ("e5", PieceKind::Pawn, PieceColor::White),
            ("e8", PieceKind::King, PieceColor::Black),
            ("d5", PieceKind::Pawn, PieceColor::Black),
        ]);
        let applied = AppliedMove {
            effects: vec![
                MoveEffect {
                    from: sq("e1"),
                    to: sq("g1"),
                },
                MoveEffect {
                    from: sq("h1"),
                    to: sq("f1"),
                },
            ],
            captured: None,
        };

        let next = reconcile(&previous, &raw, &applied).unwrap();
        assert_eq!(id_at(&next, "g1"), PieceId(sq("e1")));
        assert_eq!(id_at(&next, "f1"), PieceId(sq("h1")));
    }

    #[test]
    fn test_en_passant_removes_the_bypassed_pawn() {
        let previous = previous();
        let raw = grid(&[
            ("e1", PieceKind::King, PieceColor::White),
            ("h1", PieceKind::Rook, PieceColor::White),
            ("d6", PieceKind::Pawn, PieceColor::White),
            ("e8", PieceKind::King, PieceColor::Black),
        ]);
        let applied = AppliedMove {
            effects: vec![MoveEffect {
                from: sq("e5"),
                to: sq("d6"),
            }],
            captured: Some(sq("d5")),
        };

        let next = reconcile(&previous, &raw, &applied).unwrap();
        assert_eq!(id_at(&next, "d6"), PieceId(sq("e5")));
        assert_eq!(next.piece_at(sq("d5")), None);
        assert_eq!(next.piece_count(), previous.piece_count() - 1);
    }

    #[test]
    fn test_piece_without_source_is_stale() {
        let previous = previous();
        // a knight materialized out of nowhere
        let raw = grid(&[
            ("e1", PieceKind::King, PieceColor::White),
            ("h1", PieceKind::Rook, PieceColor::White),
            ("e5", PieceKind::Pawn, PieceColor::White),
            ("e8", PieceKind::King, PieceColor::Black),
            ("d5", PieceKind::Pawn, PieceColor::Black),
            ("c3", PieceKind::Knight, PieceColor::White),
        ]);
        let applied = AppliedMove {
            effects: vec![],
            captured: None,
        };

        assert_eq!(
            reconcile(&previous, &raw, &applied),
            Err(GameError::StaleIdentity { square: sq("c3") })
        );
    }

    #[test]
    fn test_unannounced_disappearance_is_stale() {
        let previous = previous();
        // the rook vanished without a capture being reported
        let raw = grid(&[
            ("e1", PieceKind::King, PieceColor::White),
            ("e5", PieceKind::Pawn, PieceColor::White),
            ("e8", PieceKind::King, PieceColor::Black),
            ("d5", PieceKind::Pawn, PieceColor::Black),
        ]);
        let applied = AppliedMove {
            effects: vec![],
            captured: None,
        };

        assert_eq!(
            reconcile(&previous, &raw, &applied),
            Err(GameError::StaleIdentity { square: sq("h1") })
        );
    }
}
