//! Board-to-entity synchronization
//!
//! After a move replaces [`BoardState`], this system diffs the piece
//! entities against it by id: surviving pieces get their logical position
//! updated (the glide system animates the transform), vanished ids are
//! despawned, and a kind change on a surviving id (promotion) updates the
//! component so the mesh swap can pick it up. Read-only with respect to
//! the logical board.

use crate::game::components::{Piece, PieceId, PieceKind};
use crate::game::notation::Square;
use crate::game::resources::BoardState;
use bevy::prelude::*;
use std::collections::HashMap;

pub fn sync_pieces_to_board(
    mut commands: Commands,
    board: Res<BoardState>,
    mut pieces: Query<(Entity, &mut Piece)>,
) {
    if !board.is_changed() {
        return;
    }

    let positions: HashMap<PieceId, (Square, PieceKind)> = board
        .pieces()
        .map(|(square, piece)| (piece.id, (square, piece.kind)))
        .collect();

    for (entity, mut piece) in pieces.iter_mut() {
        match positions.get(&piece.id) {
            Some(&(square, kind)) => {
                if piece.square() != square {
                    debug!("[SYNC] piece {} -> {square}", piece.id);
                    piece.row = square.row;
                    piece.col = square.col;
                }
                if piece.kind != kind {
                    debug!("[SYNC] piece {} promoted to {}", piece.id, kind.label());
                    piece.kind = kind;
                }
            }
            None => {
                debug!("[SYNC] piece {} captured", piece.id);
                commands.entity(entity).despawn();
            }
        }
    }
}
