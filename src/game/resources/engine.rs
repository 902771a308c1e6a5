//! Rules engine adapter
//!
//! The single boundary to the chess rules authority (`shakmaty`). The
//! adapter owns the position exclusively; no other module imports engine
//! types. Everything crossing the boundary is translated into the core's
//! own records here: squares, sub-effect lists, terminal flags.
//!
//! The engine regenerates its board representation from scratch on every
//! query, so [`RulesEngine::board_snapshot`] carries no identity — the
//! reconciler in [`crate::game::rules`] re-attaches ids using the
//! [`AppliedMove`] effect list returned by [`RulesEngine::apply_move`].
//!
//! Threefold repetition is tracked here with a zobrist-keyed occurrence
//! table, since the position type alone carries no history.

use crate::game::components::{PieceColor, PieceKind};
use crate::game::error::{GameError, GameResult};
use crate::game::notation::Square;
use crate::game::resources::board::{RawGrid, RawPiece};
use bevy::prelude::*;
use shakmaty::zobrist::Zobrist64;
use shakmaty::{Chess, Color, EnPassantMode, File, Move, Position, Rank, Role};
use std::collections::HashMap;

/// One piece relocation within a move
///
/// Most moves produce a single effect; castling produces two (king and
/// rook). The reconciler keys identity transfer off these instead of
/// inferring movement from board positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEffect {
    pub from: Square,
    pub to: Square,
}

/// Outcome of an accepted move
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    /// Piece relocations, in no particular order
    pub effects: Vec<MoveEffect>,
    /// Square the captured piece stood on, if any
    ///
    /// Differs from the mover's destination for en passant.
    pub captured: Option<Square>,
}

/// Condition flags queried after every accepted move
///
/// Any flag besides `check` ends the match. `check` alone is only a
/// notification to the UI layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerminalStatus {
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub threefold_repetition: bool,
    pub insufficient_material: bool,
    pub fifty_moves: bool,
}

impl TerminalStatus {
    pub fn terminal(&self) -> bool {
        self.checkmate
            || self.stalemate
            || self.threefold_repetition
            || self.insufficient_material
            || self.fifty_moves
    }
}

/// Resource owning the rules engine position
///
/// Constructed explicitly and handed to the app at plugin build time so
/// tests can inject their own instance.
#[derive(Resource)]
pub struct RulesEngine {
    position: Chess,
    /// Occurrence count per position, for repetition detection
    seen: HashMap<Zobrist64, u32>,
}

impl Default for RulesEngine {
    fn default() -> Self {
        let position = Chess::default();
        let mut seen = HashMap::new();
        seen.insert(position_key(&position), 1);
        RulesEngine { position, seen }
    }
}

impl RulesEngine {
    /// Legal destination squares for the piece on `from`
    ///
    /// Empty when the square is empty or holds the idle color; the engine
    /// only generates moves for the side to move. Castling is reported as
    /// the king's target square, and promotion alternatives collapse to
    /// one destination.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let source = to_engine(from);
        let turn = self.position.turn();
        let mut destinations = Vec::new();
        for candidate in self.position.legal_moves() {
            if candidate.from() != Some(source) {
                continue;
            }
            let destination = from_engine(ui_destination(&candidate, turn));
            if !destinations.contains(&destination) {
                destinations.push(destination);
            }
        }
        destinations
    }

    /// Submit a move; on acceptance the position advances and the move's
    /// sub-effects are returned for reconciliation
    ///
    /// A from/to pair matching no legal move fails with
    /// [`GameError::IllegalMove`] and changes nothing. A promotion
    /// requested by from/to alone promotes to a queen.
    pub fn apply_move(&mut self, from: Square, to: Square) -> GameResult<AppliedMove> {
        let source = to_engine(from);
        let target = to_engine(to);
        let turn = self.position.turn();

        let legal = self.position.legal_moves();
        let matching: Vec<&Move> = legal
            .iter()
            .filter(|&m| m.from() == Some(source) && ui_destination(m, turn) == target)
            .collect();
        let chosen: Option<Move> = matching
            .iter()
            .find(|m| m.promotion() == Some(Role::Queen))
            .copied()
            .or_else(|| matching.first().copied())
            .cloned();
        let Some(chosen) = chosen else {
            return Err(GameError::IllegalMove { from, to });
        };

        let captured = if chosen.is_en_passant() {
            // the bypassed pawn sits on the mover's rank, not the destination
            Some(from_engine(shakmaty::Square::from_coords(
                target.file(),
                source.rank(),
            )))
        } else if chosen.is_capture() {
            Some(to)
        } else {
            None
        };

        let mut effects = Vec::with_capacity(2);
        match chosen.castling_side() {
            Some(side) => {
                effects.push(MoveEffect { from, to });
                effects.push(MoveEffect {
                    // the engine encodes castling as king-takes-rook, so
                    // the raw target is the rook's current square
                    from: from_engine(chosen.to()),
                    to: from_engine(side.rook_to(turn)),
                });
            }
            None => effects.push(MoveEffect { from, to }),
        }

        self.position = self
            .position
            .clone()
            .play(chosen)
            .map_err(|_| GameError::IllegalMove { from, to })?;
        *self.seen.entry(position_key(&self.position)).or_insert(0) += 1;

        Ok(AppliedMove { effects, captured })
    }

    /// Condition flags for the current position
    pub fn terminal_status(&self) -> TerminalStatus {
        let occurrences = self
            .seen
            .get(&position_key(&self.position))
            .copied()
            .unwrap_or(0);
        TerminalStatus {
            check: self.position.is_check(),
            checkmate: self.position.is_checkmate(),
            stalemate: self.position.is_stalemate(),
            threefold_repetition: occurrences >= 3,
            insufficient_material: self.position.is_insufficient_material(),
            fifty_moves: self.position.halfmoves() >= 100,
        }
    }

    /// Fresh identity-free snapshot of the engine's board
    pub fn board_snapshot(&self) -> RawGrid {
        let mut grid: RawGrid = Default::default();
        for square in Square::all() {
            if let Some(piece) = self.position.board().piece_at(to_engine(square)) {
                grid[square.row as usize][square.col as usize] = Some(RawPiece {
                    kind: kind_from_role(piece.role),
                    color: color_from_engine(piece.color),
                });
            }
        }
        grid
    }

    /// Color the engine expects to move next
    pub fn turn(&self) -> PieceColor {
        color_from_engine(self.position.turn())
    }
}

fn position_key(position: &Chess) -> Zobrist64 {
    position.zobrist_hash(EnPassantMode::Legal)
}

/// Destination square as the UI understands it
///
/// For castling that is the king's target file (g or c), not the rook
/// square the engine encodes.
fn ui_destination(candidate: &Move, turn: Color) -> shakmaty::Square {
    match candidate.castling_side() {
        Some(side) => side.king_to(turn),
        None => candidate.to(),
    }
}

fn to_engine(square: Square) -> shakmaty::Square {
    shakmaty::Square::from_coords(
        File::new(square.col as u32),
        Rank::new(7 - square.row as u32),
    )
}

fn from_engine(square: shakmaty::Square) -> Square {
    Square::new(
        7 - u32::from(square.rank()) as u8,
        u32::from(square.file()) as u8,
    )
}

fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::King => PieceKind::King,
        Role::Queen => PieceKind::Queen,
        Role::Rook => PieceKind::Rook,
        Role::Bishop => PieceKind::Bishop,
        Role::Knight => PieceKind::Knight,
        Role::Pawn => PieceKind::Pawn,
    }
}

fn color_from_engine(color: Color) -> PieceColor {
    match color {
        Color::White => PieceColor::White,
        Color::Black => PieceColor::Black,
    }
}
