//! Game plugin - logical state and the systems that maintain it
//!
//! The rules engine and the initial board are constructed here and handed
//! to the app as owned resources, so a test (or a variant setup) can build
//! the same plugin around its own instances instead of reaching for a
//! global.

use super::components::{GlideState, Piece, SelectedPiece};
use super::resources::{BoardState, CurrentTurn, MatchStatus, MoveLog, RulesEngine, Selection};
use super::system_sets::GameSystems;
use super::systems::{animate_piece_movement, sync_pieces_to_board};
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let engine = RulesEngine::default();
        let board = BoardState::with_initial_ids(&engine.board_snapshot());

        app.insert_resource(engine)
            .insert_resource(board)
            .init_resource::<Selection>()
            .init_resource::<CurrentTurn>()
            .init_resource::<MatchStatus>()
            .init_resource::<MoveLog>();

        app.register_type::<Piece>()
            .register_type::<SelectedPiece>()
            .register_type::<GlideState>()
            .register_type::<CurrentTurn>()
            .register_type::<MatchStatus>();

        app.configure_sets(Update, (GameSystems::Sync, GameSystems::Visual).chain());
        app.add_systems(
            Update,
            (
                sync_pieces_to_board.in_set(GameSystems::Sync),
                animate_piece_movement.in_set(GameSystems::Visual),
            ),
        );
    }
}
