//! Click handling and the selection/turn state machine
//!
//! Piece and board-square entities both carry click observers; the two
//! funnel into [`handle_square_click`], which owns every transition of
//! the selection, turn, and match-over state. The handler works on plain
//! resource structs so tests can drive it without a running app, and each
//! invocation runs to completion before the next input is processed.

use crate::game::components::{Piece, SelectedPiece};
use crate::game::error::{GameError, GameResult};
use crate::game::notation::Square;
use crate::game::resources::{
    BoardState, CurrentTurn, MatchStatus, MoveLog, MoveRecord, RulesEngine, Selection,
};
use crate::game::rules::reconcile;
use crate::rendering::board::BoardSquare;
use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

/// What a click did to the game state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed (match over, enemy piece, empty square while idle)
    Ignored,
    /// A friendly piece was selected, destinations recomputed
    Selected,
    /// An active selection was dropped
    Deselected,
    /// A move completed; board replaced, selection cleared
    Moved {
        from: Square,
        to: Square,
        capture: bool,
        check: bool,
    },
    /// The engine rejected a destination the UI still offered
    Rejected { from: Square, to: Square },
}

/// Apply one click to the game state
///
/// Transition rules, for a click on square `s`:
/// 1. match over - every click is ignored (the state is absorbing)
/// 2. `s` is a legal destination of the selection - apply the move; on
///    acceptance reconcile identities, replace the board, clear the
///    selection, then either end the match or flip the turn. On rejection
///    drop the selection and leave board and turn untouched.
/// 3. `s` holds a piece of the turn color - (re)select it, even when it
///    has no legal moves
/// 4. `s` holds an enemy piece that is no destination - ignored
/// 5. `s` is empty and no destination while something is selected - back
///    to idle
///
/// The only fallible path is reconciliation: a [`GameError::StaleIdentity`]
/// means the board desynced from the engine and is passed up to the caller.
pub fn handle_square_click(
    clicked: Square,
    engine: &mut RulesEngine,
    board: &mut BoardState,
    selection: &mut Selection,
    turn: &mut CurrentTurn,
    status: &mut MatchStatus,
    log: &mut MoveLog,
) -> GameResult<ClickOutcome> {
    if status.is_over() {
        return Ok(ClickOutcome::Ignored);
    }

    if let Some(from) = selection.selected {
        if selection.is_destination(clicked) {
            return complete_move(from, clicked, engine, board, selection, turn, status, log);
        }
    }

    match board.piece_at(clicked) {
        Some(piece) if piece.color == turn.color => {
            let destinations = engine.legal_destinations(clicked);
            selection.select(clicked, destinations);
            Ok(ClickOutcome::Selected)
        }
        Some(_) => Ok(ClickOutcome::Ignored),
        None => {
            if selection.is_selected() {
                selection.clear();
                Ok(ClickOutcome::Deselected)
            } else {
                Ok(ClickOutcome::Ignored)
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn complete_move(
    from: Square,
    to: Square,
    engine: &mut RulesEngine,
    board: &mut BoardState,
    selection: &mut Selection,
    turn: &mut CurrentTurn,
    status: &mut MatchStatus,
    log: &mut MoveLog,
) -> GameResult<ClickOutcome> {
    let applied = match engine.apply_move(from, to) {
        Ok(applied) => applied,
        Err(GameError::IllegalMove { from, to }) => {
            // the destination set was stale; drop it and resynchronize
            // from the engine on the next selection
            selection.clear();
            return Ok(ClickOutcome::Rejected { from, to });
        }
        Err(other) => return Err(other),
    };

    let mover = board.piece_at(from);
    let raw = engine.board_snapshot();
    *board = reconcile(board, &raw, &applied)?;
    selection.clear();

    let capture = applied.captured.is_some();
    let verdict = engine.terminal_status();
    if let Some(mover) = mover {
        log.record(MoveRecord {
            color: mover.color,
            kind: mover.kind,
            from,
            to,
            capture,
            check: verdict.check,
        });
    }

    if verdict.terminal() {
        *status = MatchStatus::from_terminal(&verdict, turn.color);
    } else {
        turn.flip();
    }

    Ok(ClickOutcome::Moved {
        from,
        to,
        capture,
        check: verdict.check,
    })
}

// === Observers ===

fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Handle click on a piece
pub fn on_piece_click(
    click: On<Pointer<Click>>,
    mut commands: Commands,
    pieces: Query<(Entity, &Piece)>,
    markers: Query<Entity, With<SelectedPiece>>,
    mut engine: ResMut<RulesEngine>,
    mut board: ResMut<BoardState>,
    mut selection: ResMut<Selection>,
    mut turn: ResMut<CurrentTurn>,
    mut status: ResMut<MatchStatus>,
    mut log: ResMut<MoveLog>,
) {
    if !is_primary(click.event.button) {
        return;
    }
    let Ok((_, piece)) = pieces.get(click.entity) else {
        return;
    };
    dispatch_click(
        piece.square(),
        &mut commands,
        &pieces,
        &markers,
        &mut engine,
        &mut board,
        &mut selection,
        &mut turn,
        &mut status,
        &mut log,
    );
}

/// Handle click on a board square
pub fn on_square_click(
    click: On<Pointer<Click>>,
    mut commands: Commands,
    squares: Query<&BoardSquare>,
    pieces: Query<(Entity, &Piece)>,
    markers: Query<Entity, With<SelectedPiece>>,
    mut engine: ResMut<RulesEngine>,
    mut board: ResMut<BoardState>,
    mut selection: ResMut<Selection>,
    mut turn: ResMut<CurrentTurn>,
    mut status: ResMut<MatchStatus>,
    mut log: ResMut<MoveLog>,
) {
    if !is_primary(click.event.button) {
        return;
    }
    let Ok(square) = squares.get(click.entity) else {
        return;
    };
    dispatch_click(
        square.square(),
        &mut commands,
        &pieces,
        &markers,
        &mut engine,
        &mut board,
        &mut selection,
        &mut turn,
        &mut status,
        &mut log,
    );
}

/// Run the state machine for one click and mirror the result onto the ECS
#[allow(clippy::too_many_arguments)]
fn dispatch_click(
    clicked: Square,
    commands: &mut Commands,
    pieces: &Query<(Entity, &Piece)>,
    markers: &Query<Entity, With<SelectedPiece>>,
    engine: &mut RulesEngine,
    board: &mut BoardState,
    selection: &mut Selection,
    turn: &mut CurrentTurn,
    status: &mut MatchStatus,
    log: &mut MoveLog,
) {
    let outcome = match handle_square_click(clicked, engine, board, selection, turn, status, log) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("[INPUT] click on {clicked} hit a consistency fault: {err}");
            return;
        }
    };

    for entity in markers.iter() {
        commands.entity(entity).remove::<SelectedPiece>();
    }

    match outcome {
        ClickOutcome::Selected => {
            if let Some(square) = selection.selected {
                if let Some((entity, _)) = pieces.iter().find(|(_, piece)| piece.square() == square)
                {
                    commands.entity(entity).insert(SelectedPiece { square });
                }
                debug!(
                    "[INPUT] selected {square} with {} destinations",
                    selection.possible_moves.len()
                );
            }
        }
        ClickOutcome::Moved {
            from,
            to,
            capture,
            check,
        } => {
            info!(
                "[GAME] {from}->{to}{}",
                if capture { " (capture)" } else { "" }
            );
            if check {
                // notification hook; an audio cue would go here
                debug!("[GAME] check");
            }
            if status.is_over() {
                info!("[GAME] {}", status.message());
            }
        }
        ClickOutcome::Rejected { from, to } => {
            warn!("[INPUT] engine rejected {from}->{to}; selection dropped");
        }
        ClickOutcome::Deselected => debug!("[INPUT] selection cleared"),
        ClickOutcome::Ignored => {}
    }
}
