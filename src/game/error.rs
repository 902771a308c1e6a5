//! Error types for game logic
//!
//! Covers the three failure classes of the orchestration core: malformed
//! square notation at the translation boundary, moves the rules engine
//! rejects, and identity desyncs detected during board reconciliation.

use crate::game::notation::Square;

/// Errors that can occur while orchestrating board state
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// Square string outside a1..h8
    ///
    /// Internal callers always produce valid notation, so hitting this
    /// indicates a programming error rather than bad user input.
    #[error("invalid square notation: {notation:?}")]
    InvalidNotation { notation: String },

    /// The rules engine rejected a move the UI offered
    ///
    /// Recoverable: the selection is dropped and the board stays untouched.
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// Reconciliation found a piece with no identity source
    ///
    /// The engine's board and ours have diverged. Not recoverable within
    /// the core; surfaced to the caller as a consistency fault.
    #[error("no identity source for piece at {square}: board desynced from the rules engine")]
    StaleIdentity { square: Square },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
