//! Game resources - global state shared across systems
//!
//! - [`RulesEngine`] - adapter owning the external rules authority
//! - [`BoardState`] - identity-bearing board, replaced on every move
//! - [`Selection`] - selected square and its legal destinations
//! - [`CurrentTurn`] - whose turn it is
//! - [`MatchStatus`] - in progress, or how the match ended
//! - [`MoveLog`] - in-memory record of completed moves

pub mod board;
pub mod engine;
pub mod match_status;
pub mod move_log;
pub mod selection;
pub mod turn;

// Re-export all resources for convenience
pub use board::*;
pub use engine::*;
pub use match_status::*;
pub use move_log::*;
pub use selection::*;
pub use turn::*;
