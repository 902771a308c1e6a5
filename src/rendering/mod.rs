//! Scene construction: board squares and piece meshes

pub mod board;
pub mod pieces;

pub use board::{BoardPlugin, BoardSquare};
pub use pieces::PiecePlugin;
