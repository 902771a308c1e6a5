//! Game systems
//!
//! Click observers mutate logical state; the sync and glide systems carry
//! it to the entities each frame.

pub mod board_sync;
pub mod input;
pub mod movement;

pub use board_sync::sync_pieces_to_board;
pub use input::{handle_square_click, on_piece_click, on_square_click, ClickOutcome};
pub use movement::animate_piece_movement;
