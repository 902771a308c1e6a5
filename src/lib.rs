pub mod core;
pub mod game;
pub mod rendering;
pub mod ui;

pub use game::GamePlugin;
