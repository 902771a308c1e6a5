//! egui overlays

pub mod hud;

pub use hud::HudPlugin;
