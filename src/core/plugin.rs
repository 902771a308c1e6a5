//! Core plugin - settings lifecycle

use super::settings::{load_settings_system, save_settings_system};
use bevy::prelude::*;

/// Registers settings loading and persistence
///
/// Add before any plugin whose systems read [`super::GameSettings`].
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_settings_system);
        app.add_systems(Update, save_settings_system);
    }
}
