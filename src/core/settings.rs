//! User settings and their persistence
//!
//! Settings live in `settings.json` under the user's configuration
//! directory and are loaded before startup. Load failures fall back to
//! defaults with a warning; save failures are logged and never interrupt
//! play.

use crate::core::error::CoreResult;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILENAME: &str = "settings.json";

/// User-facing options
#[derive(Resource, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Highlight the selected piece's destinations
    pub show_hints: bool,
    /// Show the status panel
    pub show_hud: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            show_hints: true,
            show_hud: true,
        }
    }
}

/// Resolve the settings file path, falling back to the working directory
fn settings_path() -> PathBuf {
    match ProjectDirs::from("io", "glidechess", "GlideChess") {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

/// Load settings before anything reads them
pub fn load_settings_system(mut commands: Commands) {
    let path = settings_path();
    if !path.exists() {
        info!("[SETTINGS] no settings file at {path:?}, using defaults");
        commands.insert_resource(GameSettings::default());
        return;
    }

    match read_settings(&path) {
        Ok(settings) => {
            info!("[SETTINGS] loaded {path:?}");
            commands.insert_resource(settings);
        }
        Err(err) => {
            warn!("[SETTINGS] failed to load {path:?}: {err}; using defaults");
            commands.insert_resource(GameSettings::default());
        }
    }
}

/// Persist settings whenever they change
pub fn save_settings_system(settings: Res<GameSettings>) {
    if !settings.is_changed() {
        return;
    }

    let path = settings_path();
    match write_settings(&path, &settings) {
        Ok(()) => debug!("[SETTINGS] saved {path:?}"),
        Err(err) => error!("[SETTINGS] failed to save {path:?}: {err}"),
    }
}
